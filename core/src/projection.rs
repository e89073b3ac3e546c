//! # Projection
//!
//! Reshapes customers into smaller views: the suppliers sharing their location
//! and the date of their first order.

use std::collections::HashMap;

use chrono::NaiveDate;
use drill_common::{Dataset, Supplier};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerSuppliers<'a> {
    pub customer_id: &'a str,
    pub suppliers: Vec<&'a Supplier>,
}

impl CustomerSuppliers<'_> {
    pub fn supplier_names(&self) -> Vec<&str> {
        self.suppliers.iter().map(|s| s.supplier_name.as_str()).collect()
    }
}

/// For every customer, the suppliers located in the same city and country.
///
/// Scans the supplier list once per customer.
pub fn suppliers_by_location(dataset: &Dataset) -> Vec<CustomerSuppliers<'_>> {
    dataset
        .customers
        .iter()
        .map(|customer| CustomerSuppliers {
            customer_id: &customer.customer_id,
            suppliers: dataset
                .suppliers
                .iter()
                .filter(|s| s.located_with(customer))
                .collect(),
        })
        .collect()
}

/// Same result as [`suppliers_by_location`], built from a location index that
/// is filled in a single pass over the suppliers.
pub fn suppliers_by_location_grouped(dataset: &Dataset) -> Vec<CustomerSuppliers<'_>> {
    let mut by_location: HashMap<(&str, &str), Vec<&Supplier>> = HashMap::new();
    for supplier in &dataset.suppliers {
        by_location
            .entry((supplier.country.as_str(), supplier.city.as_str()))
            .or_default()
            .push(supplier);
    }

    dataset
        .customers
        .iter()
        .map(|customer| CustomerSuppliers {
            customer_id: &customer.customer_id,
            suppliers: by_location
                .get(&(customer.country.as_str(), customer.city.as_str()))
                .cloned()
                .unwrap_or_default(),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirstOrder<'a> {
    pub customer_id: &'a str,
    /// `None` for customers that never ordered.
    pub first_order: Option<NaiveDate>,
}

pub fn first_order_dates(dataset: &Dataset) -> Vec<FirstOrder<'_>> {
    dataset
        .customers
        .iter()
        .map(|customer| FirstOrder {
            customer_id: &customer.customer_id,
            first_order: customer.first_order_date(),
        })
        .collect()
}
