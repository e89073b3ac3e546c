//! # Dataset
//!
//! The static collection every exercise queries. It is loaded once, validated,
//! and only ever handed out as a shared borrow afterwards.

use std::collections::HashSet;
use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::DatasetError;
use crate::model::{Customer, Product, Supplier};

const BUILTIN_DATASET: &str = include_str!("../data/dataset.json");

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub customers: Vec<Customer>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub suppliers: Vec<Supplier>,
}

impl Dataset {
    /// Sample dataset compiled into the binary.
    pub fn builtin() -> Result<Self, DatasetError> {
        Self::from_json(BUILTIN_DATASET)
    }

    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let dataset: Dataset = serde_json::from_str(json)?;
        dataset.validate()?;
        Ok(dataset)
    }

    pub fn from_path(path: &Path) -> Result<Self, DatasetError> {
        let json = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_json(&json)?;
        tracing::debug!(
            path = %path.display(),
            customers = dataset.customers.len(),
            products = dataset.products.len(),
            suppliers = dataset.suppliers.len(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    /// Rejects datasets the exercises cannot reason about: blank or repeated
    /// customer ids, repeated product ids and negative amounts.
    ///
    /// Totals are non-negative, so the grand total bounds every per-customer
    /// and per-city sum. It must fit in a [`Decimal`].
    pub fn validate(&self) -> Result<(), DatasetError> {
        let mut customer_ids: HashSet<&str> = HashSet::new();
        let mut grand_total = Decimal::ZERO;
        for customer in &self.customers {
            let id = customer.customer_id.trim();
            if id.is_empty() {
                return Err(DatasetError::Invalid("customer id cannot be empty".into()));
            }
            if !customer_ids.insert(id) {
                return Err(DatasetError::Invalid(format!("duplicate customer id `{id}`")));
            }
            if let Some(order) = customer.orders.iter().find(|o| o.total.is_sign_negative()) {
                return Err(DatasetError::Invalid(format!(
                    "order {} of `{id}` has a negative total",
                    order.order_id
                )));
            }
            for order in &customer.orders {
                grand_total = grand_total.checked_add(order.total).ok_or_else(|| {
                    DatasetError::Invalid(format!(
                        "order totals overflow at order {} of `{id}`",
                        order.order_id
                    ))
                })?;
            }
        }

        let mut product_ids: HashSet<u32> = HashSet::new();
        for product in &self.products {
            if !product_ids.insert(product.product_id) {
                return Err(DatasetError::Invalid(format!(
                    "duplicate product id {}",
                    product.product_id
                )));
            }
            if product.unit_price.is_sign_negative() {
                return Err(DatasetError::Invalid(format!(
                    "product `{}` has a negative unit price",
                    product.product_name
                )));
            }
        }

        Ok(())
    }

    /// Customers that placed at least one order.
    pub fn customers_with_orders(&self) -> impl Iterator<Item = &Customer> {
        self.customers.iter().filter(|customer| customer.has_orders())
    }
}
