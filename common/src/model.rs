//! Read-only records of the dataset.
//!
//! Customers own their orders; customers and suppliers relate only through
//! equal `city` and `country` values.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: u32,
    pub order_date: NaiveDate,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub address: String,
    pub city: String,
    pub country: String,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub phone: String,
    /// Kept in the order they were recorded.
    #[serde(default)]
    pub orders: Vec<Order>,
}

impl Customer {
    /// Sum of all order totals, zero for a customer without orders.
    pub fn orders_total(&self) -> Decimal {
        self.orders.iter().map(|order| order.total).sum()
    }

    /// Earliest order date, `None` when the customer never ordered.
    pub fn first_order_date(&self) -> Option<NaiveDate> {
        self.orders.iter().map(|order| order.order_date).min()
    }

    pub fn has_orders(&self) -> bool {
        !self.orders.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: u32,
    pub product_name: String,
    pub category: String,
    pub unit_price: Decimal,
    pub units_in_stock: u32,
}

impl Product {
    pub fn in_stock(&self) -> bool {
        self.units_in_stock != 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub supplier_name: String,
    #[serde(default)]
    pub address: String,
    pub city: String,
    pub country: String,
}

impl Supplier {
    /// Suppliers and customers match on both city and country.
    pub fn located_with(&self, customer: &Customer) -> bool {
        self.city == customer.city && self.country == customer.country
    }
}
