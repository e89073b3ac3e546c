//! # Ordering
//!
//! Multi-key ordering as a composite comparator evaluated left to right.

use std::cmp::Ordering;

use chrono::{Datelike, NaiveDate};
use drill_common::Dataset;
use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomerStart<'a> {
    pub customer_id: &'a str,
    pub first_order: NaiveDate,
    pub total: Decimal,
}

/// Year of the first order, then customer id, then month of the first order,
/// then the largest order sum first.
pub fn by_start(a: &CustomerStart<'_>, b: &CustomerStart<'_>) -> Ordering {
    a.first_order
        .year()
        .cmp(&b.first_order.year())
        .then_with(|| a.customer_id.cmp(b.customer_id))
        .then_with(|| a.first_order.month().cmp(&b.first_order.month()))
        .then_with(|| b.total.cmp(&a.total))
}

/// Customers that ordered at least once, sorted with [`by_start`].
///
/// The sort is stable: entries that compare equal keep their dataset order.
pub fn customers_by_start(dataset: &Dataset) -> Vec<CustomerStart<'_>> {
    let mut rows: Vec<CustomerStart<'_>> = dataset
        .customers_with_orders()
        .filter_map(|customer| {
            Some(CustomerStart {
                customer_id: &customer.customer_id,
                first_order: customer.first_order_date()?,
                total: customer.orders_total(),
            })
        })
        .collect();

    rows.sort_by(by_start);
    rows
}
