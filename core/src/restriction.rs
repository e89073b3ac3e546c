//! # Restriction
//!
//! Filtering exercises. Every function keeps the relative order of the records
//! it lets through.

use drill_common::{Customer, Dataset, Product};
use rust_decimal::Decimal;
use tracing::debug;

/// Input of the classic "low numbers" drill.
pub const LOW_NUMBERS: [i32; 10] = [5, 4, 1, 3, 9, 8, 6, 7, 2, 0];

pub fn low_numbers(numbers: &[i32], limit: i32) -> Vec<i32> {
    numbers.iter().copied().filter(|&n| n < limit).collect()
}

pub fn products_in_stock(dataset: &Dataset) -> Vec<&Product> {
    dataset.products.iter().filter(|p| p.in_stock()).collect()
}

/// A customer id paired with the sum of that customer's orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomerTotal<'a> {
    pub customer_id: &'a str,
    pub total: Decimal,
}

/// Customers whose orders add up to strictly more than `threshold`.
pub fn customers_over_threshold(dataset: &Dataset, threshold: Decimal) -> Vec<CustomerTotal<'_>> {
    let matches: Vec<CustomerTotal<'_>> = dataset
        .customers
        .iter()
        .map(|c| CustomerTotal {
            customer_id: &c.customer_id,
            total: c.orders_total(),
        })
        .filter(|ct| ct.total > threshold)
        .collect();

    debug!(%threshold, customers = matches.len(), "order-sum threshold applied");
    matches
}

/// Same predicate as [`customers_over_threshold`], keeping the whole record.
pub fn customers_with_total_over(dataset: &Dataset, threshold: Decimal) -> Vec<&Customer> {
    dataset
        .customers
        .iter()
        .filter(|c| c.orders_total() > threshold)
        .collect()
}

/// A customer's contact data is incomplete when the postal code contains
/// anything but digits, the region is missing or blank, or the phone number
/// lacks an area code in parentheses.
pub fn has_incomplete_contacts(customer: &Customer) -> bool {
    let odd_postal_code = customer
        .postal_code
        .as_deref()
        .is_some_and(|code| code.chars().any(|ch| !ch.is_ascii_digit()));
    let no_region = customer
        .region
        .as_deref()
        .is_none_or(|region| region.trim().is_empty());
    let no_area_code = !customer.phone.starts_with('(');

    odd_postal_code || no_region || no_area_code
}

pub fn customers_with_incomplete_contacts(dataset: &Dataset) -> Vec<&Customer> {
    dataset
        .customers
        .iter()
        .filter(|c| has_incomplete_contacts(c))
        .collect()
}
