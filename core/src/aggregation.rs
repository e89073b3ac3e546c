//! # Aggregation
//!
//! Sums and means over the dataset. Money stays in [`Decimal`] all the way
//! through; order counts are averaged as `f64`.

use drill_common::{Customer, Dataset};
use rust_decimal::Decimal;
use tracing::debug;

use crate::grouping::group_by;

/// Arithmetic mean, `None` for an empty input.
pub fn mean<I>(values: I) -> Option<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    let (sum, count) = values
        .into_iter()
        .fold((Decimal::ZERO, 0u32), |(sum, count), v| (sum + v, count + 1));

    (count > 0).then(|| sum / Decimal::from(count))
}

#[derive(Debug, Clone, PartialEq)]
pub struct CityAverage<'a> {
    pub city: &'a str,
    pub customers: usize,
    /// Mean over customers of their order sums.
    pub average_income: Decimal,
    /// Mean number of orders per customer.
    pub intensity: f64,
}

fn average_orders(customers: &[&Customer]) -> f64 {
    let orders: usize = customers.iter().map(|c| c.orders.len()).sum();
    orders as f64 / customers.len() as f64
}

/// Per city, the average order sum and the average number of orders of the
/// customers living there.
pub fn city_averages(dataset: &Dataset) -> Vec<CityAverage<'_>> {
    let averages: Vec<CityAverage<'_>> = group_by(&dataset.customers, |&c| c.city.as_str())
        .into_iter()
        .filter_map(|city| {
            let average_income = mean(city.items.iter().map(|c| c.orders_total()))?;
            Some(CityAverage {
                customers: city.len(),
                average_income,
                intensity: average_orders(&city.items),
                city: city.key,
            })
        })
        .collect();

    debug!(cities = averages.len(), "city averages computed");
    averages
}
