//! # Grouping
//!
//! [`group_by`] partitions a sequence in one pass. Groups come out in the order
//! their key first appears and every group keeps the relative order of its
//! elements, so nested groupings stay deterministic.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use chrono::Datelike;
use drill_common::config::PriceBands;
use drill_common::{Dataset, Order, Product};
use rust_decimal::Decimal;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<K, T> {
    pub key: K,
    pub items: Vec<T>,
}

impl<K, T> Group<K, T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

pub fn group_by<I, K, F>(items: I, mut key_fn: F) -> Vec<Group<K, I::Item>>
where
    I: IntoIterator,
    K: Eq + Hash + Clone,
    F: FnMut(&I::Item) -> K,
{
    let mut slots: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<Group<K, I::Item>> = Vec::new();

    for item in items {
        let key = key_fn(&item);
        match slots.get(&key) {
            Some(&slot) => groups[slot].items.push(item),
            None => {
                slots.insert(key.clone(), groups.len());
                groups.push(Group {
                    key,
                    items: vec![item],
                });
            }
        }
    }

    groups
}

/// Products of one category split by stock availability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup<'a> {
    pub category: &'a str,
    pub stock: Vec<StockGroup<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockGroup<'a> {
    pub in_stock: bool,
    /// Cheapest first.
    pub products: Vec<&'a Product>,
}

/// Groups products by category, then by whether they are in stock, ordering
/// each innermost group by unit price.
pub fn products_by_category(dataset: &Dataset) -> Vec<CategoryGroup<'_>> {
    let groups: Vec<CategoryGroup<'_>> = group_by(&dataset.products, |&p| p.category.as_str())
        .into_iter()
        .map(|category| CategoryGroup {
            category: category.key,
            stock: group_by(category.items, |p| p.in_stock())
                .into_iter()
                .map(|stock| {
                    let mut products = stock.items;
                    products.sort_by_key(|p| p.unit_price);
                    StockGroup {
                        in_stock: stock.key,
                        products,
                    }
                })
                .collect(),
        })
        .collect();

    debug!(categories = groups.len(), "products grouped by category");
    groups
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceBand {
    Cheap,
    Average,
    Expensive,
}

impl PriceBand {
    pub fn of(price: Decimal, bands: &PriceBands) -> Self {
        if price < bands.cheap_below {
            PriceBand::Cheap
        } else if price < bands.expensive_from {
            PriceBand::Average
        } else {
            PriceBand::Expensive
        }
    }
}

impl fmt::Display for PriceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PriceBand::Cheap => "Cheap",
            PriceBand::Average => "Average price",
            PriceBand::Expensive => "Expensive",
        };
        f.write_str(label)
    }
}

pub fn products_by_price_band<'a>(
    dataset: &'a Dataset,
    bands: &PriceBands,
) -> Vec<Group<PriceBand, &'a Product>> {
    group_by(&dataset.products, |p| PriceBand::of(p.unit_price, bands))
}

/// Number of orders that fell into one period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodCount<P> {
    pub period: P,
    pub orders: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerActivity<'a> {
    pub customer_id: &'a str,
    pub by_month: Vec<PeriodCount<u32>>,
    pub by_year: Vec<PeriodCount<i32>>,
    pub by_year_month: Vec<PeriodCount<(i32, u32)>>,
}

fn count_by<'a, P, F>(orders: &'a [Order], period: F) -> Vec<PeriodCount<P>>
where
    P: Eq + Hash + Clone,
    F: FnMut(&&'a Order) -> P,
{
    group_by(orders, period)
        .into_iter()
        .map(|group| PeriodCount {
            orders: group.len(),
            period: group.key,
        })
        .collect()
}

/// Order counts per month, per year and per year-month for every customer.
pub fn customer_activity(dataset: &Dataset) -> Vec<CustomerActivity<'_>> {
    dataset
        .customers
        .iter()
        .map(|customer| CustomerActivity {
            customer_id: &customer.customer_id,
            by_month: count_by(&customer.orders, |o| o.order_date.month()),
            by_year: count_by(&customer.orders, |o| o.order_date.year()),
            by_year_month: count_by(&customer.orders, |o| {
                (o.order_date.year(), o.order_date.month())
            }),
        })
        .collect()
}
