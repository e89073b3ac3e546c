use std::cmp::{Ordering, Reverse};
use std::collections::HashSet;

use chrono::{Datelike, Duration, NaiveDate};
use drill_common::{Customer, Dataset, Order, Product, Supplier};
use drill_core::ordering::{self, CustomerStart};
use drill_core::{aggregation, grouping, projection, restriction};
use proptest::prelude::*;
use rust_decimal::Decimal;

const CITIES: [(&str, &str); 4] = [
    ("London", "UK"),
    ("Paris", "France"),
    ("Paris", "USA"),
    ("Berlin", "Germany"),
];
const CATEGORIES: [&str; 3] = ["Beverages", "Seafood", "Produce"];

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1996, 1, 1).unwrap()
}

fn order_strategy() -> impl Strategy<Value = Order> {
    (1u32..100_000, 0i64..1500, 0i64..500_000).prop_map(|(order_id, days, cents)| Order {
        order_id,
        order_date: base_date() + Duration::days(days),
        total: Decimal::new(cents, 2),
    })
}

fn customers_strategy() -> impl Strategy<Value = Vec<Customer>> {
    prop::collection::vec(
        (0..CITIES.len(), prop::collection::vec(order_strategy(), 0..6)),
        0..12,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(idx, (city, orders))| Customer {
                customer_id: format!("C{idx:04}"),
                company_name: String::new(),
                address: String::new(),
                city: CITIES[city].0.to_string(),
                country: CITIES[city].1.to_string(),
                postal_code: None,
                region: None,
                phone: String::new(),
                orders,
            })
            .collect()
    })
}

fn products_strategy() -> impl Strategy<Value = Vec<Product>> {
    prop::collection::vec((0..CATEGORIES.len(), 0i64..20_000, 0u32..4), 0..20).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(idx, (category, cents, units_in_stock))| Product {
                product_id: idx as u32,
                product_name: format!("P{idx}"),
                category: CATEGORIES[category].to_string(),
                unit_price: Decimal::new(cents, 2),
                units_in_stock,
            })
            .collect()
    })
}

fn suppliers_strategy() -> impl Strategy<Value = Vec<Supplier>> {
    prop::collection::vec(0..CITIES.len(), 0..8).prop_map(|cities| {
        cities
            .into_iter()
            .enumerate()
            .map(|(idx, city)| Supplier {
                supplier_name: format!("S{idx}"),
                address: String::new(),
                city: CITIES[city].0.to_string(),
                country: CITIES[city].1.to_string(),
            })
            .collect()
    })
}

fn dataset_strategy() -> impl Strategy<Value = Dataset> {
    (customers_strategy(), products_strategy(), suppliers_strategy()).prop_map(
        |(customers, products, suppliers)| Dataset {
            customers,
            products,
            suppliers,
        },
    )
}

fn start_row_strategy() -> impl Strategy<Value = (usize, i64, i64)> {
    (0usize..3, 0i64..1500, 0i64..10_000)
}

const IDS: [&str; 3] = ["ALFKI", "BONAP", "CACTU"];

fn start_row((id, days, cents): (usize, i64, i64)) -> CustomerStart<'static> {
    CustomerStart {
        customer_id: IDS[id],
        first_order: base_date() + Duration::days(days),
        total: Decimal::new(cents, 2),
    }
}

fn start_key<'a>(row: &CustomerStart<'a>) -> (i32, &'a str, u32, Reverse<Decimal>) {
    (
        row.first_order.year(),
        row.customer_id,
        row.first_order.month(),
        Reverse(row.total),
    )
}

proptest! {
    /// Property: the low-number filter is an order-preserving subsequence
    #[test]
    fn prop_low_numbers_preserve_order(
        numbers in prop::collection::vec(-50i32..50, 0..40),
        limit in -50i32..50,
    ) {
        let low = restriction::low_numbers(&numbers, limit);
        let expected: Vec<i32> = numbers.iter().copied().filter(|n| *n < limit).collect();
        prop_assert_eq!(low, expected);
    }

    /// Property: exactly the customers whose order sum exceeds the threshold are produced
    #[test]
    fn prop_threshold_is_exact(dataset in dataset_strategy(), cents in 0i64..1_000_000) {
        let threshold = Decimal::new(cents, 2);
        let produced: HashSet<&str> = restriction::customers_over_threshold(&dataset, threshold)
            .iter()
            .map(|ct| ct.customer_id)
            .collect();

        for customer in &dataset.customers {
            let sum: Decimal = customer.orders.iter().map(|o| o.total).sum();
            prop_assert_eq!(produced.contains(customer.customer_id.as_str()), sum > threshold);
        }
    }

    /// Property: category then stock grouping partitions the product set
    #[test]
    fn prop_category_groups_partition_products(dataset in dataset_strategy()) {
        let groups = grouping::products_by_category(&dataset);

        let mut seen: Vec<u32> = Vec::new();
        for category in &groups {
            for stock in &category.stock {
                prop_assert!(!stock.products.is_empty());
                for pair in stock.products.windows(2) {
                    prop_assert!(pair[0].unit_price <= pair[1].unit_price);
                }
                for product in &stock.products {
                    prop_assert_eq!(product.category.as_str(), category.category);
                    prop_assert_eq!(product.in_stock(), stock.in_stock);
                    seen.push(product.product_id);
                }
            }
        }

        seen.sort_unstable();
        let mut all: Vec<u32> = dataset.products.iter().map(|p| p.product_id).collect();
        all.sort_unstable();
        prop_assert_eq!(seen, all);
    }

    /// Property: the start-date comparator agrees with the lexicographic key
    #[test]
    fn prop_start_comparator_matches_keys(
        a in start_row_strategy(),
        b in start_row_strategy(),
    ) {
        let (a, b) = (start_row(a), start_row(b));
        prop_assert_eq!(ordering::by_start(&a, &b), start_key(&a).cmp(&start_key(&b)));
        prop_assert_eq!(ordering::by_start(&a, &b), ordering::by_start(&b, &a).reverse());
    }

    /// Property: sorting is stable and ordered under the comparator
    #[test]
    fn prop_start_sort_is_stable(rows in prop::collection::vec(start_row_strategy(), 0..30)) {
        let mut indexed: Vec<(usize, CustomerStart<'static>)> =
            rows.into_iter().map(start_row).enumerate().collect();
        indexed.sort_by(|(_, a), (_, b)| ordering::by_start(a, b));

        for pair in indexed.windows(2) {
            let ((i, a), (j, b)) = (&pair[0], &pair[1]);
            match ordering::by_start(a, b) {
                Ordering::Less => {}
                Ordering::Equal => prop_assert!(i < j),
                Ordering::Greater => prop_assert!(false, "rows out of order"),
            }
        }
    }

    /// Property: customers_by_start is sorted and holds every ordering customer
    #[test]
    fn prop_customers_by_start_sorted(dataset in dataset_strategy()) {
        let rows = ordering::customers_by_start(&dataset);
        prop_assert_eq!(rows.len(), dataset.customers_with_orders().count());
        for pair in rows.windows(2) {
            prop_assert_ne!(ordering::by_start(&pair[0], &pair[1]), Ordering::Greater);
        }
    }

    /// Property: city averages are the mean over exactly that city's customers
    #[test]
    fn prop_city_average_is_mean(dataset in dataset_strategy()) {
        for average in aggregation::city_averages(&dataset) {
            let residents: Vec<&Customer> = dataset
                .customers
                .iter()
                .filter(|c| c.city == average.city)
                .collect();
            prop_assert_eq!(average.customers, residents.len());

            let sum: Decimal = residents.iter().map(|c| c.orders_total()).sum();
            prop_assert_eq!(average.average_income, sum / Decimal::from(residents.len()));

            let orders: usize = residents.iter().map(|c| c.orders.len()).sum();
            let intensity = orders as f64 / residents.len() as f64;
            prop_assert!((average.intensity - intensity).abs() < 1e-9);
        }
    }

    /// Property: the indexed supplier lookup matches the nested scan
    #[test]
    fn prop_supplier_index_matches_scan(dataset in dataset_strategy()) {
        prop_assert_eq!(
            projection::suppliers_by_location(&dataset),
            projection::suppliers_by_location_grouped(&dataset)
        );
    }
}
