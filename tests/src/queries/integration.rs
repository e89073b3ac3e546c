#![cfg(test)]
use chrono::NaiveDate;
use drill_common::Dataset;
use drill_common::config::{Config, PriceBands};
use drill_core::catalog::{self, ExerciseId};
use drill_core::grouping::PriceBand;
use drill_core::{aggregation, grouping, ordering, projection, restriction};
use rust_decimal::Decimal;

fn dataset() -> Dataset {
    Dataset::builtin().expect("built-in dataset should load")
}

/// Every catalog entry resolves back to itself by slug and by number.
#[test]
fn catalog_entries_resolve() {
    for exercise in catalog::catalog() {
        let by_slug: ExerciseId = exercise.slug.parse().unwrap();
        let by_number: ExerciseId = exercise.number().to_string().parse().unwrap();
        assert_eq!(by_slug, exercise.id);
        assert_eq!(by_number, exercise.id);
    }
}

#[test]
fn threshold_from_default_config() {
    let dataset = dataset();
    let cfg = Config::default();

    let totals = restriction::customers_over_threshold(&dataset, cfg.threshold);
    let records = restriction::customers_with_total_over(&dataset, cfg.threshold);

    assert_eq!(totals.len(), 9);
    assert_eq!(totals.len(), records.len());
    for (total, record) in totals.iter().zip(&records) {
        assert_eq!(total.customer_id, record.customer_id);
        assert_eq!(total.total, record.orders_total());
    }

    let queen = totals.iter().find(|t| t.customer_id == "QUEEN").unwrap();
    assert_eq!(queen.total, "11041.68".parse::<Decimal>().unwrap());
}

#[test]
fn raising_threshold_narrows_result() {
    let dataset = dataset();
    let ids: Vec<&str> = restriction::customers_over_threshold(&dataset, Decimal::new(5000, 0))
        .iter()
        .map(|t| t.customer_id)
        .collect();
    assert_eq!(ids, vec!["FRANK", "MEREP", "QUEEN"]);
}

#[test]
fn suppliers_next_door() {
    let dataset = dataset();
    let rows = projection::suppliers_by_location(&dataset);
    assert_eq!(rows.len(), dataset.customers.len());

    let names = |id: &str| {
        rows.iter()
            .find(|row| row.customer_id == id)
            .map(|row| row.supplier_names())
            .unwrap()
    };
    assert_eq!(names("AROUT"), vec!["Exotic Liquids"]);
    assert_eq!(names("PARIS"), vec!["Aux joyeux ecclésiastiques"]);
    assert_eq!(names("ALFKI"), vec!["Heli Süßwaren GmbH & Co. KG"]);
    assert!(names("VINET").is_empty());

    assert_eq!(rows, projection::suppliers_by_location_grouped(&dataset));
}

#[test]
fn first_orders_cover_idle_customers() {
    let dataset = dataset();
    let rows = projection::first_order_dates(&dataset);

    let alfki = rows.iter().find(|r| r.customer_id == "ALFKI").unwrap();
    assert_eq!(alfki.first_order, NaiveDate::from_ymd_opt(1997, 8, 25));

    let idle: Vec<&str> = rows
        .iter()
        .filter(|r| r.first_order.is_none())
        .map(|r| r.customer_id)
        .collect();
    assert_eq!(idle, vec!["FISSA", "PARIS"]);
}

#[test]
fn ordering_skips_customers_without_orders() {
    let dataset = dataset();
    let rows = ordering::customers_by_start(&dataset);
    assert_eq!(rows.len(), dataset.customers_with_orders().count());
    assert!(rows.iter().all(|r| r.customer_id != "FISSA" && r.customer_id != "PARIS"));
    assert_eq!(rows.first().map(|r| r.customer_id), Some("AROUT"));
    assert_eq!(rows.last().map(|r| r.customer_id), Some("GREAL"));
}

#[test]
fn custom_price_bands() {
    let dataset = dataset();
    let bands = PriceBands {
        cheap_below: Decimal::new(20, 0),
        expensive_from: Decimal::new(100, 0),
    };
    let groups = grouping::products_by_price_band(&dataset, &bands);
    let expensive = groups.iter().find(|g| g.key == PriceBand::Expensive).unwrap();
    let names: Vec<&str> = expensive.items.iter().map(|p| p.product_name.as_str()).collect();
    assert_eq!(names, vec!["Côte de Blaye", "Thüringer Rostbratwurst"]);
}

#[test]
fn activity_for_alfki() {
    let dataset = dataset();
    let activity = grouping::customer_activity(&dataset);
    let alfki = activity.iter().find(|a| a.customer_id == "ALFKI").unwrap();

    let months: Vec<(u32, usize)> = alfki.by_month.iter().map(|m| (m.period, m.orders)).collect();
    assert_eq!(months, vec![(8, 1), (10, 2), (1, 1)]);

    let years: Vec<(i32, usize)> = alfki.by_year.iter().map(|y| (y.period, y.orders)).collect();
    assert_eq!(years, vec![(1997, 3), (1998, 1)]);
}

#[test]
fn city_averages_cover_every_customer() {
    let dataset = dataset();
    let averages = aggregation::city_averages(&dataset);
    let customers: usize = averages.iter().map(|a| a.customers).sum();
    assert_eq!(customers, dataset.customers.len());

    let madrid = averages.iter().find(|a| a.city == "Madrid").unwrap();
    assert_eq!(madrid.average_income, Decimal::ZERO);
    assert_eq!(madrid.intensity, 0.0);
}

#[test]
fn dataset_loads_from_file() {
    let path = std::env::temp_dir().join(format!("drill-dataset-{}.json", std::process::id()));
    std::fs::write(&path, include_str!("../../../common/data/dataset.json")).unwrap();

    let loaded = Dataset::from_path(&path);
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded.unwrap(), dataset());
}
