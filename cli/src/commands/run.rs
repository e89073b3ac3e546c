use anyhow::Context;
use colored::*;
use drill_common::config::Config;
use drill_common::{Dataset, info, success, warn};
use drill_core::catalog::{self, Exercise, ExerciseId};
use drill_core::{aggregation, grouping, ordering, projection, restriction};

use crate::mprint;
use crate::terminal::{colors, format, print};

pub fn load_dataset(cfg: &Config) -> anyhow::Result<Dataset> {
    let dataset = match &cfg.data {
        Some(path) => Dataset::from_path(path)
            .with_context(|| format!("loading dataset from {}", path.display()))?,
        None => Dataset::builtin().context("loading the built-in dataset")?,
    };

    if dataset.customers.is_empty() && dataset.products.is_empty() {
        warn!("Dataset is empty, exercises will print no results");
    } else if cfg.quiet == 0 {
        info!(
            "Dataset ready: {} customers, {} products, {} suppliers",
            dataset.customers.len(),
            dataset.products.len(),
            dataset.suppliers.len()
        );
    }
    Ok(dataset)
}

/// Runs the requested exercises in the given order, or the whole catalog.
pub fn run(exercises: &[ExerciseId], dataset: &Dataset, cfg: &Config) {
    let selected: Vec<&Exercise> = if exercises.is_empty() {
        catalog::catalog().iter().collect()
    } else {
        exercises.iter().map(|id| id.exercise()).collect()
    };

    for (idx, exercise) in selected.iter().enumerate() {
        print::header(&format!("{}. {}", exercise.number(), exercise.title), cfg.quiet);
        run_exercise(exercise.id, dataset, cfg);
        if cfg.quiet == 0 && idx + 1 != selected.len() {
            mprint!();
        }
    }

    if cfg.quiet == 0 {
        print::fat_separator();
        print::centerln(&format!(
            "{} {}",
            selected.len().to_string().bold().green(),
            "exercises completed".color(colors::TEXT_DEFAULT)
        ));
    } else {
        success!("{} exercises completed", selected.len());
    }
}

fn run_exercise(id: ExerciseId, dataset: &Dataset, cfg: &Config) {
    match id {
        ExerciseId::LowNumbers => low_numbers(cfg),
        ExerciseId::InStock => in_stock(dataset),
        ExerciseId::OverThreshold => over_threshold(dataset, cfg),
        ExerciseId::RichCustomers => rich_customers(dataset, cfg),
        ExerciseId::IncompleteContacts => incomplete_contacts(dataset),
        ExerciseId::Suppliers => suppliers(projection::suppliers_by_location(dataset)),
        ExerciseId::SuppliersIndexed => {
            suppliers(projection::suppliers_by_location_grouped(dataset))
        }
        ExerciseId::FirstOrders => first_orders(dataset),
        ExerciseId::CustomersByStart => customers_by_start(dataset),
        ExerciseId::ProductGroups => product_groups(dataset),
        ExerciseId::PriceBands => price_bands(dataset, cfg),
        ExerciseId::CustomerActivity => activity(dataset),
        ExerciseId::CityAverages => city_averages(dataset),
    }
}

/// Line summarizing the low-numbers filter, hidden at `-qq`.
fn low_numbers_note(found: usize, limit: i32, quiet: u8) -> Option<String> {
    (quiet < 2).then(|| format!("{} numbers < {limit}", format::count(found)))
}

/// Line naming the active threshold, hidden at `-qq`.
fn threshold_note(cfg: &Config) -> Option<String> {
    (cfg.quiet < 2)
        .then(|| format!("Order sum greater than {}", format::money(cfg.threshold)))
}

fn low_numbers(cfg: &Config) {
    let limit = 5;
    let numbers = restriction::low_numbers(&restriction::LOW_NUMBERS, limit);
    print::set_key_width(["Input", "Output"]);
    print::aligned_line("Input", format!("{:?}", restriction::LOW_NUMBERS));
    print::aligned_line(
        "Output",
        format!("{numbers:?}").color(colors::ACCENT),
    );
    if let Some(note) = low_numbers_note(numbers.len(), limit, cfg.quiet) {
        print::print_status(note);
    }
}

fn in_stock(dataset: &Dataset) {
    let products = restriction::products_in_stock(dataset);
    if products.is_empty() {
        print::no_results();
        return;
    }
    for product in products {
        print::print_status(format!(
            "{} {}",
            format::product_line(product),
            format!("({} units)", product.units_in_stock).color(colors::SEPARATOR)
        ));
    }
}

fn over_threshold(dataset: &Dataset, cfg: &Config) {
    let customers = restriction::customers_over_threshold(dataset, cfg.threshold);
    if let Some(note) = threshold_note(cfg) {
        print::print_status(note);
    }
    if customers.is_empty() {
        print::no_results();
        return;
    }
    print::set_key_width(customers.iter().map(|c| c.customer_id));
    for customer in customers {
        print::aligned_line(customer.customer_id, format::money(customer.total));
    }
}

fn rich_customers(dataset: &Dataset, cfg: &Config) {
    let customers = restriction::customers_with_total_over(dataset, cfg.threshold);
    if let Some(note) = threshold_note(cfg) {
        print::print_status(note);
    }
    if customers.is_empty() {
        print::no_results();
        return;
    }
    for (idx, customer) in customers.iter().enumerate() {
        print::tree_head(idx, &customer.customer_id);
        print::as_tree_one_level(format::customer_to_details(customer));
    }
}

fn incomplete_contacts(dataset: &Dataset) {
    let customers = restriction::customers_with_incomplete_contacts(dataset);
    if customers.is_empty() {
        print::no_results();
        return;
    }
    for (idx, customer) in customers.iter().enumerate() {
        print::tree_head(idx, &customer.customer_id);
        print::as_tree_one_level(vec![
            (
                "Postal".to_string(),
                format::optional(customer.postal_code.as_deref()),
            ),
            ("Region".to_string(), format::optional(customer.region.as_deref())),
            ("Phone".to_string(), format::optional(Some(customer.phone.as_str()))),
        ]);
    }
}

fn suppliers(rows: Vec<projection::CustomerSuppliers<'_>>) {
    print::set_key_width(rows.iter().map(|row| row.customer_id));
    for row in &rows {
        let names = row.supplier_names();
        let value: ColoredString = if names.is_empty() {
            "none".color(colors::MISSING).italic()
        } else {
            names.join(", ").normal()
        };
        print::aligned_line(row.customer_id, value);
    }
}

fn first_orders(dataset: &Dataset) {
    let rows = projection::first_order_dates(dataset);
    print::set_key_width(rows.iter().map(|row| row.customer_id));
    for row in rows {
        print::aligned_line(row.customer_id, format::month_year(row.first_order));
    }
}

fn customers_by_start(dataset: &Dataset) {
    let rows = ordering::customers_by_start(dataset);
    if rows.is_empty() {
        print::no_results();
        return;
    }
    print::set_key_width(rows.iter().map(|row| row.customer_id));
    for row in rows {
        print::aligned_line(
            row.customer_id,
            format!(
                "{} {}",
                format::month_year(Some(row.first_order)),
                format::money(row.total)
            ),
        );
    }
}

fn product_groups(dataset: &Dataset) {
    let groups = grouping::products_by_category(dataset);
    if groups.is_empty() {
        print::no_results();
        return;
    }
    for (idx, category) in groups.iter().enumerate() {
        print::tree_head(idx, category.category);
        for (s, stock) in category.stock.iter().enumerate() {
            let last_stock = s + 1 == category.stock.len();
            print::tree_node(&[], last_stock, &format::stock(stock.in_stock).to_string());
            for (p, product) in stock.products.iter().enumerate() {
                let last_product = p + 1 == stock.products.len();
                print::tree_node(&[!last_stock], last_product, &format::product_line(product));
            }
        }
    }
}

fn price_bands(dataset: &Dataset, cfg: &Config) {
    let groups = grouping::products_by_price_band(dataset, &cfg.price_bands);
    if groups.is_empty() {
        print::no_results();
        return;
    }
    for (idx, group) in groups.iter().enumerate() {
        print::tree_head(idx, &format!("{} ({})", group.key, format::count(group.len())));
        for (p, product) in group.items.iter().enumerate() {
            print::tree_node(&[], p + 1 == group.len(), &format::product_line(product));
        }
    }
}

fn activity(dataset: &Dataset) {
    for (idx, record) in grouping::customer_activity(dataset).iter().enumerate() {
        print::tree_head(idx, record.customer_id);
        if record.by_month.is_empty() {
            print::tree_node(&[], true, &format::month_year(None).to_string());
            continue;
        }

        let months: Vec<String> = record
            .by_month
            .iter()
            .map(|m| format!("month {:02}: {}", m.period, format::count(m.orders)))
            .collect();
        let years: Vec<String> = record
            .by_year
            .iter()
            .map(|y| format!("{}: {}", y.period, format::count(y.orders)))
            .collect();
        let year_months: Vec<String> = record
            .by_year_month
            .iter()
            .map(|ym| {
                let (year, month) = ym.period;
                format!("{month:02}/{year}: {}", format::count(ym.orders))
            })
            .collect();

        let sections = [
            ("Months", months),
            ("Years", years),
            ("Year and month", year_months),
        ];
        for (s, (title, lines)) in sections.iter().enumerate() {
            let last_section = s + 1 == sections.len();
            print::tree_node(&[], last_section, &title.bold().to_string());
            for (l, line) in lines.iter().enumerate() {
                print::tree_node(&[!last_section], l + 1 == lines.len(), line);
            }
        }
    }
}

fn city_averages(dataset: &Dataset) {
    for (idx, city) in aggregation::city_averages(dataset).iter().enumerate() {
        print::tree_head(idx, city.city);
        print::as_tree_one_level(vec![
            ("Customers".to_string(), format::count(city.customers)),
            ("Average income".to_string(), format::money(city.average_income)),
            ("Intensity".to_string(), format::ratio(city.intensity)),
        ]);
    }
}
