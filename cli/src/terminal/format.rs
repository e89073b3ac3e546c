use chrono::{Datelike, NaiveDate};
use colored::*;
use drill_common::{Customer, Product};
use rust_decimal::Decimal;

use crate::terminal::colors;

type Detail = (String, ColoredString);

pub fn money(amount: Decimal) -> ColoredString {
    format!("{:.2}", amount.round_dp(2)).color(colors::MONEY)
}

pub fn count(n: usize) -> ColoredString {
    n.to_string().color(colors::COUNT)
}

pub fn ratio(value: f64) -> ColoredString {
    format!("{value:.2}").color(colors::COUNT)
}

pub fn month_year(date: Option<NaiveDate>) -> ColoredString {
    match date {
        Some(date) => format!("{:02}/{}", date.month(), date.year()).color(colors::DATE),
        None => "no orders".color(colors::MISSING).italic(),
    }
}

pub fn optional(value: Option<&str>) -> ColoredString {
    match value {
        Some(v) if !v.trim().is_empty() => v.normal(),
        _ => "none".color(colors::MISSING).italic(),
    }
}

pub fn stock(in_stock: bool) -> ColoredString {
    if in_stock {
        "in stock".color(colors::IN_STOCK)
    } else {
        "out of stock".color(colors::OUT_OF_STOCK)
    }
}

pub fn product_line(product: &Product) -> String {
    format!(
        "{} {}",
        product.product_name,
        format!("@ {}", money(product.unit_price)).color(colors::SEPARATOR)
    )
}

pub fn customer_to_details(customer: &Customer) -> Vec<Detail> {
    let mut details: Vec<Detail> = vec![
        ("Company".to_string(), customer.company_name.normal()),
        ("City".to_string(), format!("{}, {}", customer.city, customer.country).normal()),
        ("Postal".to_string(), optional(customer.postal_code.as_deref())),
        ("Region".to_string(), optional(customer.region.as_deref())),
        ("Phone".to_string(), optional(Some(customer.phone.as_str()))),
        ("Orders".to_string(), count(customer.orders.len())),
    ];

    if customer.has_orders() {
        details.push(("Total".to_string(), money(customer.orders_total())));
    }

    details
}
