use chrono::NaiveDate;
use drill_common::{Customer, Dataset, Order, Product, Supplier};
use rust_decimal::Decimal;

pub fn date(s: &str) -> NaiveDate {
    s.parse().expect("fixture dates are ISO formatted")
}

pub fn money(s: &str) -> Decimal {
    s.parse().expect("fixture amounts are decimal")
}

pub fn order(id: u32, day: &str, total: &str) -> Order {
    Order {
        order_id: id,
        order_date: date(day),
        total: money(total),
    }
}

pub fn customer(id: &str, city: &str, country: &str, orders: Vec<Order>) -> Customer {
    Customer {
        customer_id: id.into(),
        company_name: format!("{id} Ltd."),
        address: String::new(),
        city: city.into(),
        country: country.into(),
        postal_code: Some("12345".into()),
        region: Some("XX".into()),
        phone: "(555) 555-0100".into(),
        orders,
    }
}

pub fn product(id: u32, name: &str, category: &str, price: &str, stock: u32) -> Product {
    Product {
        product_id: id,
        product_name: name.into(),
        category: category.into(),
        unit_price: money(price),
        units_in_stock: stock,
    }
}

pub fn supplier(name: &str, city: &str, country: &str) -> Supplier {
    Supplier {
        supplier_name: name.into(),
        address: String::new(),
        city: city.into(),
        country: country.into(),
    }
}

pub fn builtin() -> Dataset {
    Dataset::builtin().expect("built-in dataset should be valid")
}
