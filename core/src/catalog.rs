//! # Exercise Catalog
//!
//! The fixed list of exercises the CLI knows how to run.
//!
//! An exercise can be addressed by:
//! * its slug (e.g. `low-numbers`, case-insensitive),
//! * its 1-based position in [`CATALOG`] (e.g. `3`).

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Restriction,
    Projection,
    Ordering,
    Grouping,
    Aggregation,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Restriction => "Restriction operators",
            Category::Projection => "Projection operators",
            Category::Ordering => "Ordering operators",
            Category::Grouping => "Grouping operators",
            Category::Aggregation => "Aggregate operators",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExerciseId {
    LowNumbers,
    InStock,
    OverThreshold,
    RichCustomers,
    IncompleteContacts,
    Suppliers,
    SuppliersIndexed,
    FirstOrders,
    CustomersByStart,
    ProductGroups,
    PriceBands,
    CustomerActivity,
    CityAverages,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exercise {
    pub id: ExerciseId,
    pub slug: &'static str,
    pub category: Category,
    pub title: &'static str,
    pub description: &'static str,
}

pub const CATALOG: &[Exercise] = &[
    Exercise {
        id: ExerciseId::LowNumbers,
        slug: "low-numbers",
        category: Category::Restriction,
        title: "Numbers below five",
        description: "Keeps the elements of a fixed array that are less than 5.",
    },
    Exercise {
        id: ExerciseId::InStock,
        slug: "in-stock",
        category: Category::Restriction,
        title: "Products in stock",
        description: "Lists every product with at least one unit in stock.",
    },
    Exercise {
        id: ExerciseId::OverThreshold,
        slug: "over-threshold",
        category: Category::Restriction,
        title: "Order sums over the threshold",
        description: "Customer ids whose orders add up to more than the threshold, with the sum.",
    },
    Exercise {
        id: ExerciseId::RichCustomers,
        slug: "rich-customers",
        category: Category::Restriction,
        title: "Customers over the threshold",
        description: "Full records of the customers whose orders add up to more than the threshold.",
    },
    Exercise {
        id: ExerciseId::IncompleteContacts,
        slug: "incomplete-contacts",
        category: Category::Restriction,
        title: "Incomplete contact data",
        description: "Customers with a non-numeric postal code, no region, or no area code in the phone number.",
    },
    Exercise {
        id: ExerciseId::Suppliers,
        slug: "suppliers",
        category: Category::Projection,
        title: "Suppliers next door",
        description: "For each customer, the suppliers in the same city and country.",
    },
    Exercise {
        id: ExerciseId::SuppliersIndexed,
        slug: "suppliers-indexed",
        category: Category::Projection,
        title: "Suppliers next door (indexed)",
        description: "Same as `suppliers`, answered from a location index built in one pass.",
    },
    Exercise {
        id: ExerciseId::FirstOrders,
        slug: "first-orders",
        category: Category::Projection,
        title: "First order date",
        description: "Month and year of each customer's earliest order.",
    },
    Exercise {
        id: ExerciseId::CustomersByStart,
        slug: "customers-by-start",
        category: Category::Ordering,
        title: "Customers by start date",
        description: "Ordered by year of first order, customer id, month of first order, then order sum descending.",
    },
    Exercise {
        id: ExerciseId::ProductGroups,
        slug: "product-groups",
        category: Category::Grouping,
        title: "Products by category and stock",
        description: "Groups products by category, then by availability, cheapest first.",
    },
    Exercise {
        id: ExerciseId::PriceBands,
        slug: "price-bands",
        category: Category::Grouping,
        title: "Products by price band",
        description: "Groups products into cheap, average and expensive.",
    },
    Exercise {
        id: ExerciseId::CustomerActivity,
        slug: "activity",
        category: Category::Grouping,
        title: "Customer activity",
        description: "Order counts per month, per year and per year and month for each customer.",
    },
    Exercise {
        id: ExerciseId::CityAverages,
        slug: "city-averages",
        category: Category::Aggregation,
        title: "City averages",
        description: "Average order sum and average number of orders of the customers in each city.",
    },
];

pub fn catalog() -> &'static [Exercise] {
    CATALOG
}

impl Exercise {
    pub fn find(id: ExerciseId) -> &'static Exercise {
        CATALOG
            .iter()
            .find(|exercise| exercise.id == id)
            .unwrap_or_else(|| unreachable!("every exercise id has a catalog entry"))
    }

    /// 1-based position in the catalog.
    pub fn number(&self) -> usize {
        CATALOG
            .iter()
            .position(|exercise| exercise.id == self.id)
            .map_or(0, |idx| idx + 1)
    }
}

impl ExerciseId {
    pub fn exercise(self) -> &'static Exercise {
        Exercise::find(self)
    }
}

impl fmt::Display for ExerciseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.exercise().slug)
    }
}

impl FromStr for ExerciseId {
    type Err = String;

    /// Parses a slug or a catalog number into an [`ExerciseId`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if let Ok(number) = trimmed.parse::<usize>() {
            return number
                .checked_sub(1)
                .and_then(|idx| CATALOG.get(idx))
                .map(|exercise| exercise.id)
                .ok_or_else(|| {
                    format!("exercise number {number} is out of range 1-{}", CATALOG.len())
                });
        }

        CATALOG
            .iter()
            .find(|exercise| exercise.slug.eq_ignore_ascii_case(trimmed))
            .map(|exercise| exercise.id)
            .ok_or_else(|| {
                let slugs: Vec<&str> = CATALOG.iter().map(|exercise| exercise.slug).collect();
                format!("unknown exercise `{trimmed}`; expected one of: {}", slugs.join(", "))
            })
    }
}
