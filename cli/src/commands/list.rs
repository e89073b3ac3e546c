use colored::*;
use drill_core::catalog::{self, Category};
use drill_core::group_by;

use crate::terminal::{colors, print};

pub fn list(quiet: u8) {
    let by_category = group_by(catalog::catalog(), |exercise| exercise.category);

    for (idx, group) in by_category.iter().enumerate() {
        print_category(group.key, quiet);
        for exercise in &group.items {
            let number = format!("{:>2}", exercise.number()).color(colors::ACCENT);
            print::print_status(format!(
                "{} {} {}",
                number,
                format!("{:<20}", exercise.slug).color(colors::PRIMARY),
                exercise.title
            ));
            if quiet == 0 {
                print::print(&format!("       {}", exercise.description.italic().bright_black()));
            }
        }
        if quiet == 0 && idx + 1 != by_category.len() {
            crate::mprint!();
        }
    }
}

fn print_category(category: Category, quiet: u8) {
    if quiet > 1 {
        return;
    }
    print::print(&format!("{}", category.to_string().bold()));
}
