use std::path::PathBuf;

use rust_decimal::Decimal;

/// Order-sum threshold used by the restriction exercises.
pub const DEFAULT_THRESHOLD: Decimal = Decimal::from_parts(1500, 0, 0, false, 0);
pub const DEFAULT_CHEAP_BELOW: Decimal = Decimal::from_parts(10, 0, 0, false, 0);
pub const DEFAULT_EXPENSIVE_FROM: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// Price boundaries for the price-band grouping.
///
/// A product is cheap below `cheap_below`, expensive from `expensive_from`
/// upwards and average in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBands {
    pub cheap_below: Decimal,
    pub expensive_from: Decimal,
}

impl Default for PriceBands {
    fn default() -> Self {
        Self {
            cheap_below: DEFAULT_CHEAP_BELOW,
            expensive_from: DEFAULT_EXPENSIVE_FROM,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Hides banners and headers at 1, everything but result lines at 2.
    pub quiet: u8,
    pub no_banner: bool,
    /// Exercises that filter on order sums keep customers strictly above this.
    pub threshold: Decimal,
    pub price_bands: PriceBands,
    /// Loads the dataset from this JSON file instead of the built-in one.
    pub data: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quiet: 0,
            no_banner: false,
            threshold: DEFAULT_THRESHOLD,
            price_bands: PriceBands::default(),
            data: None,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), String> {
        if self.threshold.is_sign_negative() {
            return Err(format!("threshold must not be negative, got {}", self.threshold));
        }
        let bands = &self.price_bands;
        if bands.cheap_below > bands.expensive_from {
            return Err(format!(
                "cheap band ({}) must not start above the expensive band ({})",
                bands.cheap_below, bands.expensive_from
            ));
        }
        Ok(())
    }
}
