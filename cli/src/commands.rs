pub mod list;
pub mod run;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use drill_common::config::{
    Config, DEFAULT_CHEAP_BELOW, DEFAULT_EXPENSIVE_FROM, DEFAULT_THRESHOLD, PriceBands,
};
use drill_core::ExerciseId;
use rust_decimal::Decimal;

#[derive(Parser)]
#[command(name = "drill")]
#[command(about = "Query drills over a small customers, orders and products dataset.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Load the dataset from a JSON file instead of the built-in one
    #[arg(long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Order-sum threshold for the restriction exercises
    #[arg(long, global = true, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: Decimal,

    /// Products below this price are cheap
    #[arg(long, global = true, default_value_t = DEFAULT_CHEAP_BELOW)]
    pub cheap_below: Decimal,

    /// Products from this price upwards are expensive
    #[arg(long, global = true, default_value_t = DEFAULT_EXPENSIVE_FROM)]
    pub expensive_from: Decimal,

    /// Less output; repeat to print result lines only
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Skip the start-up banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the available exercises
    #[command(alias = "l")]
    List,
    /// Run exercises by slug or number, or all of them when none are given
    #[command(alias = "r")]
    Run { exercises: Vec<ExerciseId> },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            quiet: self.quiet,
            no_banner: self.no_banner,
            threshold: self.threshold,
            price_bands: PriceBands {
                cheap_below: self.cheap_below,
                expensive_from: self.expensive_from,
            },
            data: self.data.clone(),
        }
    }
}
