//! Shared building blocks for `drill`.
//!
//! * [`model`]: the four read-only record kinds.
//! * [`dataset`]: loading and validating the in-memory dataset.
//! * [`config`]: runtime knobs assembled from the command line.
//! * Status macros ([`info!`], [`success!`], [`warn!`]) shared by every crate.

pub mod config;
pub mod dataset;
pub mod error;
pub mod macros;
pub mod model;

#[doc(hidden)]
pub use tracing as __tracing;

pub use dataset::Dataset;
pub use error::DatasetError;
pub use model::{Customer, Order, Product, Supplier};
