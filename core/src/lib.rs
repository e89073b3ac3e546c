//! Query exercises over the static [`Dataset`](drill_common::Dataset).
//!
//! Every function in this crate is pure: it borrows the dataset, derives a view
//! and returns plain values. Rendering is the caller's concern.
//!
//! * [`restriction`]: filtering.
//! * [`projection`]: reshaping records, implicit joins.
//! * [`ordering`]: composite multi-key ordering.
//! * [`grouping`]: one-pass group-by and the nested grouping exercises.
//! * [`aggregation`]: sums and averages.
//! * [`catalog`]: the list of exercises the CLI can run.

pub mod aggregation;
pub mod catalog;
pub mod grouping;
pub mod ordering;
pub mod projection;
pub mod restriction;

#[cfg(test)]
pub(crate) mod fixtures;

pub use catalog::{Category, Exercise, ExerciseId};
pub use grouping::{Group, group_by};
