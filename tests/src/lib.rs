//! Cross-crate tests for `drill`.

#[cfg(test)]
mod properties;
#[cfg(test)]
mod queries;
