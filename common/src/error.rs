use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading or validating a [`Dataset`](crate::Dataset).
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed dataset: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid dataset: {0}")]
    Invalid(String),
}
