//! Error types produced while loading the signature catalog.
//!
//! Every variant is fatal at startup: the service refuses to serve an
//! empty or partially parsed catalog.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("signature dataset not readable at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("signature dataset is malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("signature dataset is empty")]
    Empty,

    #[error("signature #{index} has empty text")]
    EmptyText { index: usize },

    #[error("unknown tier `{0}`")]
    UnknownTier(String),
}
