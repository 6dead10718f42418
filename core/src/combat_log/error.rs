//! Error types for loading report dumps from disk

use std::path::PathBuf;
use thiserror::Error;

/// Errors while reading saved event or actor lists
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
