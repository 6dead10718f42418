//! Storage for generated import strings.
//!
//! Each converted fight is written to `mdt_import_{report}_fight_{fight}.txt`
//! in the configured output directory (the working directory by default).

mod error;
mod writer;

pub use error::ExportError;
pub use writer::{export_filename, write_export, write_payload};

use std::path::PathBuf;

/// Resolve the configured output directory. Empty means the working directory.
pub fn output_dir(configured: &str) -> PathBuf {
    if configured.trim().is_empty() {
        PathBuf::from(".")
    } else {
        PathBuf::from(configured)
    }
}
