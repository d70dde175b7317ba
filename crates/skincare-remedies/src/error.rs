//! Catalog loading errors.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Unsupported catalog version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("Duplicate concern: {0}")]
    DuplicateConcern(String),

    #[error("Invalid concern key {0:?}: keys must be non-empty, trimmed and lowercase")]
    InvalidKey(String),

    #[error("Remedy {index} for '{concern}' has an empty '{field}' field")]
    EmptyField {
        concern: String,
        index: usize,
        field: &'static str,
    },
}

impl CatalogError {
    /// Whether the catalog source itself could not be read (as opposed to
    /// being read but rejected).
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}
