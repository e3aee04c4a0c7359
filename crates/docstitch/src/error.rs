//! Error types for the document-access and pipeline layers.
//!
//! Uses [`thiserror`] for ergonomic error derivation. Source-specific
//! errors convert into [`StructError`] for unified handling; in the default
//! lenient mode the pipeline downgrades them to per-page warnings.

use docstitch_core::GeometryError;
use thiserror::Error;

/// Error type for document-source and pipeline operations.
#[derive(Debug, Error)]
pub enum StructError {
    /// Error reported by the document source for a page.
    #[error("source error: {0}")]
    Source(String),

    /// Error reading document data.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A core geometry error.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

impl StructError {
    /// Wrap an arbitrary source error.
    pub fn source(err: impl std::fmt::Display) -> Self {
        StructError::Source(err.to_string())
    }
}
