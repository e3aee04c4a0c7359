//! Error and warning types for docstitch.
//!
//! Provides [`GeometryError`] for invalid geometric construction and
//! [`StructWarning`] for non-fatal issues recorded during a
//! skip-and-continue pass. Nothing in the core pipeline is fatal to the
//! enclosing document run; stages operate on whatever partial data the
//! previous stage produced.

use std::fmt;

/// Error constructing a geometric value from raw coordinates.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GeometryError {
    /// One or more coordinates are NaN or infinite.
    NonFinite {
        /// The offending coordinate tuple as received.
        coords: [f64; 4],
    },
    /// The rectangle is inverted: `x1 < x0` or `y1 < y0`.
    Inverted {
        /// The offending coordinate tuple as received.
        coords: [f64; 4],
    },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::NonFinite { coords } => {
                write!(f, "non-finite coordinates: {coords:?}")
            }
            GeometryError::Inverted { coords } => {
                write!(f, "inverted rectangle (x1 < x0 or y1 < y0): {coords:?}")
            }
        }
    }
}

impl std::error::Error for GeometryError {}

/// Machine-readable warning code for categorizing reconstruction issues.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", content = "detail")
)]
pub enum WarningCode {
    /// A drawing primitive carried malformed geometry and was skipped.
    MalformedGeometry,
    /// A table region produced a degenerate merge (no rulings or no columns).
    DegenerateRegion,
    /// A page could not be read from the source and was skipped entirely.
    PageAccessFailed,
    /// Any other warning not covered by specific variants.
    Other(String),
}

impl WarningCode {
    /// Returns the string tag for this warning code.
    pub fn as_str(&self) -> &str {
        match self {
            WarningCode::MalformedGeometry => "MALFORMED_GEOMETRY",
            WarningCode::DegenerateRegion => "DEGENERATE_REGION",
            WarningCode::PageAccessFailed => "PAGE_ACCESS_FAILED",
            WarningCode::Other(_) => "OTHER",
        }
    }
}

impl fmt::Display for WarningCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A non-fatal issue recorded while reconstructing document structure.
///
/// Warnings allow best-effort continuation: a malformed primitive or an
/// unreadable page is skipped and noted here rather than aborting the run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StructWarning {
    /// Machine-readable warning code.
    pub code: WarningCode,
    /// Human-readable description of the warning.
    pub description: String,
    /// Page index where the warning occurred (0-indexed), if applicable.
    pub page: Option<usize>,
}

impl StructWarning {
    /// Create a warning with just a description.
    ///
    /// Uses [`WarningCode::Other`] as the default code.
    pub fn new(description: impl Into<String>) -> Self {
        let desc = description.into();
        Self {
            code: WarningCode::Other(desc.clone()),
            description: desc,
            page: None,
        }
    }

    /// Create a warning with a specific code and page context.
    pub fn on_page(code: WarningCode, description: impl Into<String>, page: usize) -> Self {
        Self {
            code,
            description: description.into(),
            page: Some(page),
        }
    }
}

impl fmt::Display for StructWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.description)?;
        if let Some(page) = self.page {
            write!(f, " (page {page})")?;
        }
        Ok(())
    }
}
