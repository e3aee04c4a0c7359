//! Document-access trait.
//!
//! Defines the [`PageSource`] trait that abstracts the document-access
//! layer: opening and decoding documents, walking their drawing command
//! lists, and extracting text-span dictionaries are all behind this seam.
//! The reconstruction pipeline consumes only what the trait exposes.

use docstitch_core::{DrawingPrimitive, PageContent};

use crate::error::StructError;

/// Trait abstracting per-page access to an already-opened document.
///
/// A source exposes, for each page, the list of drawing primitives (shape
/// kind plus four coordinates) and the nested text-content structure
/// (blocks → lines → spans with bbox, text, font, size, and style flags).
///
/// # Associated Types
///
/// - `Error`: Source-specific error type, convertible to [`StructError`].
///
/// # Usage
///
/// ```ignore
/// let pipeline = StructurePipeline::new();
/// let structure = pipeline.process(&my_source)?;
/// ```
pub trait PageSource {
    /// Source-specific error type, convertible to [`StructError`].
    type Error: std::error::Error + Into<StructError>;

    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Drawing primitives of a page, in drawing order.
    ///
    /// # Errors
    ///
    /// Returns an error if the page's drawing commands cannot be read.
    fn drawings(&self, page: usize) -> Result<Vec<DrawingPrimitive>, Self::Error>;

    /// Nested text content of a page.
    ///
    /// # Errors
    ///
    /// Returns an error if the page's text structure cannot be read.
    fn content(&self, page: usize) -> Result<PageContent, Self::Error>;
}
