//! docstitch: Reconstruct paragraph blocks and tables from page geometry.
//!
//! This is the public API facade crate for docstitch-rs. It re-exports the
//! data types and algorithms from docstitch-core and adds the document-access
//! seam ([`PageSource`]) and the end-to-end [`StructurePipeline`].
//!
//! # Architecture
//!
//! - **docstitch-core**: Source-independent data types and algorithms
//! - **docstitch** (this crate): Document-access trait, error policy, and
//!   the pipeline that ties the stages together
//!
//! # Example
//!
//! ```ignore
//! let pipeline = StructurePipeline::new();
//! let structure = pipeline.process(&source)?;
//! for block in &structure.blocks {
//!     println!("page {} block {}: {}", block.page, block.block_id, block.text);
//! }
//! ```

pub mod error;
pub mod pipeline;
pub mod source;

pub use docstitch_core;

pub use docstitch_core::{
    CELL_DELIMITER, CollapsedRow, ContentBlock, ContentLine, DrawingPrimitive, GeometryError,
    Orientation, PageContent, PageGeometry, PrimitiveKind, Rect, Ruling, SpanData, StructSettings,
    StructWarning, TableRegion, TextBlock, TextSpan, WarningCode,
};

pub use error::StructError;
pub use pipeline::{DocumentStructure, StructurePipeline};
pub use source::PageSource;
