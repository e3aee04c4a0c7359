//! docstitch-core: Source-independent data types and algorithms.
//!
//! This crate provides the foundational types (Rect, Ruling, TextSpan,
//! CollapsedRow, TableRegion, TextBlock) and the reconstruction algorithms
//! (geometry collection, table detection, span collection, row collapsing,
//! cell merging, block segmentation) used by docstitch. It performs no I/O;
//! the document-access layer lives in the `docstitch` facade crate.

pub mod block;
pub mod error;
pub mod geometry;
pub mod merge;
pub mod region;
pub mod row;
pub mod ruling;
pub mod settings;
pub mod shapes;
pub mod span;

pub use block::{TextBlock, segment_blocks};
pub use error::{GeometryError, StructWarning, WarningCode};
pub use geometry::{Orientation, Rect};
pub use merge::{CELL_DELIMITER, merge_region_cells};
pub use region::{TableRegion, detect_regions};
pub use row::{CollapsedRow, collapse_rows};
pub use ruling::{Ruling, dedupe_positions, rulings_from_rect};
pub use settings::StructSettings;
pub use shapes::{DrawingPrimitive, PageGeometry, PrimitiveKind, collect_geometry};
pub use span::{ContentBlock, ContentLine, PageContent, SpanData, TextSpan, collect_spans};
