//! Drawing primitives and per-page geometry collection.
//!
//! The geometry collector scans a page's drawing primitives, keeps
//! structural rectangles, and records their edges as rulings. Only
//! axis-aligned rectangles are processed; other shapes are ignored.

use crate::error::{StructWarning, WarningCode};
use crate::geometry::Rect;
use crate::ruling::{Ruling, rulings_from_rect};
use crate::settings::StructSettings;

/// Kind tag of a drawing primitive as reported by the document source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PrimitiveKind {
    /// An axis-aligned rectangle.
    Rect,
    /// A straight line segment.
    Line,
    /// A Bezier curve segment.
    Curve,
    /// A quadrilateral or any other shape.
    Other,
}

/// One drawing primitive: a kind tag and four raw coordinates.
///
/// For rectangles the coordinates are `(x0, y0, x1, y1)`. Coordinates are
/// taken as-is from the source; validation happens during collection.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DrawingPrimitive {
    /// Shape kind tag.
    pub kind: PrimitiveKind,
    /// Raw coordinate tuple `(x0, y0, x1, y1)`.
    pub coords: [f64; 4],
}

impl DrawingPrimitive {
    /// Convenience constructor for a rectangle primitive.
    pub fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            kind: PrimitiveKind::Rect,
            coords: [x0, y0, x1, y1],
        }
    }
}

/// Geometry collected from one page: structural rectangles and the rulings
/// derived from every rectangle edge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageGeometry {
    /// Rectangles that passed the noise filter, in encounter order.
    pub rects: Vec<Rect>,
    /// Vertical rulings (left and right edge of each rectangle processed).
    pub vertical_rulings: Vec<Ruling>,
    /// Horizontal rulings (top and bottom edge of each rectangle processed).
    pub horizontal_rulings: Vec<Ruling>,
    /// Non-fatal issues encountered while collecting.
    pub warnings: Vec<StructWarning>,
}

/// Collect structural geometry from a page's drawing primitives.
///
/// Non-rectangle primitives are ignored. A rectangle enters
/// [`PageGeometry::rects`] only when its width or height exceeds
/// `min_rect_side`, filtering vector-graphic decoration from table borders.
/// Rulings are recorded for every valid rectangle regardless of that size
/// filter, since downstream ruling detection wants even thin rectangles'
/// edges. Malformed coordinates produce a warning and skip the primitive.
pub fn collect_geometry(
    page: usize,
    primitives: &[DrawingPrimitive],
    settings: &StructSettings,
) -> PageGeometry {
    let mut geometry = PageGeometry::default();

    for primitive in primitives {
        if primitive.kind != PrimitiveKind::Rect {
            continue;
        }
        let [x0, y0, x1, y1] = primitive.coords;
        let rect = match Rect::new(x0, y0, x1, y1) {
            Ok(rect) => rect,
            Err(err) => {
                geometry.warnings.push(StructWarning::on_page(
                    WarningCode::MalformedGeometry,
                    err.to_string(),
                    page,
                ));
                continue;
            }
        };

        if rect.width() > settings.min_rect_side || rect.height() > settings.min_rect_side {
            geometry.rects.push(rect);
        }

        let [left, right, top, bottom] = rulings_from_rect(page, &rect);
        geometry.vertical_rulings.push(left);
        geometry.vertical_rulings.push(right);
        geometry.horizontal_rulings.push(top);
        geometry.horizontal_rulings.push(bottom);
    }

    geometry
}
