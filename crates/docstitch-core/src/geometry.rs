//! Axis-aligned rectangle geometry with top-left origin.

use crate::error::GeometryError;

/// Axis-aligned rectangle with top-left origin coordinate system.
///
/// Coordinates follow the page convention used throughout docstitch:
/// - `x0`: left edge
/// - `y0`: top edge (distance from top of page)
/// - `x1`: right edge
/// - `y1`: bottom edge; for text spans this is the baseline coordinate
///
/// Invariant: `x1 >= x0`, `y1 >= y0`, all coordinates finite. Enforced by
/// [`Rect::new`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Rect {
    /// Construct a rectangle, validating the coordinate invariant.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonFinite`] if any coordinate is NaN or
    /// infinite, and [`GeometryError::Inverted`] if `x1 < x0` or `y1 < y0`.
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Result<Self, GeometryError> {
        let coords = [x0, y0, x1, y1];
        if !coords.iter().all(|c| c.is_finite()) {
            return Err(GeometryError::NonFinite { coords });
        }
        if x1 < x0 || y1 < y0 {
            return Err(GeometryError::Inverted { coords });
        }
        Ok(Self { x0, y0, x1, y1 })
    }

    /// Width of the rectangle.
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// Height of the rectangle.
    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    /// Compute the union of two rectangles.
    pub fn union(&self, other: &Rect) -> Rect {
        Rect {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }

    /// Whether `other` lies fully inside this rectangle (edges inclusive).
    pub fn contains(&self, other: &Rect) -> bool {
        other.x0 >= self.x0 && other.x1 <= self.x1 && other.y0 >= self.y0 && other.y1 <= self.y1
    }
}

/// Orientation of a ruling line segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Fixed x-coordinate, extent along y.
    Vertical,
    /// Fixed y-coordinate, extent along x.
    Horizontal,
}
