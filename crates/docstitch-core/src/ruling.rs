//! Ruling line segments derived from rectangle edges.
//!
//! Rulings feed two consumers: the table detector works from whole
//! rectangles, while the cell merger slices table interiors along the
//! vertical rulings recorded here.

use crate::geometry::{Orientation, Rect};

/// A ruling: one edge of a drawn rectangle, recorded as a line segment.
///
/// `position` is the fixed coordinate (x for vertical rulings, y for
/// horizontal ones); `start..end` is the extent along the perpendicular
/// axis.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ruling {
    /// Page index (0-based).
    pub page: usize,
    /// Fixed edge coordinate.
    pub position: f64,
    /// Start of the perpendicular extent.
    pub start: f64,
    /// End of the perpendicular extent.
    pub end: f64,
    /// Whether the fixed coordinate is an x (vertical) or y (horizontal).
    pub orientation: Orientation,
}

/// Derive the four edge rulings of a rectangle: left and right verticals
/// spanning `y0..y1`, top and bottom horizontals spanning `x0..x1`.
pub fn rulings_from_rect(page: usize, rect: &Rect) -> [Ruling; 4] {
    [
        Ruling {
            page,
            position: rect.x0,
            start: rect.y0,
            end: rect.y1,
            orientation: Orientation::Vertical,
        },
        Ruling {
            page,
            position: rect.x1,
            start: rect.y0,
            end: rect.y1,
            orientation: Orientation::Vertical,
        },
        Ruling {
            page,
            position: rect.y0,
            start: rect.x0,
            end: rect.x1,
            orientation: Orientation::Horizontal,
        },
        Ruling {
            page,
            position: rect.y1,
            start: rect.x0,
            end: rect.x1,
            orientation: Orientation::Horizontal,
        },
    ]
}

/// Collapse near-duplicate ruling positions into single boundaries.
///
/// Sorts ascending, keeps the first position, and keeps each subsequent one
/// only if it differs from the last *kept* position by more than
/// `tolerance`. Double-drawn borders (a filled rect over a stroked one)
/// produce pairs of rulings within a couple of units of each other; this
/// reduces each pair to one column boundary.
pub fn dedupe_positions(mut positions: Vec<f64>, tolerance: f64) -> Vec<f64> {
    if positions.is_empty() {
        return positions;
    }
    positions.sort_by(|a, b| a.partial_cmp(b).unwrap());

    let mut kept = Vec::with_capacity(positions.len());
    kept.push(positions[0]);
    for &pos in &positions[1..] {
        let last = *kept.last().unwrap();
        if (pos - last).abs() > tolerance {
            kept.push(pos);
        }
    }
    kept
}
