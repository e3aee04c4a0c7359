//! Configuration for the structure reconstruction pipeline.

/// Tunables for geometry collection, table detection, cell merging,
/// and block segmentation.
///
/// The defaults reproduce the behavior the heuristics were calibrated
/// against; all lengths are in page units (PDF points for PDF sources).
#[derive(Debug, Clone, PartialEq)]
pub struct StructSettings {
    /// Minimum width or height for a drawn rectangle to be treated as table
    /// structure rather than vector-graphic decoration (default: 2.0).
    /// A rectangle is kept when *either* dimension exceeds this.
    pub min_rect_side: f64,
    /// Minimum height for a rectangle to qualify as a table-row cell during
    /// detection (default: 2.0).
    pub min_row_height: f64,
    /// Minimum number of aligned rectangles sharing a bottom edge for the
    /// cluster to become a table region (default: 3).
    pub min_cells: usize,
    /// Tolerance for collapsing near-duplicate vertical rulings into a
    /// single column boundary (default: 2.0). Double-drawn borders typically
    /// sit within this distance of each other.
    pub ruling_snap_tolerance: f64,
    /// Extra slack added to a row's height when judging whether the next
    /// row continues the same paragraph block (default: 3.0).
    pub block_continuation_slack: f64,
    /// Tolerance for the shared-bottom-edge test in table detection
    /// (default: 0.0 = exact floating-point equality).
    ///
    /// Exact equality is the historical behavior: rectangles drawn from the
    /// same ruling carry bit-identical coordinates, and independent shapes
    /// rarely collide. Set a positive value to switch the comparison to
    /// `|a - b| <= tolerance` for sources that re-emit coordinates with
    /// rounding drift.
    pub row_edge_tolerance: f64,
}

impl Default for StructSettings {
    fn default() -> Self {
        Self {
            min_rect_side: 2.0,
            min_row_height: 2.0,
            min_cells: 3,
            ruling_snap_tolerance: 2.0,
            block_continuation_slack: 3.0,
            row_edge_tolerance: 0.0,
        }
    }
}

impl StructSettings {
    /// Whether two bottom-edge coordinates count as the same table row.
    ///
    /// With `row_edge_tolerance == 0.0` this is exact equality.
    pub fn row_edges_match(&self, a: f64, b: f64) -> bool {
        if self.row_edge_tolerance > 0.0 {
            (a - b).abs() <= self.row_edge_tolerance
        } else {
            a == b
        }
    }
}
