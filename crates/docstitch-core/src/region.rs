//! Table region detection from drawn rectangle geometry.
//!
//! Rectangles that line up left-to-right on a shared bottom edge are cell
//! candidates; a cluster with enough of them becomes a table region. The
//! scan is sequential over a page's rectangles in collection order.

use crate::geometry::Rect;
use crate::settings::StructSettings;

/// Bounding box of a qualifying cell cluster, treated as a zone for
/// column reconstruction. Owns no spans, only the spatial predicate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableRegion {
    /// Page index (0-based).
    pub page: usize,
    /// Union of the member rectangles' coordinates.
    pub bbox: Rect,
}

impl TableRegion {
    /// Whether a bounding box lies fully inside this region.
    pub fn contains(&self, bbox: &Rect) -> bool {
        self.bbox.contains(bbox)
    }
}

/// Detect table regions on one page.
///
/// Consecutive rectangle pairs join a row-candidate run when their bottom
/// edges match (see [`StructSettings::row_edges_match`]), the second sits
/// strictly right of the first, and the first is taller than
/// `min_row_height`. A carried flag keeps the run alive through ordering
/// hiccups and retains the trailing rectangle of a run, which a pure
/// pairwise scan would drop. Retained candidates are then grouped by their
/// shared bottom edge; groups with at least `min_cells` members become
/// regions whose bbox is the member union.
///
/// A page with no rectangles yields no regions.
pub fn detect_regions(
    page: usize,
    rects: &[Rect],
    settings: &StructSettings,
) -> Vec<TableRegion> {
    if rects.is_empty() {
        return Vec::new();
    }

    let mut row_boxes: Vec<Rect> = Vec::new();
    let mut run_active = false;

    for pair in rects.windows(2) {
        let (curr, next) = (&pair[0], &pair[1]);
        let same_row = settings.row_edges_match(curr.y1, next.y1);

        if same_row && next.x0 > curr.x0 && curr.height() > settings.min_row_height {
            row_boxes.push(*curr);
            run_active = true;
        } else if run_active && same_row && curr.height() > settings.min_row_height {
            row_boxes.push(*curr);
        } else {
            // Run ends here: its trailing rectangle matched only as the
            // second element of the previous pair, so retain it now.
            if run_active {
                row_boxes.push(*curr);
            }
            run_active = false;
        }
    }

    if run_active {
        row_boxes.push(rects[rects.len() - 1]);
    }

    // Group candidates by shared bottom edge, preserving encounter order.
    let mut groups: Vec<(f64, Vec<Rect>)> = Vec::new();
    for rect in row_boxes {
        match groups
            .iter_mut()
            .find(|(edge, _)| settings.row_edges_match(*edge, rect.y1))
        {
            Some((_, members)) => members.push(rect),
            None => groups.push((rect.y1, vec![rect])),
        }
    }

    groups
        .into_iter()
        .filter(|(_, members)| members.len() >= settings.min_cells)
        .map(|(_, members)| {
            let mut bbox = members[0];
            for rect in &members[1..] {
                bbox = bbox.union(rect);
            }
            TableRegion { page, bbox }
        })
        .collect()
}
