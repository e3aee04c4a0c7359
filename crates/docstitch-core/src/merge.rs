//! Rewriting table-interior spans into delimited per-column cells.
//!
//! For each detected region, the spans it contains are re-segmented along
//! the region's deduplicated vertical rulings and collapsed into a single
//! synthesized span whose text carries one `|`-delimited cell per column.
//! This is the one destructive, region-scoped mutation in the pipeline.

use crate::error::{StructWarning, WarningCode};
use crate::geometry::Orientation;
use crate::region::TableRegion;
use crate::ruling::{Ruling, dedupe_positions};
use crate::settings::StructSettings;
use crate::span::TextSpan;

/// Delimiter between column cells in a merged row.
pub const CELL_DELIMITER: &str = "|";

/// Rewrite spans inside each table region into merged per-column rows.
///
/// For each region: spans fully contained in the region bbox are gathered;
/// vertical rulings whose position and extent fall inside the region are
/// deduplicated into column boundaries; consecutive boundary pairs form
/// column intervals. Each column's contained span texts are space-joined,
/// the columns `|`-joined, and the earliest contained span is replaced in
/// place by the synthesized row (union bbox, merged text, the first span's
/// font/size/flags as an arbitrary representative). All other contained
/// spans are removed once every region has been processed.
///
/// A region with no contained spans is skipped. A region with spans but no
/// usable rulings degenerates to an empty merged text; that is recorded as
/// a warning, not corrected.
pub fn merge_region_cells(
    spans: &mut Vec<TextSpan>,
    regions: &[TableRegion],
    rulings: &[Ruling],
    settings: &StructSettings,
) -> Vec<StructWarning> {
    let mut warnings = Vec::new();
    let mut removed = vec![false; spans.len()];

    for region in regions {
        let contained: Vec<usize> = spans
            .iter()
            .enumerate()
            .filter(|(i, span)| {
                !removed[*i] && span.page == region.page && region.contains(&span.bbox)
            })
            .map(|(i, _)| i)
            .collect();

        if contained.is_empty() {
            continue;
        }

        let boundaries = column_boundaries(region, rulings, settings);
        if boundaries.len() < 2 {
            warnings.push(StructWarning::on_page(
                WarningCode::DegenerateRegion,
                format!(
                    "table region with {} usable vertical rulings yields no columns",
                    boundaries.len()
                ),
                region.page,
            ));
        }

        let mut columns: Vec<String> = Vec::new();
        for interval in boundaries.windows(2) {
            let (lo, hi) = (interval[0], interval[1]);
            let cell = contained
                .iter()
                .map(|&i| &spans[i])
                .filter(|span| span.bbox.x0 >= lo && span.bbox.x1 <= hi)
                .map(|span| span.text.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            columns.push(cell);
        }
        let merged_text = columns.join(CELL_DELIMITER);

        let mut bbox = spans[contained[0]].bbox;
        for &i in &contained[1..] {
            bbox = bbox.union(&spans[i].bbox);
        }

        let first = contained[0];
        spans[first] = TextSpan {
            page: region.page,
            bbox,
            text: merged_text,
            font: spans[first].font.clone(),
            size: spans[first].size,
            flags: spans[first].flags,
        };
        for &i in &contained[1..] {
            removed[i] = true;
        }
    }

    let mut keep = removed.iter().map(|r| !r);
    spans.retain(|_| keep.next().unwrap());

    warnings
}

/// Column boundaries of a region: the deduplicated positions of vertical
/// rulings whose fixed coordinate lies within the region's x-extent and
/// whose span lies within its y-extent.
fn column_boundaries(
    region: &TableRegion,
    rulings: &[Ruling],
    settings: &StructSettings,
) -> Vec<f64> {
    let positions: Vec<f64> = rulings
        .iter()
        .filter(|r| {
            r.page == region.page
                && r.orientation == Orientation::Vertical
                && r.position >= region.bbox.x0
                && r.position <= region.bbox.x1
                && r.start >= region.bbox.y0
                && r.end <= region.bbox.y1
        })
        .map(|r| r.position)
        .collect();

    dedupe_positions(positions, settings.ruling_snap_tolerance)
}
