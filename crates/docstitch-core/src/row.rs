//! Collapsing co-baseline spans into logical rows.
//!
//! Spans sharing `(page, y1)` form one baseline row. Grouping preserves
//! encounter order of baselines; downstream stages depend on that order,
//! not on any sorted order.

use std::collections::HashMap;

use crate::geometry::Rect;
use crate::span::TextSpan;

/// A logical row: all spans on one page sharing a baseline, in
/// left-to-right order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CollapsedRow {
    /// Page index (0-based).
    pub page: usize,
    /// Min/max envelope of all member spans.
    pub bbox: Rect,
    /// Space-joined member texts in left-to-right order.
    pub text: String,
    /// Per-span font names in left-to-right order.
    pub fonts: Vec<String>,
    /// Per-span font sizes in left-to-right order.
    pub sizes: Vec<f64>,
    /// Per-span style flags in left-to-right order.
    pub flags: Vec<u32>,
    /// Font of the leftmost span; continuity signal for block segmentation.
    pub font_flow_begin: String,
    /// Font of the rightmost span.
    pub font_flow_end: String,
    /// Size of the leftmost span.
    pub size_flow_begin: f64,
    /// Size of the rightmost span.
    pub size_flow_end: f64,
}

/// Group spans by `(page, y1)` and collapse each group into a row.
///
/// Rows come out in the encounter order of their baselines, which for a
/// well-formed source is reading order. The baseline comparison is exact:
/// spans laid out on the same text line share a bit-identical `y1`.
pub fn collapse_rows(spans: &[TextSpan]) -> Vec<CollapsedRow> {
    let mut group_index: HashMap<(usize, u64), usize> = HashMap::new();
    let mut groups: Vec<Vec<&TextSpan>> = Vec::new();

    for span in spans {
        let key = (span.page, span.bbox.y1.to_bits());
        match group_index.get(&key) {
            Some(&idx) => groups[idx].push(span),
            None => {
                group_index.insert(key, groups.len());
                groups.push(vec![span]);
            }
        }
    }

    groups
        .into_iter()
        .map(|mut members| {
            members.sort_by(|a, b| a.bbox.x0.partial_cmp(&b.bbox.x0).unwrap());

            let mut bbox = members[0].bbox;
            for span in &members[1..] {
                bbox = bbox.union(&span.bbox);
            }

            let text = members
                .iter()
                .map(|s| s.text.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            let fonts: Vec<String> = members.iter().map(|s| s.font.clone()).collect();
            let sizes: Vec<f64> = members.iter().map(|s| s.size).collect();
            let flags: Vec<u32> = members.iter().map(|s| s.flags).collect();

            CollapsedRow {
                page: members[0].page,
                bbox,
                text,
                font_flow_begin: fonts[0].clone(),
                font_flow_end: fonts[fonts.len() - 1].clone(),
                size_flow_begin: sizes[0],
                size_flow_end: sizes[sizes.len() - 1],
                fonts,
                sizes,
                flags,
            }
        })
        .collect()
}
