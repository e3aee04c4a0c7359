//! Grouping collapsed rows into paragraph-level text blocks.
//!
//! A sequential scan over each page's rows carries a small state struct
//! and decides, row by row, whether the row continues the current block or
//! starts a new one. The decision uses vertical position and the font-flow
//! continuity signal between the end of one row and the start of the next.

use crate::geometry::Rect;
use crate::row::CollapsedRow;
use crate::settings::StructSettings;

/// A maximal run of contiguous rows judged to belong to one paragraph or
/// logical unit. Terminal output of the core pipeline.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextBlock {
    /// Page index (0-based).
    pub page: usize,
    /// Block ordinal within the page, starting at 1.
    pub block_id: usize,
    /// Min/max envelope of the member rows.
    pub bbox: Rect,
    /// Newline-joined member row texts in row order.
    pub text: String,
}

/// Carried state of the block-segmentation scan.
struct ScanState {
    block_id: usize,
    prev_font_flow_end: String,
    prev_top: f64,
}

/// Group rows into paragraph blocks.
///
/// Rows are consumed in encounter order; pages are segmented independently
/// and `block_id` restarts at 1 on each page. For each row after a page's
/// first, a new block starts when:
/// - the row's top moved backward past the previous row's top (column
///   change or layout restart), or
/// - the leading font differs from the previous row's trailing font and
///   the vertical gap exceeds the row's height plus the continuation
///   slack, or
/// - the fonts match but the gap exceeds that same threshold.
///
/// Otherwise the row continues the current block.
pub fn segment_blocks(rows: &[CollapsedRow], settings: &StructSettings) -> Vec<TextBlock> {
    // Partition by page, preserving encounter order within each page.
    let mut pages: Vec<(usize, Vec<&CollapsedRow>)> = Vec::new();
    for row in rows {
        match pages.iter_mut().find(|(page, _)| *page == row.page) {
            Some((_, members)) => members.push(row),
            None => pages.push((row.page, vec![row])),
        }
    }

    let mut blocks = Vec::new();
    for (page, rows) in pages {
        segment_page(page, &rows, settings, &mut blocks);
    }
    blocks
}

fn segment_page(
    page: usize,
    rows: &[&CollapsedRow],
    settings: &StructSettings,
    blocks: &mut Vec<TextBlock>,
) {
    let mut state: Option<ScanState> = None;
    // (block_id, member rows) in block order
    let mut grouped: Vec<(usize, Vec<&CollapsedRow>)> = Vec::new();

    for row in rows {
        let block_id = match state {
            None => 1,
            Some(ref state) => {
                if starts_new_block(row, state, settings) {
                    state.block_id + 1
                } else {
                    state.block_id
                }
            }
        };

        match grouped.last_mut() {
            Some((id, members)) if *id == block_id => members.push(row),
            _ => grouped.push((block_id, vec![row])),
        }

        state = Some(ScanState {
            block_id,
            prev_font_flow_end: row.font_flow_end.clone(),
            prev_top: row.bbox.y0,
        });
    }

    for (block_id, members) in grouped {
        let mut bbox = members[0].bbox;
        for row in &members[1..] {
            bbox = bbox.union(&row.bbox);
        }
        let text = members
            .iter()
            .map(|r| r.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        blocks.push(TextBlock {
            page,
            block_id,
            bbox,
            text,
        });
    }
}

/// The transition rule of the segmentation state machine.
fn starts_new_block(row: &CollapsedRow, state: &ScanState, settings: &StructSettings) -> bool {
    let threshold = row.bbox.height() + settings.block_continuation_slack;
    let gap = (row.bbox.y0 - state.prev_top).abs();

    if row.bbox.y0 < state.prev_top {
        // Vertical position moved backward: new column or restart
        true
    } else if row.font_flow_begin != state.prev_font_flow_end {
        // Font changed; only a close continuation keeps the block
        gap > threshold
    } else {
        // Same font; split only on an oversized gap
        gap > threshold
    }
}
