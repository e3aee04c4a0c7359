//! Text spans and per-page span collection.
//!
//! The span collector flattens the source's nested block → line → span
//! structure into a flat list of positioned [`TextSpan`]s, normalizing the
//! text and dropping whitespace-only fragments. No merging happens here;
//! this stage is pure extraction.

use unicode_normalization::UnicodeNormalization;

use crate::geometry::Rect;

/// One positioned, uniformly-styled run of text on a page.
///
/// Immutable once produced, with a single exception: the cell merger
/// rewrites spans inside a detected table region in place.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextSpan {
    /// Page index (0-based).
    pub page: usize,
    /// Bounding box; `bbox.y1` is the baseline coordinate.
    pub bbox: Rect,
    /// Literal text content.
    pub text: String,
    /// Font name.
    pub font: String,
    /// Font size in page units.
    pub size: f64,
    /// Style-flag bits as reported by the source (bold, italic, ...).
    pub flags: u32,
}

/// Raw span data as handed over by the document source.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpanData {
    /// Bounding box of the span.
    pub bbox: Rect,
    /// Literal text content.
    pub text: String,
    /// Font name.
    pub font: String,
    /// Font size in page units.
    pub size: f64,
    /// Style-flag bits.
    pub flags: u32,
}

/// One line of text: a run of spans sharing a baseline in the source.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentLine {
    /// Spans of this line in source order.
    pub spans: Vec<SpanData>,
}

/// One text-bearing content block from the source.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentBlock {
    /// Lines of this block in source order.
    pub lines: Vec<ContentLine>,
}

/// The nested text structure of one page as provided by the source.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageContent {
    /// Content blocks in source order.
    pub blocks: Vec<ContentBlock>,
}

/// Flatten a page's nested text structure into sanitized [`TextSpan`]s.
///
/// Text is NFC-normalized. Spans that are empty or whitespace-only after
/// normalization are dropped.
pub fn collect_spans(page: usize, content: &PageContent) -> Vec<TextSpan> {
    let mut spans = Vec::new();

    for block in &content.blocks {
        for line in &block.lines {
            for span in &line.spans {
                let text: String = span.text.nfc().collect();
                if text.trim().is_empty() {
                    continue;
                }
                spans.push(TextSpan {
                    page,
                    bbox: span.bbox,
                    text,
                    font: span.font.clone(),
                    size: span.size,
                    flags: span.flags,
                });
            }
        }
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(text: &str, x0: f64, y1: f64) -> SpanData {
        SpanData {
            bbox: Rect::new(x0, y1 - 10.0, x0 + 20.0, y1).unwrap(),
            text: text.to_string(),
            font: "Helvetica".to_string(),
            size: 10.0,
            flags: 0,
        }
    }

    fn page_of(spans: Vec<SpanData>) -> PageContent {
        PageContent {
            blocks: vec![ContentBlock {
                lines: vec![ContentLine { spans }],
            }],
        }
    }

    #[test]
    fn test_collect_spans_empty_page() {
        let spans = collect_spans(0, &PageContent::default());
        assert!(spans.is_empty());
    }

    #[test]
    fn test_collect_spans_flattens_nested_structure() {
        let content = PageContent {
            blocks: vec![
                ContentBlock {
                    lines: vec![
                        ContentLine {
                            spans: vec![span("Alpha", 10.0, 50.0)],
                        },
                        ContentLine {
                            spans: vec![span("Beta", 10.0, 70.0)],
                        },
                    ],
                },
                ContentBlock {
                    lines: vec![ContentLine {
                        spans: vec![span("Gamma", 10.0, 90.0)],
                    }],
                },
            ],
        };
        let spans = collect_spans(1, &content);
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[0].text, "Alpha");
        assert_eq!(spans[1].text, "Beta");
        assert_eq!(spans[2].text, "Gamma");
        assert!(spans.iter().all(|s| s.page == 1));
    }

    #[test]
    fn test_collect_spans_drops_whitespace_only() {
        let content = page_of(vec![
            span("  ", 10.0, 50.0),
            span("kept", 40.0, 50.0),
            span("", 70.0, 50.0),
            span("\t\n", 100.0, 50.0),
        ]);
        let spans = collect_spans(0, &content);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "kept");
    }

    #[test]
    fn test_collect_spans_applies_nfc_normalization() {
        // "e" + combining acute accent composes to a single scalar
        let content = page_of(vec![span("e\u{0301}", 10.0, 50.0)]);
        let spans = collect_spans(0, &content);
        assert_eq!(spans[0].text, "\u{00e9}");
    }

    #[test]
    fn test_collect_spans_preserves_font_metadata() {
        let mut raw = span("Styled", 10.0, 50.0);
        raw.font = "Times-Bold".to_string();
        raw.size = 14.0;
        raw.flags = 0b10100;
        let spans = collect_spans(0, &page_of(vec![raw]));
        assert_eq!(spans[0].font, "Times-Bold");
        assert_eq!(spans[0].size, 14.0);
        assert_eq!(spans[0].flags, 0b10100);
    }

    #[test]
    fn test_collect_spans_keeps_interior_whitespace() {
        let content = page_of(vec![span(" a b ", 10.0, 50.0)]);
        let spans = collect_spans(0, &content);
        assert_eq!(spans[0].text, " a b ");
    }
}
