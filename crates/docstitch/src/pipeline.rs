//! Document-level reconstruction pipeline.
//!
//! Drives the core stages over a [`PageSource`]: collect geometry and
//! spans per page, detect table regions, merge table-interior spans into
//! per-column cells, collapse spans into baseline rows, and segment rows
//! into paragraph blocks. Stage failures never abort later stages; each
//! stage operates on whatever partial data the previous one produced.

use docstitch_core::{
    CollapsedRow, PageGeometry, StructSettings, StructWarning, TableRegion, TextBlock, TextSpan,
    WarningCode, collapse_rows, collect_geometry, collect_spans, detect_regions,
    merge_region_cells, segment_blocks,
};
use tracing::{debug, warn};

use crate::error::StructError;
use crate::source::PageSource;

/// Reconstructed structure of one document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentStructure {
    /// Paragraph blocks across all pages, in page and encounter order.
    pub blocks: Vec<TextBlock>,
    /// Detected table regions; side channel for debug-box rendering.
    pub regions: Vec<TableRegion>,
    /// Non-fatal issues collected across all stages.
    pub warnings: Vec<StructWarning>,
}

impl DocumentStructure {
    /// Whether at least one table region was detected in the document.
    pub fn has_table(&self) -> bool {
        !self.regions.is_empty()
    }

    /// Blocks belonging to one page, in encounter order.
    pub fn page_blocks(&self, page: usize) -> impl Iterator<Item = &TextBlock> {
        self.blocks.iter().filter(move |b| b.page == page)
    }
}

/// Per-page primitives gathered before the sequential stages run.
struct CollectedPage {
    page: usize,
    geometry: PageGeometry,
    spans: Vec<TextSpan>,
    warnings: Vec<StructWarning>,
}

/// Orchestrator for the reconstruction pipeline.
///
/// Holds the [`StructSettings`] and the error policy. In the default
/// lenient mode an unreadable page is skipped with a warning; in strict
/// mode it aborts the run.
#[derive(Debug, Clone)]
pub struct StructurePipeline {
    settings: StructSettings,
    strict: bool,
}

impl Default for StructurePipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl StructurePipeline {
    /// Create a pipeline with default settings.
    pub fn new() -> Self {
        Self {
            settings: StructSettings::default(),
            strict: false,
        }
    }

    /// Create a pipeline with custom settings.
    pub fn with_settings(settings: StructSettings) -> Self {
        Self {
            settings,
            strict: false,
        }
    }

    /// Set the error policy: strict mode escalates page-access failures
    /// to errors instead of skip-and-continue warnings.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Get a reference to the settings.
    pub fn settings(&self) -> &StructSettings {
        &self.settings
    }

    /// Process a document page by page.
    ///
    /// # Errors
    ///
    /// In lenient mode (the default) this never fails: unreadable pages
    /// degrade to [`WarningCode::PageAccessFailed`] warnings. In strict
    /// mode the first page-access failure is returned.
    pub fn process<S: PageSource>(&self, source: &S) -> Result<DocumentStructure, StructError> {
        let count = source.page_count();
        let mut collected = Vec::with_capacity(count);
        for page in 0..count {
            collected.push(self.collect_page(source, page)?);
        }
        Ok(self.assemble(collected))
    }

    /// Process a document with per-page collection fanned out over a
    /// rayon thread pool.
    ///
    /// Collection (geometry and spans) is embarrassingly parallel across
    /// pages; detection, merging, and segmentation remain sequential
    /// within each page, so the output is identical to [`process`].
    ///
    /// # Errors
    ///
    /// Same policy as [`process`].
    ///
    /// [`process`]: StructurePipeline::process
    #[cfg(feature = "parallel")]
    pub fn process_parallel<S>(&self, source: &S) -> Result<DocumentStructure, StructError>
    where
        S: PageSource + Sync,
    {
        use rayon::prelude::*;

        let count = source.page_count();
        let collected: Result<Vec<CollectedPage>, StructError> = (0..count)
            .into_par_iter()
            .map(|page| self.collect_page(source, page))
            .collect();
        Ok(self.assemble(collected?))
    }

    /// Collect one page, applying the error policy.
    fn collect_page<S: PageSource>(
        &self,
        source: &S,
        page: usize,
    ) -> Result<CollectedPage, StructError> {
        match self.read_page(source, page) {
            Ok(collected) => Ok(collected),
            Err(err) => {
                if self.strict {
                    return Err(err);
                }
                warn!(page, error = %err, "skipping unreadable page");
                Ok(CollectedPage {
                    page,
                    geometry: PageGeometry::default(),
                    spans: Vec::new(),
                    warnings: vec![StructWarning::on_page(
                        WarningCode::PageAccessFailed,
                        err.to_string(),
                        page,
                    )],
                })
            }
        }
    }

    fn read_page<S: PageSource>(
        &self,
        source: &S,
        page: usize,
    ) -> Result<CollectedPage, StructError> {
        let drawings = source.drawings(page).map_err(Into::into)?;
        let content = source.content(page).map_err(Into::into)?;

        let geometry = collect_geometry(page, &drawings, &self.settings);
        let spans = collect_spans(page, &content);
        debug!(
            page,
            rects = geometry.rects.len(),
            spans = spans.len(),
            "collected page primitives"
        );

        Ok(CollectedPage {
            page,
            geometry,
            spans,
            warnings: Vec::new(),
        })
    }

    /// Run the sequential stages over the collected pages, in page order.
    fn assemble(&self, pages: Vec<CollectedPage>) -> DocumentStructure {
        let mut all_regions: Vec<TableRegion> = Vec::new();
        let mut all_rows: Vec<CollapsedRow> = Vec::new();
        let mut warnings: Vec<StructWarning> = Vec::new();

        for mut page in pages {
            warnings.append(&mut page.warnings);
            warnings.append(&mut page.geometry.warnings);

            let regions = detect_regions(page.page, &page.geometry.rects, &self.settings);
            if !regions.is_empty() {
                debug!(
                    page = page.page,
                    regions = regions.len(),
                    "detected table regions"
                );
                let mut merge_warnings = merge_region_cells(
                    &mut page.spans,
                    &regions,
                    &page.geometry.vertical_rulings,
                    &self.settings,
                );
                warnings.append(&mut merge_warnings);
            }

            all_rows.extend(collapse_rows(&page.spans));
            all_regions.extend(regions);
        }

        let blocks = segment_blocks(&all_rows, &self.settings);
        debug!(
            blocks = blocks.len(),
            regions = all_regions.len(),
            "document structure assembled"
        );

        DocumentStructure {
            blocks,
            regions: all_regions,
            warnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docstitch_core::{
        ContentBlock, ContentLine, DrawingPrimitive, PageContent, Rect, SpanData,
    };

    struct MockSource {
        pages: Vec<(Vec<DrawingPrimitive>, PageContent)>,
        fail_page: Option<usize>,
    }

    impl MockSource {
        fn new(pages: Vec<(Vec<DrawingPrimitive>, PageContent)>) -> Self {
            Self {
                pages,
                fail_page: None,
            }
        }
    }

    impl PageSource for MockSource {
        type Error = StructError;

        fn page_count(&self) -> usize {
            self.pages.len()
        }

        fn drawings(&self, page: usize) -> Result<Vec<DrawingPrimitive>, Self::Error> {
            if self.fail_page == Some(page) {
                return Err(StructError::source("corrupt drawing stream"));
            }
            Ok(self.pages[page].0.clone())
        }

        fn content(&self, page: usize) -> Result<PageContent, Self::Error> {
            Ok(self.pages[page].1.clone())
        }
    }

    fn span(text: &str, x0: f64, x1: f64, y0: f64, y1: f64) -> SpanData {
        SpanData {
            bbox: Rect::new(x0, y0, x1, y1).unwrap(),
            text: text.to_string(),
            font: "Helvetica".to_string(),
            size: 10.0,
            flags: 0,
        }
    }

    fn content_of(spans: Vec<SpanData>) -> PageContent {
        PageContent {
            blocks: vec![ContentBlock {
                lines: vec![ContentLine { spans }],
            }],
        }
    }

    #[test]
    fn test_process_empty_document() {
        let source = MockSource::new(Vec::new());
        let structure = StructurePipeline::new().process(&source).unwrap();
        assert!(structure.blocks.is_empty());
        assert!(structure.regions.is_empty());
        assert!(!structure.has_table());
        assert!(structure.warnings.is_empty());
    }

    #[test]
    fn test_process_page_without_drawings_has_no_table() {
        let source = MockSource::new(vec![(
            Vec::new(),
            content_of(vec![span("plain text", 10.0, 80.0, 90.0, 100.0)]),
        )]);
        let structure = StructurePipeline::new().process(&source).unwrap();
        assert!(!structure.has_table());
        assert_eq!(structure.blocks.len(), 1);
        assert_eq!(structure.blocks[0].text, "plain text");
    }

    #[test]
    fn test_process_lenient_skips_unreadable_page() {
        let mut source = MockSource::new(vec![
            (Vec::new(), content_of(vec![span("ok", 10.0, 30.0, 90.0, 100.0)])),
            (Vec::new(), content_of(vec![span("never read", 10.0, 60.0, 90.0, 100.0)])),
        ]);
        source.fail_page = Some(1);

        let structure = StructurePipeline::new().process(&source).unwrap();
        assert_eq!(structure.blocks.len(), 1);
        assert_eq!(structure.warnings.len(), 1);
        assert_eq!(structure.warnings[0].code, WarningCode::PageAccessFailed);
        assert_eq!(structure.warnings[0].page, Some(1));
    }

    #[test]
    fn test_process_strict_fails_on_unreadable_page() {
        let mut source = MockSource::new(vec![(
            Vec::new(),
            content_of(vec![span("ok", 10.0, 30.0, 90.0, 100.0)]),
        )]);
        source.fail_page = Some(0);

        let result = StructurePipeline::new().strict(true).process(&source);
        assert!(matches!(result, Err(StructError::Source(_))));
    }

    #[test]
    fn test_process_detects_table_and_merges_cells() {
        // Three table cells on one bottom edge, with one span per column
        let drawings = vec![
            DrawingPrimitive::rect(10.0, 30.0, 100.0, 50.0),
            DrawingPrimitive::rect(100.0, 30.0, 200.0, 50.0),
            DrawingPrimitive::rect(200.0, 30.0, 300.0, 50.0),
        ];
        let content = content_of(vec![
            span("one", 20.0, 60.0, 35.0, 45.0),
            span("two", 110.0, 150.0, 35.0, 45.0),
            span("three", 210.0, 250.0, 35.0, 45.0),
        ]);
        let source = MockSource::new(vec![(drawings, content)]);

        let structure = StructurePipeline::new().process(&source).unwrap();
        assert!(structure.has_table());
        assert_eq!(structure.regions.len(), 1);
        assert_eq!(structure.blocks.len(), 1);
        assert_eq!(structure.blocks[0].text, "one|two|three");
    }

    #[test]
    fn test_process_malformed_primitive_warns_and_continues() {
        let drawings = vec![DrawingPrimitive {
            kind: docstitch_core::PrimitiveKind::Rect,
            coords: [f64::NAN, 0.0, 100.0, 50.0],
        }];
        let content = content_of(vec![span("survives", 10.0, 60.0, 90.0, 100.0)]);
        let source = MockSource::new(vec![(drawings, content)]);

        let structure = StructurePipeline::new().process(&source).unwrap();
        assert_eq!(structure.blocks.len(), 1);
        assert_eq!(structure.warnings.len(), 1);
        assert_eq!(structure.warnings[0].code, WarningCode::MalformedGeometry);
    }

    #[test]
    fn test_page_blocks_filters_by_page() {
        let source = MockSource::new(vec![
            (Vec::new(), content_of(vec![span("p0", 10.0, 30.0, 90.0, 100.0)])),
            (Vec::new(), content_of(vec![span("p1", 10.0, 30.0, 90.0, 100.0)])),
        ]);
        let structure = StructurePipeline::new().process(&source).unwrap();
        let page1: Vec<&TextBlock> = structure.page_blocks(1).collect();
        assert_eq!(page1.len(), 1);
        assert_eq!(page1[0].text, "p1");
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_process_parallel_matches_sequential() {
        let drawings = vec![
            DrawingPrimitive::rect(10.0, 30.0, 100.0, 50.0),
            DrawingPrimitive::rect(100.0, 30.0, 200.0, 50.0),
            DrawingPrimitive::rect(200.0, 30.0, 300.0, 50.0),
        ];
        let content = content_of(vec![
            span("one", 20.0, 60.0, 35.0, 45.0),
            span("two", 110.0, 150.0, 35.0, 45.0),
        ]);
        let source = MockSource::new(vec![
            (drawings, content),
            (Vec::new(), content_of(vec![span("plain", 10.0, 50.0, 90.0, 100.0)])),
        ]);

        let pipeline = StructurePipeline::new();
        let sequential = pipeline.process(&source).unwrap();
        let parallel = pipeline.process_parallel(&source).unwrap();
        assert_eq!(sequential, parallel);
    }
}
