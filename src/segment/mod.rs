//! Document segmentation.
//!
//! The bookmark path extracts the outline and resolves it into ranges. When
//! the outline is missing, unreadable, or yields too few ranges, the
//! content scanner synthesizes ranges from page headers instead. Either way
//! the ranges are then classified against a [`Taxonomy`].

mod classify;
mod extract;
mod options;
mod resolve;
mod scan;

pub use classify::classify_legal_pieces;
pub use extract::{extract_outline, validate_outline};
pub use options::{ErrorMode, SegmentOptions};
pub use resolve::resolve_bookmark_ranges;
pub use scan::{detect_category, scan_content_ranges};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{ClassifiedPiece, PageRange};
use crate::source::DocumentSource;
use crate::taxonomy::Taxonomy;

/// Which path produced the ranges of a [`Segmentation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Ranges come from the document outline
    Bookmarks,
    /// Ranges come from page header text
    ContentScan,
    /// Neither path found any structure
    None,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Strategy::Bookmarks => "bookmarks",
            Strategy::ContentScan => "content scan",
            Strategy::None => "none",
        };
        f.write_str(name)
    }
}

/// Ranges and classified pieces found in one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segmentation {
    /// Total pages in the document
    pub page_count: u32,

    /// Path that produced `ranges`
    pub strategy: Strategy,

    /// All ranges, in document order
    pub ranges: Vec<PageRange>,

    /// Classified subset of `ranges`
    pub pieces: Vec<ClassifiedPiece>,
}

impl Segmentation {
    /// Whether any structure was found.
    ///
    /// Callers should present `false` as an informational state that
    /// invites manual page selection, not as a failure.
    pub fn has_structure(&self) -> bool {
        !self.ranges.is_empty()
    }

    /// Pieces whose category is pre-selected.
    pub fn preselected(&self) -> impl Iterator<Item = &ClassifiedPiece> {
        self.pieces.iter().filter(|p| p.preselected)
    }

    /// Pieces of one category, in document order.
    pub fn pieces_in<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a ClassifiedPiece> {
        self.pieces.iter().filter(move |p| p.category == category)
    }
}

/// Runs the bookmark path with content-scan fallback, then classifies.
#[derive(Debug, Clone, Default)]
pub struct Segmenter {
    taxonomy: Taxonomy,
    options: SegmentOptions,
}

impl Segmenter {
    /// Create a segmenter with a taxonomy and default options.
    pub fn new(taxonomy: Taxonomy) -> Self {
        Self {
            taxonomy,
            options: SegmentOptions::default(),
        }
    }

    /// Set segmentation options.
    pub fn with_options(mut self, options: SegmentOptions) -> Self {
        self.options = options;
        self
    }

    /// The taxonomy used for detection and classification.
    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    /// The active options.
    pub fn options(&self) -> &SegmentOptions {
        &self.options
    }

    /// Resolve bookmark ranges, or `None` when the outline is unusable.
    ///
    /// Any outline failure other than a missing page count is downgraded
    /// to "no bookmarks".
    pub fn bookmark_ranges<S: DocumentSource + ?Sized>(
        &self,
        source: &S,
    ) -> Result<Option<Vec<PageRange>>> {
        let total_pages = source.page_count()?;

        let outline = match extract_outline(source) {
            Ok(outline) => outline,
            Err(e) if e.is_structure_unavailable() => {
                log::warn!("{}; falling back to content scan", e);
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        let ranges = resolve_bookmark_ranges(&outline, total_pages);
        if ranges.len() < self.options.min_bookmark_ranges {
            log::debug!(
                "Outline yields {} ranges (< {}); insufficient structure",
                ranges.len(),
                self.options.min_bookmark_ranges
            );
            return Ok(None);
        }

        Ok(Some(ranges))
    }

    /// Segment a document.
    pub fn segment<S: DocumentSource + ?Sized>(&self, source: &S) -> Result<Segmentation> {
        let page_count = source.page_count()?;

        let bookmarks = if self.options.force_content_scan {
            None
        } else {
            self.bookmark_ranges(source)?
        };

        let (strategy, ranges) = match bookmarks {
            Some(ranges) => (Strategy::Bookmarks, ranges),
            None => {
                let ranges = scan_content_ranges(source, &self.taxonomy, &self.options)?;
                if ranges.is_empty() {
                    log::info!("No structure found in {} pages", page_count);
                    (Strategy::None, ranges)
                } else {
                    (Strategy::ContentScan, ranges)
                }
            }
        };

        let pieces = classify_legal_pieces(&ranges, &self.taxonomy);
        log::debug!(
            "Segmented {} pages via {}: {} ranges, {} pieces",
            page_count,
            strategy,
            ranges.len(),
            pieces.len()
        );

        Ok(Segmentation {
            page_count,
            strategy,
            ranges,
            pieces,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MemorySource;

    #[test]
    fn test_bookmark_path() {
        let source = MemorySource::blank(10).with_outline([
            (1, "Capa", 1),
            (1, "Sentença", 2),
            (1, "Anexos", 5),
        ]);
        let result = Segmenter::default().segment(&source).unwrap();

        assert_eq!(result.strategy, Strategy::Bookmarks);
        assert_eq!(result.ranges.len(), 3);
        assert_eq!(result.pieces.len(), 1);
        assert_eq!(result.pieces[0].category, "Sentença");
    }

    #[test]
    fn test_sparse_outline_falls_back() {
        let source = MemorySource::new(["", "", "SENTENÇA\nVistos.", "", ""])
            .with_outline([(1, "Único marcador", 1)]);
        let result = Segmenter::default().segment(&source).unwrap();

        assert_eq!(result.strategy, Strategy::ContentScan);
        assert_eq!(result.ranges.len(), 1);
        assert_eq!(
            (result.ranges[0].start_page, result.ranges[0].end_page),
            (2, 4)
        );
        assert_eq!(result.preselected().count(), 1);
    }

    #[test]
    fn test_unreadable_outline_falls_back() {
        let source = MemorySource::new(["CERTIDÃO"]).with_unreadable_outline();
        let result = Segmenter::default().segment(&source).unwrap();
        assert_eq!(result.strategy, Strategy::ContentScan);
        assert_eq!(result.pieces_in("Certidão").count(), 1);
    }

    #[test]
    fn test_no_structure_is_not_an_error() {
        let source = MemorySource::new(["lorem", "ipsum"]);
        let result = Segmenter::default().segment(&source).unwrap();
        assert_eq!(result.strategy, Strategy::None);
        assert!(!result.has_structure());
        assert!(result.pieces.is_empty());
    }

    #[test]
    fn test_threshold_is_configurable() {
        let source = MemorySource::blank(4).with_outline([(1, "Sentença", 1)]);
        let segmenter = Segmenter::default()
            .with_options(SegmentOptions::new().with_min_bookmark_ranges(1));
        let result = segmenter.segment(&source).unwrap();
        assert_eq!(result.strategy, Strategy::Bookmarks);
        assert_eq!(result.ranges[0].end_page, 3);
    }

    #[test]
    fn test_force_content_scan_ignores_outline() {
        let source = MemorySource::new(["DESPACHO", "", ""]).with_outline([
            (1, "A", 1),
            (1, "B", 2),
            (1, "C", 3),
        ]);
        let segmenter =
            Segmenter::default().with_options(SegmentOptions::new().force_content_scan());
        let result = segmenter.segment(&source).unwrap();
        assert_eq!(result.strategy, Strategy::ContentScan);
        assert_eq!(result.pieces[0].category, "Despacho");
    }

    #[test]
    fn test_strategy_display() {
        assert_eq!(Strategy::ContentScan.to_string(), "content scan");
    }
}
