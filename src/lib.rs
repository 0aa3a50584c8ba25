//! # pecas
//!
//! Bookmark-range resolution and legal-section classification for PDF
//! documents.
//!
//! A court record usually arrives as one large PDF. This library splits it
//! into labeled page ranges ("Petição Inicial", "Sentença", ...) that
//! extraction and splitting tools can consume:
//!
//! 1. the outline (bookmarks) is flattened and resolved into page ranges;
//! 2. when the outline is missing or too sparse, page headers are scanned
//!    for regex and keyword signals instead;
//! 3. every range is matched against a keyword [`Taxonomy`].
//!
//! ## Quick Start
//!
//! ```no_run
//! use pecas::{render, segment_file};
//!
//! fn main() -> pecas::Result<()> {
//!     let segmentation = segment_file("processo.pdf")?;
//!     println!("{}", render::to_text(&segmentation));
//!
//!     for piece in segmentation.preselected() {
//!         println!("{} -> pages {:?}", piece.category, piece.range.pages().collect::<Vec<_>>());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Custom sources
//!
//! Any PDF library can feed the engine by implementing
//! [`DocumentSource`]; [`MemorySource`] covers text that was extracted
//! elsewhere.

pub mod detect;
pub mod error;
pub mod model;
pub mod render;
pub mod segment;
pub mod source;
pub mod taxonomy;
pub mod text;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{ClassifiedPiece, OutlineEntry, PageRange, RangeSource, RawOutlineItem};
pub use render::JsonFormat;
pub use segment::{
    classify_legal_pieces, extract_outline, resolve_bookmark_ranges, scan_content_ranges,
    ErrorMode, SegmentOptions, Segmentation, Segmenter, Strategy,
};
pub use source::{DocumentSource, LopdfSource, MemorySource};
pub use taxonomy::{Category, Taxonomy, TaxonomyBuilder, TaxonomyConfig};

use std::io::Read;
use std::path::Path;

/// Segment a PDF file with the built-in legal taxonomy.
///
/// # Example
///
/// ```no_run
/// use pecas::segment_file;
///
/// let segmentation = segment_file("processo.pdf").unwrap();
/// println!("{} pieces via {}", segmentation.pieces.len(), segmentation.strategy);
/// ```
pub fn segment_file<P: AsRef<Path>>(path: P) -> Result<Segmentation> {
    let source = LopdfSource::open(path)?;
    Segmenter::default().segment(&source)
}

/// Segment a PDF file with a custom segmenter.
///
/// # Example
///
/// ```no_run
/// use pecas::{segment_file_with, SegmentOptions, Segmenter, Taxonomy};
///
/// let taxonomy = Taxonomy::from_json_file("taxonomia.json").unwrap();
/// let segmenter = Segmenter::new(taxonomy)
///     .with_options(SegmentOptions::new().force_content_scan());
/// let segmentation = segment_file_with("processo.pdf", &segmenter).unwrap();
/// ```
pub fn segment_file_with<P: AsRef<Path>>(path: P, segmenter: &Segmenter) -> Result<Segmentation> {
    let source = LopdfSource::open(path)?;
    segmenter.segment(&source)
}

/// Segment a PDF held in memory with the built-in legal taxonomy.
pub fn segment_bytes(data: &[u8]) -> Result<Segmentation> {
    let source = LopdfSource::from_bytes(data)?;
    Segmenter::default().segment(&source)
}

/// Segment a PDF held in memory with a custom segmenter.
pub fn segment_bytes_with(data: &[u8], segmenter: &Segmenter) -> Result<Segmentation> {
    let source = LopdfSource::from_bytes(data)?;
    segmenter.segment(&source)
}

/// Segment a PDF read from a reader.
pub fn segment_reader<R: Read>(reader: R) -> Result<Segmentation> {
    let source = LopdfSource::from_reader(reader)?;
    Segmenter::default().segment(&source)
}

/// Read the validated outline of a PDF file.
///
/// # Example
///
/// ```no_run
/// use pecas::outline_file;
///
/// for entry in outline_file("processo.pdf").unwrap() {
///     println!("{} {} (page {})", "#".repeat(entry.level as usize), entry.title, entry.start_page + 1);
/// }
/// ```
pub fn outline_file<P: AsRef<Path>>(path: P) -> Result<Vec<OutlineEntry>> {
    let source = LopdfSource::open(path)?;
    extract_outline(&source)
}
