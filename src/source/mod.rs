//! Document access abstraction.
//!
//! Segmentation only needs three read operations from a document: its
//! outline, its page count and the plain text of a page. [`DocumentSource`]
//! captures exactly those, so any PDF library can be plugged in through an
//! adapter. [`LopdfSource`] is the default adapter; [`MemorySource`] serves
//! callers that already hold extracted text.

mod lopdf_source;

pub use lopdf_source::LopdfSource;

use crate::error::{Error, Result};
use crate::model::RawOutlineItem;

/// Read-only access to a document's outline and text.
pub trait DocumentSource {
    /// Return the flattened outline in document order.
    ///
    /// An empty vector means the document has no outline. An error means
    /// the outline exists but cannot be read.
    fn outline(&self) -> Result<Vec<RawOutlineItem>>;

    /// Return the number of pages.
    fn page_count(&self) -> Result<u32>;

    /// Return the plain text of a page (0-indexed).
    fn page_text(&self, index: u32) -> Result<String>;
}

impl<S: DocumentSource + ?Sized> DocumentSource for &S {
    fn outline(&self) -> Result<Vec<RawOutlineItem>> {
        (**self).outline()
    }

    fn page_count(&self) -> Result<u32> {
        (**self).page_count()
    }

    fn page_text(&self, index: u32) -> Result<String> {
        (**self).page_text(index)
    }
}

/// A document held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    outline: Option<Vec<RawOutlineItem>>,
    pages: Vec<String>,
}

impl MemorySource {
    /// Create a source from per-page text, without an outline.
    pub fn new<I, T>(pages: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            outline: Some(Vec::new()),
            pages: pages.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a source with `count` blank pages.
    pub fn blank(count: u32) -> Self {
        Self::new((0..count).map(|_| String::new()))
    }

    /// Set the outline.
    pub fn with_outline<I, T>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<RawOutlineItem>,
    {
        self.outline = Some(items.into_iter().map(Into::into).collect());
        self
    }

    /// Mark the outline as present but unreadable.
    pub fn with_unreadable_outline(mut self) -> Self {
        self.outline = None;
        self
    }
}

impl DocumentSource for MemorySource {
    fn outline(&self) -> Result<Vec<RawOutlineItem>> {
        self.outline
            .clone()
            .ok_or_else(|| Error::Corrupted("outline tree is unreadable".to_string()))
    }

    fn page_count(&self) -> Result<u32> {
        Ok(self.pages.len() as u32)
    }

    fn page_text(&self, index: u32) -> Result<String> {
        self.pages
            .get(index as usize)
            .cloned()
            .ok_or(Error::PageOutOfRange(index, self.pages.len() as u32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_source_pages() {
        let source = MemorySource::new(["one", "two"]);
        assert_eq!(source.page_count().unwrap(), 2);
        assert_eq!(source.page_text(1).unwrap(), "two");
        assert!(matches!(
            source.page_text(2),
            Err(Error::PageOutOfRange(2, 2))
        ));
    }

    #[test]
    fn test_memory_source_outline() {
        let source = MemorySource::blank(3).with_outline([(1, "Capa", 1), (2, "Índice", 2)]);
        let outline = source.outline().unwrap();
        assert_eq!(outline.len(), 2);
        assert_eq!(outline[1], RawOutlineItem::new(2, "Índice", 2));
    }

    #[test]
    fn test_unreadable_outline() {
        let source = MemorySource::blank(1).with_unreadable_outline();
        assert!(source.outline().is_err());
    }

    #[test]
    fn test_blanket_ref_impl() {
        fn count<S: DocumentSource>(source: S) -> u32 {
            source.page_count().unwrap()
        }

        let source = MemorySource::blank(4);
        assert_eq!(count(&source), 4);
        let dynamic: &dyn DocumentSource = &source;
        assert_eq!(count(dynamic), 4);
    }
}
