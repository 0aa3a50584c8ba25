//! Page ranges.

use serde::{Deserialize, Serialize};

/// Where a page range came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeSource {
    /// Resolved from the document outline
    Bookmark,
    /// Synthesized from page header text
    ContentScan,
}

impl RangeSource {
    fn id_prefix(self) -> &'static str {
        match self {
            RangeSource::Bookmark => "bm",
            RangeSource::ContentScan => "scan",
        }
    }
}

/// A contiguous, inclusive span of pages attributed to one title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRange {
    /// Stable identifier (`bm-1`, `scan-3`, ...)
    pub id: String,

    /// Bookmark title, or detected category name for content scans
    pub title: String,

    /// Nesting level (1 = top level)
    pub level: u32,

    /// First page (0-indexed)
    pub start_page: u32,

    /// Last page (0-indexed, inclusive)
    pub end_page: u32,

    /// Human-readable label with indentation and 1-indexed span
    pub display_label: String,

    /// Origin of the range
    pub source: RangeSource,

    /// Category detected by the content scanner
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_hint: Option<String>,
}

impl PageRange {
    /// Create a range; `ordinal` is the 1-based position used in the id.
    pub fn new(
        source: RangeSource,
        ordinal: usize,
        title: impl Into<String>,
        level: u32,
        start_page: u32,
        end_page: u32,
    ) -> Self {
        let mut range = Self {
            id: format!("{}-{}", source.id_prefix(), ordinal),
            title: title.into(),
            level,
            start_page,
            end_page,
            display_label: String::new(),
            source,
            category_hint: None,
        };
        range.relabel();
        range
    }

    /// Attach the category detected while scanning.
    pub fn with_category_hint(mut self, category: impl Into<String>) -> Self {
        self.category_hint = Some(category.into());
        self
    }

    /// Recompute `display_label` from the current span.
    pub fn relabel(&mut self) {
        self.display_label = display_label(&self.title, self.level, self.start_page, self.end_page);
    }

    /// Number of pages covered; zero if the span is inverted.
    pub fn page_count(&self) -> u32 {
        self.end_page
            .checked_sub(self.start_page)
            .map_or(0, |span| span + 1)
    }

    /// Whether the 0-indexed page lies inside the range.
    pub fn contains(&self, page: u32) -> bool {
        (self.start_page..=self.end_page).contains(&page)
    }

    /// 1-indexed page numbers, as `lopdf` numbers pages.
    pub fn pages(&self) -> impl Iterator<Item = u32> {
        (self.start_page + 1)..=(self.end_page + 1)
    }
}

/// Build a label such as `"  └ Anexo I (pp. 5-7)"`.
pub(crate) fn display_label(title: &str, level: u32, start_page: u32, end_page: u32) -> String {
    let depth = level.saturating_sub(1) as usize;
    let marker = if depth > 0 {
        format!("{}└ ", "  ".repeat(depth))
    } else {
        String::new()
    };

    if start_page == end_page {
        format!("{}{} (p. {})", marker, title, start_page + 1)
    } else {
        format!(
            "{}{} (pp. {}-{})",
            marker,
            title,
            start_page + 1,
            end_page + 1
        )
    }
}
