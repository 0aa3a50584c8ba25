//! Outline types.

use serde::{Deserialize, Serialize};

/// An outline item as exposed by a document source, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawOutlineItem {
    /// Nesting level (1 = top level, 0 is invalid)
    pub level: u32,

    /// Item title, if the source could decode one
    pub title: Option<String>,

    /// Target page number (1-indexed), if the destination resolved
    pub page: Option<u32>,
}

impl RawOutlineItem {
    /// Create a fully-populated raw outline item.
    pub fn new(level: u32, title: impl Into<String>, page: u32) -> Self {
        Self {
            level,
            title: Some(title.into()),
            page: Some(page),
        }
    }
}

impl From<(u32, &str, u32)> for RawOutlineItem {
    fn from((level, title, page): (u32, &str, u32)) -> Self {
        Self::new(level, title, page)
    }
}

/// A validated bookmark: level, title and 0-indexed start page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineEntry {
    /// Nesting level (1 = top level)
    pub level: u32,

    /// Bookmark title
    pub title: String,

    /// First page of the bookmark (0-indexed)
    pub start_page: u32,
}

impl OutlineEntry {
    /// Create a new outline entry.
    pub fn new(level: u32, title: impl Into<String>, start_page: u32) -> Self {
        Self {
            level,
            title: title.into(),
            start_page,
        }
    }
}
