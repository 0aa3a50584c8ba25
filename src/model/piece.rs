//! Classified legal pieces.

use super::PageRange;
use serde::{Deserialize, Serialize};

/// A page range labeled with exactly one taxonomy category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedPiece {
    /// The underlying range
    #[serde(flatten)]
    pub range: PageRange,

    /// Category name from the taxonomy
    pub category: String,

    /// Identifier unique within one classification run
    pub unique_id: String,

    /// Whether downstream selection should start with this piece checked
    pub preselected: bool,
}

impl ClassifiedPiece {
    /// First page (0-indexed).
    pub fn start_page(&self) -> u32 {
        self.range.start_page
    }

    /// Last page (0-indexed, inclusive).
    pub fn end_page(&self) -> u32 {
        self.range.end_page
    }

    /// Title of the underlying range.
    pub fn title(&self) -> &str {
        &self.range.title
    }
}
