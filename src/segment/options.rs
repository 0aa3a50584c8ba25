//! Segmentation options.

/// Options controlling outline fallback and content scanning.
#[derive(Debug, Clone)]
pub struct SegmentOptions {
    /// Fewer bookmark ranges than this triggers the content scan
    pub min_bookmark_ranges: usize,

    /// Number of leading characters of a page treated as its header
    pub header_window_chars: usize,

    /// Number of non-empty header lines tested against keywords
    pub header_lines: usize,

    /// Minimum keyword length for substring (not exact) line matches
    pub min_substring_keyword_len: usize,

    /// How page-text failures during the scan are handled
    pub error_mode: ErrorMode,

    /// Skip the outline and always scan content
    pub force_content_scan: bool,
}

impl SegmentOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bookmark-range threshold below which content is scanned.
    pub fn with_min_bookmark_ranges(mut self, min: usize) -> Self {
        self.min_bookmark_ranges = min;
        self
    }

    /// Set the header window size in characters.
    pub fn with_header_window(mut self, chars: usize) -> Self {
        self.header_window_chars = chars;
        self
    }

    /// Set how many header lines are tested against keywords.
    pub fn with_header_lines(mut self, lines: usize) -> Self {
        self.header_lines = lines;
        self
    }

    /// Set the minimum keyword length for substring line matches.
    pub fn with_min_substring_keyword_len(mut self, len: usize) -> Self {
        self.min_substring_keyword_len = len;
        self
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Fail on the first unreadable page.
    pub fn strict(mut self) -> Self {
        self.error_mode = ErrorMode::Strict;
        self
    }

    /// Always scan content, ignoring the outline.
    pub fn force_content_scan(mut self) -> Self {
        self.force_content_scan = true;
        self
    }
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            min_bookmark_ranges: 3,
            header_window_chars: 500,
            header_lines: 5,
            min_substring_keyword_len: 5,
            error_mode: ErrorMode::Lenient,
            force_content_scan: false,
        }
    }
}

/// Error handling mode for per-page failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail on any error
    Strict,
    /// Skip unreadable pages and continue
    #[default]
    Lenient,
}
