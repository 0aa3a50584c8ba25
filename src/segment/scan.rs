//! Content scanning: synthesize ranges from page header text.
//!
//! Used when a document has no usable outline. Each page's header is
//! tested against the taxonomy's regex patterns first and its keywords
//! second; a detection on the page right after a detection of the same
//! category continues that section instead of opening a new one.

use crate::error::Result;
use crate::model::{PageRange, RangeSource};
use crate::source::DocumentSource;
use crate::taxonomy::Taxonomy;
use crate::text::{header_window, leading_lines, normalize};

use super::options::{ErrorMode, SegmentOptions};

/// Scan page text and build one range per detected section.
///
/// Ranges are closed against the start of the next detected section; the
/// last one runs to the end of the document. Pages before the first
/// detection belong to no range.
pub fn scan_content_ranges<S: DocumentSource + ?Sized>(
    source: &S,
    taxonomy: &Taxonomy,
    options: &SegmentOptions,
) -> Result<Vec<PageRange>> {
    let total_pages = source.page_count()?;
    let Some(last_page) = total_pages.checked_sub(1) else {
        return Ok(Vec::new());
    };

    let mut ranges: Vec<PageRange> = Vec::new();
    // (category, page) of the most recent detection
    let mut last_detection: Option<(&str, u32)> = None;

    for page in 0..total_pages {
        let text = match source.page_text(page) {
            Ok(text) => text,
            Err(e) if options.error_mode == ErrorMode::Lenient => {
                log::warn!("Skipping page {} during content scan: {}", page + 1, e);
                continue;
            }
            Err(e) => return Err(e),
        };

        let text = text.trim();
        if text.is_empty() {
            continue;
        }

        let header = header_window(text, options.header_window_chars);
        let Some(category) = detect_category(header, taxonomy, options) else {
            continue;
        };

        let continues = matches!(
            last_detection,
            Some((previous, previous_page)) if previous == category && previous_page + 1 == page
        );
        last_detection = Some((category, page));

        if continues {
            log::debug!("Page {} continues '{}'", page + 1, category);
            continue;
        }

        log::debug!("Page {} opens '{}'", page + 1, category);
        ranges.push(
            PageRange::new(
                RangeSource::ContentScan,
                ranges.len() + 1,
                category,
                1,
                page,
                last_page,
            )
            .with_category_hint(category),
        );
    }

    close_ranges(&mut ranges, last_page);
    Ok(ranges)
}

/// Category of a page header, by regex first and keywords second.
pub fn detect_category<'t>(
    header: &str,
    taxonomy: &'t Taxonomy,
    options: &SegmentOptions,
) -> Option<&'t str> {
    if let Some(category) = taxonomy
        .categories()
        .iter()
        .find(|c| c.matches_header(header))
    {
        return Some(category.name());
    }

    // The topmost matching line decides; categories break ties within a line.
    leading_lines(header, options.header_lines)
        .map(normalize)
        .find_map(|line| {
            taxonomy.categories().iter().find(|category| {
                category.keywords().iter().any(|keyword| {
                    line == *keyword
                        || (keyword.chars().count() >= options.min_substring_keyword_len
                            && line.contains(keyword.as_str()))
                })
            })
        })
        .map(|c| c.name())
}

/// End each range where the next begins; the last one ends on `last_page`.
fn close_ranges(ranges: &mut [PageRange], last_page: u32) {
    let starts: Vec<u32> = ranges.iter().skip(1).map(|r| r.start_page).collect();
    for (range, next_start) in ranges
        .iter_mut()
        .zip(starts.into_iter().map(Some).chain(std::iter::once(None)))
    {
        range.end_page = next_start.map_or(last_page, |s| s - 1);
        range.relabel();
    }
}
