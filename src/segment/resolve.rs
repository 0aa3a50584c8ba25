//! Range resolution: flat outline → page ranges.

use crate::model::{OutlineEntry, PageRange, RangeSource};

/// Turn a flat outline into page ranges.
///
/// Each entry ends on the page before the next entry at the same or a
/// shallower level, or on the last page when no such entry follows. Deeper
/// entries never end an ancestor, so nested bookmarks produce nested ranges.
/// The end is clamped into `start..=total_pages - 1`, which collapses an
/// entry sharing its terminator's page into a single-page range.
///
/// # Example
///
/// ```
/// use pecas::{resolve_bookmark_ranges, OutlineEntry};
///
/// let outline = vec![
///     OutlineEntry::new(1, "Capa", 0),
///     OutlineEntry::new(1, "Sentença", 1),
///     OutlineEntry::new(1, "Anexos", 4),
/// ];
/// let ranges = resolve_bookmark_ranges(&outline, 10);
/// let spans: Vec<_> = ranges.iter().map(|r| (r.start_page, r.end_page)).collect();
/// assert_eq!(spans, vec![(0, 0), (1, 3), (4, 9)]);
/// ```
pub fn resolve_bookmark_ranges(outline: &[OutlineEntry], total_pages: u32) -> Vec<PageRange> {
    let Some(last_page) = total_pages.checked_sub(1) else {
        return Vec::new();
    };

    let mut ranges = Vec::with_capacity(outline.len());
    for (i, entry) in outline.iter().enumerate() {
        let start = entry.start_page;
        if start > last_page {
            log::warn!(
                "Bookmark '{}' starts on page {} beyond the last page {}",
                entry.title,
                start + 1,
                total_pages
            );
            continue;
        }

        let end = outline[i + 1..]
            .iter()
            .find(|next| next.level <= entry.level)
            .map_or(last_page, |next| next.start_page.saturating_sub(1));
        let end = end.min(last_page).max(start);

        ranges.push(PageRange::new(
            RangeSource::Bookmark,
            ranges.len() + 1,
            entry.title.clone(),
            entry.level,
            start,
            end,
        ));
    }

    ranges
}
