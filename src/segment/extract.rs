//! Outline extraction: raw outline items → validated [`OutlineEntry`]s.

use crate::error::{Error, Result};
use crate::model::{OutlineEntry, RawOutlineItem};
use crate::source::DocumentSource;

/// Read and validate the outline of a document.
///
/// A document without an outline yields an empty vector. An outline that
/// exists but cannot be read yields [`Error::StructureUnavailable`]; only a
/// failure to obtain the page count is reported as is.
pub fn extract_outline<S: DocumentSource + ?Sized>(source: &S) -> Result<Vec<OutlineEntry>> {
    let total_pages = source.page_count()?;
    let raw = source
        .outline()
        .map_err(|e| Error::StructureUnavailable(e.to_string()))?;

    Ok(validate_outline(raw, total_pages))
}

/// Drop malformed items and convert pages to 0-indexed.
///
/// Items without a title, without a resolvable page, at level 0, or
/// pointing outside `1..=total_pages` are skipped with a warning.
pub fn validate_outline<I>(items: I, total_pages: u32) -> Vec<OutlineEntry>
where
    I: IntoIterator<Item = RawOutlineItem>,
{
    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match validate_item(item, total_pages) {
            Ok(entry) => Some(entry),
            Err(reason) => {
                log::warn!("Skipping outline entry {}: {}", index + 1, reason);
                None
            }
        })
        .collect()
}

fn validate_item(item: RawOutlineItem, total_pages: u32) -> std::result::Result<OutlineEntry, String> {
    let title = item.title.ok_or("missing title")?;
    if item.level == 0 {
        return Err(format!("'{}' has level 0", title));
    }
    let page = item
        .page
        .ok_or_else(|| format!("'{}' has no resolvable destination", title))?;
    if page == 0 || page > total_pages {
        return Err(format!(
            "'{}' points to page {} (document has {} pages)",
            title, page, total_pages
        ));
    }

    Ok(OutlineEntry::new(item.level, title.trim(), page - 1))
}
