//! Plain-text listing of segmentation results.

use std::fmt::Write;

use crate::segment::Segmentation;

/// Render ranges and pieces as an indented listing.
pub fn to_text(segmentation: &Segmentation) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(
        out,
        "Strategy: {} ({} pages)",
        segmentation.strategy, segmentation.page_count
    );

    if !segmentation.has_structure() {
        out.push_str("\nNo structure found; select pages manually.\n");
        return out;
    }

    out.push_str("\nRanges:\n");
    for range in &segmentation.ranges {
        let _ = writeln!(out, "  {}", range.display_label);
    }

    out.push_str("\nPieces:\n");
    if segmentation.pieces.is_empty() {
        out.push_str("  (none classified)\n");
    }
    for piece in &segmentation.pieces {
        let mark = if piece.preselected { "[x]" } else { "[ ]" };
        let _ = writeln!(
            out,
            "  {} {}: {}",
            mark,
            piece.category,
            piece.range.display_label.trim_start()
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::Segmenter;
    use crate::source::MemorySource;

    #[test]
    fn test_listing() {
        let source = MemorySource::blank(10).with_outline([
            (1, "Capa", 1),
            (1, "Sentença", 2),
            (2, "Dispositivo", 3),
            (1, "Certidão", 5),
        ]);
        let text = to_text(&Segmenter::default().segment(&source).unwrap());

        assert!(text.starts_with("Strategy: bookmarks (10 pages)"));
        assert!(text.contains("  Capa (p. 1)\n"));
        assert!(text.contains("    └ Dispositivo (pp. 3-4)\n"));
        assert!(text.contains("  [x] Sentença: Sentença (pp. 2-4)\n"));
        assert!(text.contains("  [ ] Certidão: Certidão (pp. 5-10)\n"));
    }

    #[test]
    fn test_listing_without_structure() {
        let source = MemorySource::new(["lorem"]);
        let text = to_text(&Segmenter::default().segment(&source).unwrap());
        assert!(text.contains("Strategy: none (1 pages)"));
        assert!(text.contains("No structure found"));
    }
}
