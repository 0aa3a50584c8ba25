//! Category classification of page ranges.

use crate::model::{ClassifiedPiece, PageRange, RangeSource};
use crate::taxonomy::Taxonomy;
use crate::text::{normalize, slug};

/// Label ranges with taxonomy categories.
///
/// Content-scan ranges keep the category they were detected as. Other
/// ranges are matched by title: the first category (in declaration order)
/// with a keyword contained in the normalized title wins. Ranges matching
/// no category are left out of the result.
///
/// The result is ordered by category declaration order, then by position
/// in `ranges`.
pub fn classify_legal_pieces(ranges: &[PageRange], taxonomy: &Taxonomy) -> Vec<ClassifiedPiece> {
    let mut matched: Vec<(usize, ClassifiedPiece)> = ranges
        .iter()
        .filter_map(|range| {
            let Some(index) = category_index(range, taxonomy) else {
                log::debug!("No category for '{}'", range.title);
                return None;
            };
            let category = &taxonomy.categories()[index];

            Some((
                index,
                ClassifiedPiece {
                    range: range.clone(),
                    category: category.name().to_string(),
                    unique_id: format!("{}:{}", slug(category.name()), range.id),
                    preselected: category.is_preselected(),
                },
            ))
        })
        .collect();

    matched.sort_by_key(|(index, _)| *index);
    matched.into_iter().map(|(_, piece)| piece).collect()
}

fn category_index(range: &PageRange, taxonomy: &Taxonomy) -> Option<usize> {
    if range.source == RangeSource::ContentScan {
        if let Some(index) = range
            .category_hint
            .as_deref()
            .and_then(|hint| taxonomy.position(hint))
        {
            return Some(index);
        }
    }

    let title = normalize(&range.title);
    taxonomy
        .categories()
        .iter()
        .position(|c| c.keyword_in(&title).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bookmark(ordinal: usize, title: &str, start: u32, end: u32) -> PageRange {
        PageRange::new(RangeSource::Bookmark, ordinal, title, 1, start, end)
    }

    #[test]
    fn test_substring_match_ignores_case_and_accents() {
        let ranges = vec![bookmark(1, "CONTESTAÇÃO DO RÉU", 0, 3)];
        let pieces = classify_legal_pieces(&ranges, &Taxonomy::legal_default());
        assert_eq!(pieces.len(), 1);
        assert_eq!(pieces[0].category, "Defesa/Contestação");
        assert_eq!(pieces[0].unique_id, "defesa-contestacao:bm-1");
        assert!(pieces[0].preselected);
    }

    #[test]
    fn test_unmatched_titles_are_dropped() {
        let ranges = vec![
            bookmark(1, "Capa", 0, 0),
            bookmark(2, "Sentença", 1, 3),
            bookmark(3, "Anexos", 4, 9),
        ];
        let pieces = classify_legal_pieces(&ranges, &Taxonomy::legal_default());
        assert_eq!(pieces.len(), 1);
        assert_eq!(pieces[0].category, "Sentença");
        assert_eq!((pieces[0].start_page(), pieces[0].end_page()), (1, 3));
    }

    #[test]
    fn test_ordered_by_taxonomy_then_document() {
        let ranges = vec![
            bookmark(1, "Sentença", 0, 1),
            bookmark(2, "Petição inicial", 2, 3),
            bookmark(3, "Certidão de intimação", 4, 4),
            bookmark(4, "Sentença de embargos", 5, 6),
        ];
        let pieces = classify_legal_pieces(&ranges, &Taxonomy::legal_default());
        let order: Vec<_> = pieces.iter().map(|p| p.range.id.as_str()).collect();
        assert_eq!(order, vec!["bm-2", "bm-1", "bm-4", "bm-3"]);
    }

    #[test]
    fn test_content_scan_hint_is_kept() {
        let range = PageRange::new(RangeSource::ContentScan, 1, "Réplica", 1, 2, 4)
            .with_category_hint("Réplica");
        let pieces = classify_legal_pieces(&[range], &Taxonomy::legal_default());
        assert_eq!(pieces[0].category, "Réplica");
        assert!(!pieces[0].preselected);
    }

    #[test]
    fn test_unknown_hint_falls_back_to_title() {
        let taxonomy = Taxonomy::builder()
            .category("Sentença", ["sentença"])
            .build()
            .unwrap();
        let range = PageRange::new(RangeSource::ContentScan, 1, "Sentença", 1, 0, 0)
            .with_category_hint("Categoria removida");
        let pieces = classify_legal_pieces(&[range], &taxonomy);
        assert_eq!(pieces[0].category, "Sentença");
    }

    #[test]
    fn test_deterministic() {
        let ranges = vec![
            bookmark(1, "Acórdão", 0, 2),
            bookmark(2, "Recurso de apelação", 3, 5),
        ];
        let taxonomy = Taxonomy::legal_default();
        assert_eq!(
            classify_legal_pieces(&ranges, &taxonomy),
            classify_legal_pieces(&ranges, &taxonomy)
        );
    }
}
