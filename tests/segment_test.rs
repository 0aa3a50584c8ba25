//! Integration tests for bookmark resolution, content scanning and classification.

use pecas::{
    classify_legal_pieces, extract_outline, resolve_bookmark_ranges, scan_content_ranges,
    DocumentSource, MemorySource, OutlineEntry, PageRange, RangeSource, RawOutlineItem,
    SegmentOptions, Segmenter, Strategy, Taxonomy,
};

fn spans(ranges: &[PageRange]) -> Vec<(u32, u32, &str)> {
    ranges
        .iter()
        .map(|r| (r.start_page, r.end_page, r.title.as_str()))
        .collect()
}

#[test]
fn test_flat_outline_scenario() {
    let source = MemorySource::blank(10).with_outline([
        (1, "Capa", 1),
        (1, "Sentença", 2),
        (1, "Anexos", 5),
    ]);
    let outline = extract_outline(&source).unwrap();
    let ranges = resolve_bookmark_ranges(&outline, source.page_count().unwrap());

    assert_eq!(
        spans(&ranges),
        vec![(0, 0, "Capa"), (1, 3, "Sentença"), (4, 9, "Anexos")]
    );
}

#[test]
fn test_content_scan_scenario() {
    let source = MemorySource::new([
        "",
        "Documento digitalizado",
        "SENTENÇA\n\nVistos, etc.",
        "Fundamentação",
        "Ante o exposto, julgo procedente.",
    ]);
    let taxonomy = Taxonomy::legal_default();

    let outline = extract_outline(&source).unwrap();
    assert!(resolve_bookmark_ranges(&outline, 5).is_empty());

    let ranges = scan_content_ranges(&source, &taxonomy, &SegmentOptions::default()).unwrap();
    assert_eq!(spans(&ranges), vec![(2, 4, "Sentença")]);
    assert_eq!(ranges[0].source, RangeSource::ContentScan);

    let pieces = classify_legal_pieces(&ranges, &taxonomy);
    assert_eq!(pieces.len(), 1);
    assert_eq!(pieces[0].category, "Sentença");
    assert!(pieces[0].preselected);
}

#[test]
fn test_classifier_scenario() {
    let ranges = resolve_bookmark_ranges(&[OutlineEntry::new(1, "CONTESTAÇÃO DO RÉU", 0)], 3);
    let pieces = classify_legal_pieces(&ranges, &Taxonomy::legal_default());
    assert_eq!(pieces[0].category, "Defesa/Contestação");
}

#[test]
fn test_consecutive_pages_scenario() {
    let source = MemorySource::new(["SENTENÇA\np. 1", "SENTENÇA\np. 2", "Fim"]);
    let ranges =
        scan_content_ranges(&source, &Taxonomy::legal_default(), &SegmentOptions::default())
            .unwrap();
    assert_eq!(spans(&ranges), vec![(0, 2, "Sentença")]);
}

#[test]
fn test_ranges_stay_in_bounds_for_messy_outlines() {
    let outlines: Vec<Vec<(u32, &str, u32)>> = vec![
        vec![(1, "A", 3), (1, "B", 3), (1, "C", 3)],
        vec![(1, "A", 7), (2, "A.1", 2), (1, "B", 1)],
        vec![(3, "Fundo", 1), (1, "Topo", 4), (2, "Meio", 4), (1, "Fim", 7)],
        vec![(1, "Só", 7)],
    ];

    for items in outlines {
        let source = MemorySource::blank(7).with_outline(items);
        let outline = extract_outline(&source).unwrap();
        let first = resolve_bookmark_ranges(&outline, 7);
        let second = resolve_bookmark_ranges(&outline, 7);
        assert_eq!(first, second);

        for range in &first {
            assert!(range.start_page <= range.end_page, "{:?}", range);
            assert!(range.end_page <= 6, "{:?}", range);
        }
    }
}

#[test]
fn test_malformed_entries_do_not_abort() {
    let source = MemorySource::blank(4).with_outline(vec![
        RawOutlineItem::new(1, "Petição Inicial", 1),
        RawOutlineItem {
            level: 1,
            title: None,
            page: Some(2),
        },
        RawOutlineItem::new(1, "Fantasma", 40),
        RawOutlineItem::new(1, "Sentença", 3),
    ]);
    let outline = extract_outline(&source).unwrap();
    let ranges = resolve_bookmark_ranges(&outline, 4);
    assert_eq!(
        spans(&ranges),
        vec![(0, 1, "Petição Inicial"), (2, 3, "Sentença")]
    );
}

#[test]
fn test_custom_taxonomy_through_segmenter() {
    let taxonomy = Taxonomy::from_json_str(
        r#"{"categories": [
            {"name": "Nota Fiscal", "keywords": ["nota fiscal"], "patterns": ["^\\s*nota\\s+fiscal"], "preselected": true},
            {"name": "Recibo", "keywords": ["recibo"]}
        ]}"#,
    )
    .unwrap();

    let source = MemorySource::new([
        "NOTA FISCAL\nnº 1",
        "itens",
        "Recibo de pagamento",
        "NOTA FISCAL\nnº 2",
    ]);
    let result = Segmenter::new(taxonomy).segment(&source).unwrap();

    assert_eq!(result.strategy, Strategy::ContentScan);
    assert_eq!(
        spans(&result.ranges),
        vec![(0, 1, "Nota Fiscal"), (2, 2, "Recibo"), (3, 3, "Nota Fiscal")]
    );
    let ids: Vec<_> = result.pieces.iter().map(|p| p.unique_id.as_str()).collect();
    assert_eq!(ids, vec!["nota-fiscal:scan-1", "nota-fiscal:scan-3", "recibo:scan-2"]);
    assert_eq!(result.preselected().count(), 2);
}
