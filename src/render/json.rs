//! JSON rendering for segmentation results.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::segment::Segmentation;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a segmentation to JSON.
pub fn to_json(segmentation: &Segmentation, format: JsonFormat) -> Result<String> {
    json_string(segmentation, format)
}

/// Serialize any result value (ranges, pieces, ...) to JSON.
pub fn json_string<T: Serialize + ?Sized>(value: &T, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::Segmenter;
    use crate::source::MemorySource;

    fn sample() -> Segmentation {
        let source = MemorySource::blank(10).with_outline([
            (1, "Capa", 1),
            (1, "Sentença", 2),
            (1, "Anexos", 5),
        ]);
        Segmenter::default().segment(&source).unwrap()
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"strategy\": \"bookmarks\""));
        assert!(json.contains("\"category\": \"Sentença\""));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.contains("\"source\":\"bookmark\""));
    }

    #[test]
    fn test_json_string_for_range_list() {
        let segmentation = sample();
        let json = json_string(segmentation.ranges.as_slice(), JsonFormat::Compact).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(3));
        assert_eq!(value[0]["id"], "bm-1");
        assert_eq!(value[2]["display_label"], "Anexos (pp. 5-10)");
    }

    #[test]
    fn test_piece_fields_are_flattened() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let piece = &value["pieces"][0];
        assert_eq!(piece["start_page"], 1);
        assert_eq!(piece["end_page"], 3);
        assert_eq!(piece["unique_id"], "sentenca:bm-2");
        assert_eq!(piece["preselected"], true);
    }
}
