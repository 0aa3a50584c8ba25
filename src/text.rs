//! Text normalization shared by the scanner, the classifier and the taxonomy.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalize text for keyword comparison.
///
/// Decomposes to NFD, drops combining marks (so "Contestação" becomes
/// "Contestacao"), lowercases, and collapses runs of whitespace.
pub fn normalize(text: &str) -> String {
    let stripped: String = text
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect();

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Leading slice of `text` of at most `max_chars` characters.
pub fn header_window(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// First `count` non-empty lines of `text`, trimmed.
pub fn leading_lines(text: &str, count: usize) -> impl Iterator<Item = &str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(count)
}

/// Turn a category name into an identifier fragment ("Defesa/Contestação" → "defesa-contestacao").
pub fn slug(text: &str) -> String {
    let mut out = String::new();
    for c in normalize(text).chars() {
        if c.is_alphanumeric() {
            out.push(c);
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}
