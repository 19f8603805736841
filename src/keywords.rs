use crate::parser::Document;

/// Split a comma-separated keyword list. Segments are trimmed, empty ones are kept.
pub(crate) fn parse_keywords(csv: &str) -> Vec<String> {
    csv.split(',').map(|keyword| keyword.trim().to_string()).collect()
}

/// Keywords found in the visible text of `document`, case-insensitively.
///
/// The original casing and input order are kept, and duplicates in `keywords` stay duplicated.
pub(crate) fn scan_keywords(document: &Document, keywords: &[String]) -> Vec<String> {
    let text = document.visible_text().to_lowercase();

    keywords
        .iter()
        .filter(|keyword| !keyword.is_empty() && text.contains(&keyword.to_lowercase()))
        .cloned()
        .collect()
}
