use crate::parser::Document;

/// Percentage of `img` elements carrying a non-empty `alt` attribute, `0.0` for a page without images.
pub(crate) fn alt_coverage(document: &Document) -> f64 {
    let (total, with_alt) = document
        .image_alts()
        .fold((0usize, 0usize), |(total, with_alt), alt| match alt {
            Some(alt) if !alt.is_empty() => (total + 1, with_alt + 1),
            _ => (total + 1, with_alt),
        });

    if total == 0 {
        return 0.0;
    }

    (with_alt as f64 / total as f64) * 100.0
}
