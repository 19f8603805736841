use url::{Position, Url};

use crate::parser::Document;

/// Number of anchors pointing inside and outside the analyzed page's origin.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LinkCounts {
    pub(crate) internal: usize,
    pub(crate) external: usize,
}

/// `scheme://[userinfo@]host[:port]` of `page_url`.
pub(crate) fn base_domain(page_url: &Url) -> String {
    format!(
        "{}://{}",
        page_url.scheme(),
        &page_url[Position::BeforeUsername..Position::AfterPort]
    )
}

/// An href is internal when it starts with the page's base domain or with `/`.
///
/// This is a plain prefix test and nothing more: `//cdn.host/x` counts as internal because it
/// starts with `/`, while `#top`, `page.html` and `mailto:` links count as external.
pub(crate) fn is_internal(href: &str, base_domain: &str) -> bool {
    href.starts_with(base_domain) || href.starts_with('/')
}

/// Classify every anchor with a non-empty href in `document`.
pub(crate) fn classify_links(document: &Document, page_url: &Url) -> LinkCounts {
    let base = base_domain(page_url);

    document
        .hrefs()
        .fold(LinkCounts::default(), |mut counts, href| {
            if is_internal(href, &base) {
                counts.internal += 1;
            } else {
                counts.external += 1;
            }
            counts
        })
}
