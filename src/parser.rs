use scraper::{Html, Node, Selector};

/// Elements whose text content is never rendered.
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// A parsed HTML page.
#[derive(Debug)]
pub(crate) struct Document {
    anchors: Selector,
    images: Selector,
    html: Html,
}

impl Document {
    /// Parse `html`. Malformed markup never fails, it just yields fewer elements.
    pub(crate) fn parse(html: &str) -> Self {
        Self {
            anchors: Selector::parse("a").unwrap(),
            images: Selector::parse("img").unwrap(),
            html: Html::parse_document(html),
        }
    }

    /// Returns an iterator over the non-empty `href` values of all anchors.
    pub(crate) fn hrefs(&self) -> impl Iterator<Item = &str> {
        self.html
            .select(&self.anchors)
            .filter_map(|el| el.value().attr("href"))
            .filter(|href| !href.is_empty())
    }

    /// Returns an iterator yielding the `alt` attribute of every `img`, if it has one.
    pub(crate) fn image_alts(&self) -> impl Iterator<Item = Option<&str>> {
        self.html
            .select(&self.images)
            .map(|el| el.value().attr("alt"))
    }

    /// Concatenated text of every text node that is not inside a hidden element.
    pub(crate) fn visible_text(&self) -> String {
        self.html
            .tree
            .root()
            .descendants()
            .filter_map(|node| match node.value() {
                Node::Text(text) => Some((node, text)),
                _ => None,
            })
            .filter(|(node, _)| {
                !node.ancestors().any(|ancestor| match ancestor.value() {
                    Node::Element(el) => HIDDEN_ELEMENTS.contains(&el.name()),
                    _ => false,
                })
            })
            .map(|(_, text)| &**text)
            .collect()
    }
}
