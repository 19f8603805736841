use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use url::Url;

use crate::{
    downloader::{Downloader, FetchConfig, FetchError},
    images::alt_coverage,
    keywords::{parse_keywords, scan_keywords},
    links::classify_links,
    parser::Document,
};

/// One page to analyze together with the keywords to look for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AnalysisRequest {
    url: String,
    keywords: Vec<String>,
}

impl AnalysisRequest {
    pub(crate) fn new(url: impl Into<String>, keywords: Vec<String>) -> Self {
        Self {
            url: url.into(),
            keywords,
        }
    }

    /// Build a request from user input, where keywords come as a comma-separated list.
    pub(crate) fn from_csv(url: impl Into<String>, keywords_csv: &str) -> Self {
        Self::new(url, parse_keywords(keywords_csv))
    }

    pub(crate) fn url(&self) -> &str {
        &self.url
    }

    pub(crate) fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

/// SEO signals extracted from a single page. The default value is the all-zero result.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub external_link_count: usize,
    pub internal_link_count: usize,
    pub alt_tag_coverage_percent: f64,
    pub keywords_found: Vec<String>,
}

/// Outcome of an analysis. When fetching failed, `result` is zeroed and `error` says why.
#[derive(Debug)]
pub(crate) struct Analysis {
    pub(crate) result: AnalysisResult,
    pub(crate) error: Option<FetchError>,
}

/// Fetches a page and runs every check on it. Holds no per-analysis state, so one
/// instance can be cloned into as many tasks as needed.
#[derive(Debug, Clone)]
pub(crate) struct Analyzer {
    downloader: Downloader,
}

impl Analyzer {
    pub(crate) fn new(config: &FetchConfig) -> anyhow::Result<Self> {
        Ok(Self {
            downloader: Downloader::new(config)?,
        })
    }

    /// Analyze a URL with a comma-separated keyword list.
    pub(crate) async fn submit(&self, url: &str, keywords_csv: &str) -> Analysis {
        self.analyze(&AnalysisRequest::from_csv(url, keywords_csv))
            .await
    }

    pub(crate) async fn analyze(&self, request: &AnalysisRequest) -> Analysis {
        info!("Analyzing {}", request.url());

        match self.fetch(request.url()).await {
            Ok((page_url, markup)) => Analysis {
                result: inspect(&markup, &page_url, request.keywords()),
                error: None,
            },
            Err(e) => {
                warn!("Failed to fetch {}: {}", request.url(), e);
                Analysis {
                    result: AnalysisResult::default(),
                    error: Some(e),
                }
            }
        }
    }

    async fn fetch(&self, url: &str) -> Result<(Url, String), FetchError> {
        let page_url = Url::parse(url).map_err(|source| FetchError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        let markup = self.downloader.download(&page_url).await?;

        Ok((page_url, markup))
    }
}

/// Run the checks over already fetched markup. The parsed document lives only inside this call.
fn inspect(markup: &str, page_url: &Url, keywords: &[String]) -> AnalysisResult {
    let document = Document::parse(markup);

    let links = classify_links(&document, page_url);
    let alt_tag_coverage_percent = alt_coverage(&document);
    let keywords_found = scan_keywords(&document, keywords);

    info!(
        "{}: {} internal, {} external links, {:.1}% alt coverage, {} keywords found",
        page_url,
        links.internal,
        links.external,
        alt_tag_coverage_percent,
        keywords_found.len()
    );

    AnalysisResult {
        external_link_count: links.external,
        internal_link_count: links.internal,
        alt_tag_coverage_percent,
        keywords_found,
    }
}

#[cfg(test)]
mod tests {
    use mockito::mock;

    use super::{AnalysisRequest, AnalysisResult, Analyzer};
    use crate::downloader::{FetchConfig, FetchError};

    const PAGE: &str = r#"
<html>
    <head><title>Widgets and more</title></head>
    <body>
        <h1>Buy our best widget today</h1>
        <a href="/catalog">Catalog</a>
        <a href="/about">About</a>
        <a href="https://partner.example.org/">Partner</a>
        <a>Not a link</a>
        <img src="/w.png" alt="A shiny widget">
        <img src="/spacer.gif">
    </body>
</html>
"#;

    fn analyzer() -> Analyzer {
        Analyzer::new(&FetchConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn analyze_page() {
        let _m = mock("GET", "/analyzer/page")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body(PAGE)
            .create();

        let url = format!("{}/analyzer/page", mockito::server_url());
        let request = AnalysisRequest::new(
            url,
            vec!["Widget".to_string(), "Gadget".to_string()],
        );
        let analysis = analyzer().analyze(&request).await;

        assert!(analysis.error.is_none());
        assert_eq!(
            analysis.result,
            AnalysisResult {
                external_link_count: 1,
                internal_link_count: 2,
                alt_tag_coverage_percent: 50.0,
                keywords_found: vec!["Widget".to_string()],
            }
        );
    }

    #[tokio::test]
    async fn absolute_links_to_the_same_origin_are_internal() {
        let body = format!(
            r#"<a href="{0}/x">self</a><a href="http://other.com/c">other</a>"#,
            mockito::server_url()
        );
        let _m = mock("GET", "/analyzer/absolute")
            .with_status(200)
            .with_body(body)
            .create();

        let url = format!("{}/analyzer/absolute", mockito::server_url());
        let analysis = analyzer().submit(&url, "").await;

        assert_eq!(analysis.result.internal_link_count, 1);
        assert_eq!(analysis.result.external_link_count, 1);
        assert!(analysis.result.keywords_found.is_empty());
    }

    #[tokio::test]
    async fn not_found_yields_zeroed_result() {
        let _m = mock("GET", "/analyzer/missing")
            .with_status(404)
            .with_body(PAGE)
            .create();

        let url = format!("{}/analyzer/missing", mockito::server_url());
        let analysis = analyzer().submit(&url, "widget, catalog").await;

        assert!(matches!(analysis.error, Some(FetchError::Status(s)) if s.as_u16() == 404));
        assert_eq!(analysis.result, AnalysisResult::default());
        assert_eq!(analysis.result.alt_tag_coverage_percent, 0.0);
    }

    #[tokio::test]
    async fn invalid_url_is_a_fetch_error() {
        let analysis = analyzer().submit("not a url", "seo").await;

        assert!(matches!(
            analysis.error,
            Some(FetchError::InvalidUrl { .. })
        ));
        assert_eq!(analysis.result, AnalysisResult::default());
    }

    #[tokio::test]
    async fn analysis_is_idempotent() {
        let _m = mock("GET", "/analyzer/static")
            .with_status(200)
            .with_body(PAGE)
            .create();

        let url = format!("{}/analyzer/static", mockito::server_url());
        let request = AnalysisRequest::from_csv(url, "widgets, catalog, SEO");
        let analyzer = analyzer();

        let first = analyzer.analyze(&request).await;
        let second = analyzer.analyze(&request).await;

        assert!(first.error.is_none());
        assert_eq!(first.result, second.result);
        assert_eq!(
            first.result.keywords_found,
            vec!["widgets".to_string(), "catalog".to_string()]
        );
    }
}
