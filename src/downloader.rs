use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;
use tracing::debug;
use url::Url;

/// Everything that can go wrong while retrieving a page.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL `{url}`: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("server responded with {0}")]
    Status(StatusCode),
}

/// Settings for the HTTP client. Unset fields fall back to the client's defaults.
#[derive(Debug, Clone, Default)]
pub(crate) struct FetchConfig {
    pub(crate) timeout: Option<Duration>,
    pub(crate) user_agent: Option<String>,
}

/// Thin wrapper over `reqwest::Client`, which is already reference counted, so the
/// downloader is cheap to clone into every analysis.
#[derive(Debug, Clone)]
pub(crate) struct Downloader(reqwest::Client);

impl Downloader {
    pub(crate) fn new(config: &FetchConfig) -> anyhow::Result<Self> {
        let mut builder = reqwest::ClientBuilder::new();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }

        Ok(Self(builder.build()?))
    }

    /// Issue a single GET for `url` and return the body. Any non-2xx status is an error.
    pub(crate) async fn download(&self, url: &Url) -> Result<String, FetchError> {
        debug!("GET {}", url);
        let response = self.0.get(url.as_str()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use mockito::mock;
    use url::Url;

    use super::{Downloader, FetchConfig, FetchError};

    #[tokio::test]
    async fn downloads_body() -> anyhow::Result<()> {
        let _m = mock("GET", "/downloader/ok")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body("<p>hello</p>")
            .create();

        let url = Url::parse(&format!("{}/downloader/ok", mockito::server_url()))?;
        let downloader = Downloader::new(&FetchConfig::default())?;

        assert_eq!(downloader.download(&url).await?, "<p>hello</p>");

        Ok(())
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() -> anyhow::Result<()> {
        let _m = mock("GET", "/downloader/gone").with_status(410).create();

        let url = Url::parse(&format!("{}/downloader/gone", mockito::server_url()))?;
        let downloader = Downloader::new(&FetchConfig::default())?;

        match downloader.download(&url).await {
            Err(FetchError::Status(status)) => assert_eq!(status.as_u16(), 410),
            other => panic!("expected a status error, got {:?}", other),
        }

        Ok(())
    }

    #[tokio::test]
    async fn sends_configured_user_agent() -> anyhow::Result<()> {
        let _m = mock("GET", "/downloader/agent")
            .match_header("user-agent", "seo-test/1.0")
            .with_status(200)
            .with_body("ok")
            .create();

        let url = Url::parse(&format!("{}/downloader/agent", mockito::server_url()))?;
        let config = FetchConfig {
            timeout: Some(Duration::from_secs(5)),
            user_agent: Some("seo-test/1.0".to_string()),
        };
        let downloader = Downloader::new(&config)?;

        assert_eq!(downloader.download(&url).await?, "ok");

        Ok(())
    }

    #[tokio::test]
    async fn connection_failure_is_a_request_error() -> anyhow::Result<()> {
        let url = Url::parse("http://127.0.0.1:1/")?;
        let downloader = Downloader::new(&FetchConfig::default())?;

        assert!(matches!(
            downloader.download(&url).await,
            Err(FetchError::Request(_))
        ));

        Ok(())
    }
}
