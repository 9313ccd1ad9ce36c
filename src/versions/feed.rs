//! Remote version feed fetching and parsing.

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::time::Duration;

/// Fetches a version feed over HTTP.
///
/// # Example
///
/// ```no_run
/// use godoctor::versions::feed::{parse_json_feed, FeedFetcher};
/// use std::time::Duration;
///
/// let fetcher = FeedFetcher::new(Duration::from_secs(10)).unwrap();
/// let body = fetcher.fetch("https://golang.org/dl/?mode=json").unwrap();
/// let versions = parse_json_feed(&body).unwrap();
/// ```
pub struct FeedFetcher {
    client: reqwest::blocking::Client,
}

impl FeedFetcher {
    /// Create a fetcher with the specified timeout.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("godoctor/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { client })
    }

    /// Fetch the feed body from a URL.
    pub fn fetch(&self, url: &str) -> Result<String> {
        tracing::debug!("fetching version feed {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("Failed to fetch {}", url))?;

        if !response.status().is_success() {
            return Err(anyhow!("HTTP {} fetching {}", response.status(), url));
        }

        response
            .text()
            .with_context(|| format!("Failed to read response from {}", url))
    }
}

/// One release entry of the JSON downloads feed.
#[derive(Debug, Deserialize)]
struct Release {
    #[serde(default)]
    version: String,
}

/// Parse the JSON downloads feed: an array of objects with a `version` field.
pub fn parse_json_feed(body: &str) -> Result<Vec<String>> {
    let releases: Vec<Release> =
        serde_json::from_str(body).context("Failed to parse version feed as JSON")?;
    Ok(releases
        .into_iter()
        .map(|r| r.version)
        .filter(|v| !v.is_empty())
        .collect())
}

/// Parse a plaintext feed: one version per line.
///
/// Lines not starting with `go` (such as the `time ...` trailer) are ignored.
pub fn parse_text_feed(body: &str) -> Vec<String> {
    body.lines()
        .map(str::trim)
        .filter(|line| line.starts_with("go"))
        .map(String::from)
        .collect()
}
