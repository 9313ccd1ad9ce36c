//! Sources for the list of supported Go versions.
//!
//! The list can be a static set baked into the binary, the JSON downloads
//! feed, or a plaintext feed. None of these is authoritative, so the source
//! is chosen by configuration ([`VersionSource`]) and anything implementing
//! [`VersionProvider`] can stand in for it.

pub mod feed;

use std::fmt;
use std::time::Duration;

use crate::error::{DoctorError, Result};
use feed::{parse_json_feed, parse_text_feed, FeedFetcher};

/// Default JSON downloads feed.
pub const DEFAULT_JSON_FEED: &str = "https://golang.org/dl/?mode=json";

/// Default plaintext feed.
pub const DEFAULT_TEXT_FEED: &str = "https://go.dev/VERSION?m=text";

/// Versions accepted by the static source unless overridden.
pub const DEFAULT_SUPPORTED: &[&str] = &["go1.12.14", "go1.13.5", "go1.14beta1"];

const FEED_TIMEOUT: Duration = Duration::from_secs(10);

/// Anything that can produce the supported-version set.
pub trait VersionProvider {
    /// Return the supported versions, e.g. `["go1.14", "go1.13.8"]`.
    fn supported_versions(&self) -> Result<Vec<String>>;
}

/// Which kind of source to read, as selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SourceKind {
    /// Built-in list (or `--supported` values).
    Static,
    /// JSON downloads feed.
    #[default]
    Json,
    /// Plaintext feed, one version per line.
    Text,
}

/// A configured supported-version source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionSource {
    /// Fixed list.
    Static(Vec<String>),
    /// JSON array of `{"version": ...}` objects at a URL.
    JsonFeed { url: String },
    /// Plaintext list at a URL.
    TextFeed { url: String },
}

impl Default for VersionSource {
    fn default() -> Self {
        Self::JsonFeed {
            url: DEFAULT_JSON_FEED.to_string(),
        }
    }
}

impl VersionSource {
    /// The built-in static list.
    pub fn builtin() -> Self {
        Self::Static(DEFAULT_SUPPORTED.iter().map(|v| v.to_string()).collect())
    }

    /// Build a source from its kind, an optional URL override, and an
    /// optional static list override.
    ///
    /// A non-empty `supported` list always yields a static source, whatever
    /// `kind` says.
    pub fn from_parts(kind: SourceKind, url: Option<String>, supported: Vec<String>) -> Self {
        if !supported.is_empty() {
            return Self::Static(supported);
        }
        match kind {
            SourceKind::Static => {
                if let Some(url) = url {
                    tracing::warn!("ignoring version feed URL {} for the static source", url);
                }
                Self::builtin()
            }
            SourceKind::Json => Self::JsonFeed {
                url: url.unwrap_or_else(|| DEFAULT_JSON_FEED.to_string()),
            },
            SourceKind::Text => Self::TextFeed {
                url: url.unwrap_or_else(|| DEFAULT_TEXT_FEED.to_string()),
            },
        }
    }

    fn fetch_feed(
        url: &str,
        parse: fn(&str) -> anyhow::Result<Vec<String>>,
    ) -> Result<Vec<String>> {
        let versions = FeedFetcher::new(FEED_TIMEOUT)
            .and_then(|fetcher| fetcher.fetch(url))
            .and_then(|body| parse(&body))
            .map_err(|e| DoctorError::VersionFeed {
                url: url.to_string(),
                message: format!("{:#}", e),
            })?;
        tracing::debug!("{} lists {} versions", url, versions.len());
        Ok(versions)
    }
}

impl VersionProvider for VersionSource {
    fn supported_versions(&self) -> Result<Vec<String>> {
        match self {
            Self::Static(versions) => Ok(versions.clone()),
            Self::JsonFeed { url } => Self::fetch_feed(url, parse_json_feed),
            Self::TextFeed { url } => Self::fetch_feed(url, |body| Ok(parse_text_feed(body))),
        }
    }
}

impl fmt::Display for VersionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(versions) => write!(f, "static list ({})", versions.join(", ")),
            Self::JsonFeed { url } => write!(f, "JSON feed {}", url),
            Self::TextFeed { url } => write!(f, "text feed {}", url),
        }
    }
}
