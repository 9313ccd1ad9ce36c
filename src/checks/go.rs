//! Go toolchain presence and version.

use crate::error::{DoctorError, Result};
use crate::host::Host;
use crate::versions::{VersionProvider, VersionSource};

use super::{Check, CheckOutcome};

const DOWNLOAD_URL: &str = "https://golang.org/dl/";

/// Checks that `go` is on the search path and reports a supported version.
pub struct GoCheck {
    source: Box<dyn VersionProvider>,
    /// Detected version, e.g. `go1.14`. Available after `probe`.
    version: Option<String>,
    /// Supported versions. Available after `probe`.
    supported: Vec<String>,
    /// Why the probe could not decide. Available after `probe`.
    error: Option<DoctorError>,
}

impl GoCheck {
    /// Create a check reading supported versions from `source`.
    pub fn new(source: impl VersionProvider + 'static) -> Self {
        Self {
            source: Box::new(source),
            version: None,
            supported: Vec::new(),
            error: None,
        }
    }

    /// Version found by the last probe.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    fn detect(&mut self, host: &dyn Host) -> Result<bool> {
        host.lookup("go")?;
        let output = host.run("go", &["version"])?.into_result("go version")?;
        let version = parse_go_version(&output)?;
        tracing::debug!("detected Go {}", version);
        self.version = Some(version.clone());

        self.supported = self.source.supported_versions()?;
        Ok(self.supported.contains(&version))
    }
}

impl Default for GoCheck {
    fn default() -> Self {
        Self::new(VersionSource::default())
    }
}

impl Check for GoCheck {
    fn name(&self) -> &'static str {
        "go"
    }

    fn probe(&mut self, host: &dyn Host) -> CheckOutcome {
        self.version = None;
        self.supported.clear();
        self.error = None;

        match self.detect(host) {
            Ok(supported) => CheckOutcome::from_bool(supported),
            Err(e) => {
                tracing::debug!("go check failed: {}", e);
                self.error = Some(e);
                CheckOutcome::fail()
            }
        }
    }

    fn describe(&self) -> String {
        match &self.version {
            Some(version) => format!("Go ({})", version),
            None => "Go installation".to_string(),
        }
    }

    fn explain(&self) -> String {
        match &self.error {
            Some(e @ DoctorError::VersionFeed { .. }) => format!(
                "Cannot determine the supported Go versions: {}.\n\
                 Visit {} to compare your version with the current releases.",
                e, DOWNLOAD_URL
            ),
            Some(e) => format!(
                "Is Go installed? {}.\nVisit {} to download Go.",
                e, DOWNLOAD_URL
            ),
            None => format!(
                "Your current Go version ({}) is not supported.\n\
                 Supported Go versions are {}.\n\
                 Visit {} for a supported version.",
                self.version.as_deref().unwrap_or("unknown"),
                self.supported.join(", "),
                DOWNLOAD_URL
            ),
        }
    }
}

/// Extract the version from `go version` output.
///
/// The output looks like `go version go1.14 linux/amd64`; the version is the
/// third field.
pub fn parse_go_version(output: &str) -> Result<String> {
    output
        .split_whitespace()
        .nth(2)
        .map(String::from)
        .ok_or_else(|| DoctorError::UnexpectedOutput {
            command: "go version".to_string(),
            output: output.to_string(),
        })
}
