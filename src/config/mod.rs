//! Run configuration.
//!
//! [`DoctorConfig`] is everything that shapes a run, built once from the
//! parsed command line (including its `GODOCTOR_*` environment fallbacks)
//! and handed to the runner. There are no process-wide flags.
//!
//! # Example
//!
//! ```
//! use clap::Parser;
//! use godoctor::cli::Cli;
//! use godoctor::config::DoctorConfig;
//! use godoctor::versions::VersionSource;
//!
//! let cli = Cli::parse_from(["godoctor", "--ignore-cgo", "--versions", "static"]);
//! let config = DoctorConfig::from(&cli);
//! assert!(config.ignore_cgo);
//! assert!(!config.ignore_editors);
//! assert_eq!(config.versions, VersionSource::builtin());
//! ```

use crate::cli::Cli;
use crate::versions::VersionSource;

/// Settings for one diagnostic run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctorConfig {
    /// Skip the C compiler check.
    pub ignore_cgo: bool,
    /// Skip the Vim and VS Code checks.
    pub ignore_editors: bool,
    /// Where supported Go versions come from.
    pub versions: VersionSource,
    /// Whether to style output with colors.
    pub color: bool,
}

impl Default for DoctorConfig {
    fn default() -> Self {
        Self {
            ignore_cgo: false,
            ignore_editors: false,
            versions: VersionSource::default(),
            color: true,
        }
    }
}

impl From<&Cli> for DoctorConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            ignore_cgo: cli.ignore_cgo,
            ignore_editors: cli.ignore_editors,
            versions: VersionSource::from_parts(
                cli.versions,
                cli.versions_url.clone(),
                cli.supported.clone(),
            ),
            color: !cli.no_color,
        }
    }
}
