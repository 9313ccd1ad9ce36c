//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;

use crate::versions::SourceKind;

/// godoctor - checks whether this system is properly configured for Go development.
#[derive(Debug, Parser)]
#[command(name = "godoctor")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Skip the C compiler check
    #[arg(long)]
    pub ignore_cgo: bool,

    /// Skip the Vim and VS Code checks
    #[arg(long)]
    pub ignore_editors: bool,

    /// Where to read the supported Go versions from
    #[arg(long, value_enum, env = "GODOCTOR_VERSIONS", default_value_t = SourceKind::Json)]
    pub versions: SourceKind,

    /// URL of the version feed (overrides the default for --versions)
    #[arg(long, env = "GODOCTOR_VERSIONS_URL")]
    pub versions_url: Option<String>,

    /// Supported versions (comma-separated); selects the static source
    #[arg(long, value_delimiter = ',', conflicts_with = "versions_url")]
    pub supported: Vec<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
