//! Diagnostic checks.
//!
//! Every check implements [`Check`]: `probe` inspects the machine through a
//! [`Host`] and returns a [`CheckOutcome`]; `describe` and `explain` render
//! what was found, using whatever the probe recorded.
//!
//! # Modules
//!
//! - [`go`] - Go toolchain presence and version
//! - [`path`] - `$GOPATH/bin` membership in `$PATH`
//! - [`cgo`] - C compiler availability for cgo
//! - [`vim`] - Vim Go plugin
//! - [`vscode`] - VS Code Go extension

pub mod cgo;
pub mod go;
pub mod path;
pub mod vim;
pub mod vscode;

pub use cgo::CgoCheck;
pub use go::GoCheck;
pub use path::PathCheck;
pub use vim::VimCheck;
pub use vscode::VsCodeCheck;

use crate::host::Host;

/// Shared contract of all diagnostics.
pub trait Check {
    /// Stable identifier used in logs and reports.
    fn name(&self) -> &'static str;

    /// Run the diagnostic.
    ///
    /// Must not panic or propagate errors for an absent dependency: absence
    /// of the tool itself is a skip, anything else is a failure with the
    /// cause kept for [`explain`](Check::explain). Probing again starts from
    /// a clean slate.
    fn probe(&mut self, host: &dyn Host) -> CheckOutcome;

    /// One-line summary, possibly using state captured by `probe`.
    fn describe(&self) -> String;

    /// Multi-line remediation advice, meaningful after a failed probe.
    fn explain(&self) -> String;
}

/// Result of probing a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckOutcome {
    /// Whether the condition holds.
    pub passed: bool,
    /// Whether the check does not apply to this machine.
    pub skipped: bool,
}

impl CheckOutcome {
    /// The condition holds.
    pub fn pass() -> Self {
        Self {
            passed: true,
            skipped: false,
        }
    }

    /// The condition does not hold.
    pub fn fail() -> Self {
        Self {
            passed: false,
            skipped: false,
        }
    }

    /// The check does not apply (its tool is not installed).
    pub fn skip() -> Self {
        Self {
            passed: false,
            skipped: true,
        }
    }

    /// Pass or fail depending on `passed`.
    pub fn from_bool(passed: bool) -> Self {
        if passed {
            Self::pass()
        } else {
            Self::fail()
        }
    }

    /// Whether this outcome should be reported as a failure.
    pub fn is_failure(&self) -> bool {
        !self.passed && !self.skipped
    }
}
