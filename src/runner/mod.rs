//! Check registry and runner.
//!
//! The [`Runner`] holds an ordered list of required checks and an ordered
//! list of optional checks, probes them one at a time in that order, renders
//! each non-skipped result, and folds failures of required checks into the
//! process exit status.
//!
//! # Example
//!
//! ```
//! use godoctor::checks::VsCodeCheck;
//! use godoctor::host::MockHost;
//! use godoctor::runner::Runner;
//! use godoctor::ui::MockUI;
//!
//! // VS Code is not installed on this host, so the check is skipped.
//! let mut runner = Runner::new().optional(VsCodeCheck::new());
//! let mut ui = MockUI::new();
//! let report = runner.run(&MockHost::new(), &mut ui);
//!
//! assert_eq!(report.exit_code(), 0);
//! assert!(ui.lines().is_empty());
//! ```

use crate::checks::{CgoCheck, Check, CheckOutcome, GoCheck, PathCheck, VimCheck, VsCodeCheck};
use crate::config::DoctorConfig;
use crate::host::Host;
use crate::ui::{StatusKind, UserInterface};

/// What happened to one check during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckRecord {
    /// Check identifier.
    pub name: &'static str,
    /// Whether a failure fails the run.
    pub required: bool,
    /// Probe result.
    pub outcome: CheckOutcome,
}

/// Outcome of a whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// One record per check, in run order, skipped checks included.
    pub records: Vec<CheckRecord>,
    /// Number of required checks that failed.
    pub failures: usize,
}

impl RunReport {
    /// Process exit status: 1 if any required check failed, else 0.
    pub fn exit_code(&self) -> u8 {
        if self.failures > 0 {
            1
        } else {
            0
        }
    }

    /// Outcome of the named check, if it ran.
    pub fn outcome(&self, name: &str) -> Option<CheckOutcome> {
        self.records
            .iter()
            .find(|r| r.name == name)
            .map(|r| r.outcome)
    }
}

/// Runs required and optional checks in order.
#[derive(Default)]
pub struct Runner {
    required: Vec<Box<dyn Check>>,
    optional: Vec<Box<dyn Check>>,
}

impl Runner {
    /// Create an empty runner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the standard check suite for `config`.
    ///
    /// Required: Go toolchain, then `$GOPATH/bin` on `$PATH`. Optional: the
    /// C compiler unless cgo is ignored, then Vim and VS Code unless editors
    /// are ignored.
    pub fn from_config(config: &DoctorConfig) -> Self {
        let mut runner = Self::new()
            .require(GoCheck::new(config.versions.clone()))
            .require(PathCheck::new());

        if !config.ignore_cgo {
            runner = runner.optional(CgoCheck::new());
        }
        if !config.ignore_editors {
            runner = runner.optional(VimCheck::new()).optional(VsCodeCheck::new());
        }
        runner
    }

    /// Append a required check.
    pub fn require(mut self, check: impl Check + 'static) -> Self {
        self.required.push(Box::new(check));
        self
    }

    /// Append an optional check.
    pub fn optional(mut self, check: impl Check + 'static) -> Self {
        self.optional.push(Box::new(check));
        self
    }

    /// Names of the registered checks as (required, optional).
    pub fn check_names(&self) -> (Vec<&'static str>, Vec<&'static str>) {
        (
            self.required.iter().map(|c| c.name()).collect(),
            self.optional.iter().map(|c| c.name()).collect(),
        )
    }

    /// Probe every check in order, reporting through `ui`.
    pub fn run(&mut self, host: &dyn Host, ui: &mut dyn UserInterface) -> RunReport {
        let mut report = RunReport::default();

        for check in self.required.iter_mut() {
            let record = run_check(check.as_mut(), true, host, ui);
            if record.outcome.is_failure() {
                report.failures += 1;
            }
            report.records.push(record);
        }
        for check in self.optional.iter_mut() {
            report
                .records
                .push(run_check(check.as_mut(), false, host, ui));
        }

        tracing::debug!(
            "{} checks run, {} required failures",
            report.records.len(),
            report.failures
        );
        report
    }
}

fn run_check(
    check: &mut dyn Check,
    required: bool,
    host: &dyn Host,
    ui: &mut dyn UserInterface,
) -> CheckRecord {
    let outcome = check.probe(host);
    tracing::debug!(
        "{}: passed={} skipped={}",
        check.name(),
        outcome.passed,
        outcome.skipped
    );

    if !outcome.skipped {
        ui.status(
            StatusKind::for_result(outcome.passed, required),
            &check.describe(),
        );
        if !outcome.passed {
            ui.remediation(&check.explain());
        }
    }

    CheckRecord {
        name: check.name(),
        required,
        outcome,
    }
}
