//! Report output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] for writing the report to stdout
//! - [`MockUI`] for capturing the report in tests
//! - [`StatusKind`] glyphs and the [`DoctorTheme`] colors
//!
//! # Example
//!
//! ```
//! use godoctor::ui::{MockUI, StatusKind, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.status(StatusKind::Pass, "Go (go1.14)");
//! assert_eq!(ui.lines(), ["[✔] Go (go1.14)"]);
//! ```

pub mod icons;
pub mod mock;
pub mod terminal;
pub mod theme;

pub use icons::StatusKind;
pub use mock::MockUI;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, DoctorTheme};

/// Indentation applied to every remediation line.
pub const REMEDIATION_INDENT: &str = "    ";

/// Trait for report output.
///
/// This trait allows capturing the report in tests.
pub trait UserInterface {
    /// Show one check result: glyph and summary on one line.
    fn status(&mut self, kind: StatusKind, summary: &str);

    /// Show remediation advice below the last status, indented.
    fn remediation(&mut self, text: &str);
}

/// Prefix each line of `text` with [`REMEDIATION_INDENT`].
pub fn indent(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| format!("{}{}", REMEDIATION_INDENT, line))
        .collect()
}
