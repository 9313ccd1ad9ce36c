//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures everything
//! the runner reports, both as structured entries and as the plain text
//! the terminal would have shown.
//!
//! # Example
//!
//! ```
//! use godoctor::ui::{MockUI, StatusKind, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.status(StatusKind::Fail, "Go installation");
//! ui.remediation("Is Go installed?");
//!
//! assert_eq!(ui.lines(), ["[✗] Go installation", "    Is Go installed?"]);
//! assert!(ui.has_status(StatusKind::Fail, "Go installation"));
//! ```

use super::{indent, StatusKind, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    statuses: Vec<(StatusKind, String)>,
    remediations: Vec<String>,
    lines: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all reported status lines as (kind, summary).
    pub fn statuses(&self) -> &[(StatusKind, String)] {
        &self.statuses
    }

    /// Get all reported remediation texts, unindented.
    pub fn remediations(&self) -> &[String] {
        &self.remediations
    }

    /// Get the rendered output, one entry per line, without colors.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Check if a status with this kind and summary was reported.
    pub fn has_status(&self, kind: StatusKind, summary: &str) -> bool {
        self.statuses
            .iter()
            .any(|(k, s)| *k == kind && s == summary)
    }

    /// Check if any rendered line mentions `text`.
    pub fn mentions(&self, text: &str) -> bool {
        self.lines.iter().any(|l| l.contains(text))
    }
}

impl UserInterface for MockUI {
    fn status(&mut self, kind: StatusKind, summary: &str) {
        self.statuses.push((kind, summary.to_string()));
        self.lines.push(format!("{} {}", kind.glyph(), summary));
    }

    fn remediation(&mut self, text: &str) {
        self.remediations.push(text.to_string());
        self.lines.extend(indent(text));
    }
}
