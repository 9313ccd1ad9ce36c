//! Terminal output.

use console::Term;
use std::io::Write;

use super::{indent, should_use_colors, DoctorTheme, StatusKind, UserInterface};

/// Writes the report to stdout.
pub struct TerminalUI {
    term: Term,
    theme: DoctorTheme,
}

impl TerminalUI {
    /// Create a terminal UI; `color` is further gated on TTY and `NO_COLOR`.
    pub fn new(color: bool) -> Self {
        let theme = if color && should_use_colors() {
            DoctorTheme::new()
        } else {
            DoctorTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
        }
    }
}

impl UserInterface for TerminalUI {
    fn status(&mut self, kind: StatusKind, summary: &str) {
        writeln!(self.term, "{}", kind.format(&self.theme, summary)).ok();
    }

    fn remediation(&mut self, text: &str) {
        for line in indent(text) {
            writeln!(self.term, "{}", self.theme.remediation.apply_to(line)).ok();
        }
    }
}
