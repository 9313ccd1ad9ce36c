//! Status glyphs for check results.

use super::theme::DoctorTheme;

/// How a reported check turned out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Check passed.
    Pass,
    /// Required check failed.
    Fail,
    /// Optional check failed.
    Warning,
}

impl StatusKind {
    /// Pick the kind for a non-skipped check.
    pub fn for_result(passed: bool, required: bool) -> Self {
        match (passed, required) {
            (true, _) => Self::Pass,
            (false, true) => Self::Fail,
            (false, false) => Self::Warning,
        }
    }

    /// Bracketed glyph.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Pass => "[✔]",
            Self::Fail => "[✗]",
            Self::Warning => "[!]",
        }
    }

    /// Styled glyph using the given theme.
    pub fn styled(self, theme: &DoctorTheme) -> String {
        let glyph = self.glyph();
        match self {
            Self::Pass => theme.pass.apply_to(glyph).to_string(),
            Self::Fail => theme.fail.apply_to(glyph).to_string(),
            Self::Warning => theme.warning.apply_to(glyph).to_string(),
        }
    }

    /// Format a status line: styled glyph + summary.
    pub fn format(self, theme: &DoctorTheme, summary: &str) -> String {
        format!("{} {}", self.styled(theme), summary)
    }
}
