//! Visual theme and styling.

use console::Style;

/// Colors for the report.
#[derive(Debug, Clone)]
pub struct DoctorTheme {
    /// Style for passing checks (bright green).
    pub pass: Style,
    /// Style for failed required checks (red).
    pub fail: Style,
    /// Style for failed optional checks (yellow).
    pub warning: Style,
    /// Style for remediation text (normal).
    pub remediation: Style,
}

impl Default for DoctorTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl DoctorTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            pass: Style::new().green().bright(),
            fail: Style::new().red(),
            warning: Style::new().yellow(),
            remediation: Style::new(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            pass: Style::new(),
            fail: Style::new(),
            warning: Style::new(),
            remediation: Style::new(),
        }
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}
