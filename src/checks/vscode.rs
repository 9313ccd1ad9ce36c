//! VS Code Go extension.

use crate::host::Host;

use super::{Check, CheckOutcome};

/// Identifier `code --list-extensions` prints for the Go extension.
pub const GO_EXTENSION_ID: &str = "ms-vscode.Go";

/// Where the WSL remote server keeps its extensions.
const WSL_EXTENSIONS_DIR: &str = "~/.vscode-server/extensions";

/// Checks that the VS Code Go extension is installed.
///
/// `code --list-extensions` can keep running for a while after printing the
/// list, so its output is streamed and the child is dropped at the first
/// match. Nothing bounds the wait if it never prints the extension and never
/// exits.
#[derive(Debug)]
pub struct VsCodeCheck {
    extension_id: String,
}

impl Default for VsCodeCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl VsCodeCheck {
    /// Create a check for the Go extension.
    pub fn new() -> Self {
        Self {
            extension_id: GO_EXTENSION_ID.to_string(),
        }
    }

    fn listed_by_code(&self, host: &dyn Host) -> bool {
        host.scan_stdout("code", &["--list-extensions"], &mut |line| {
            line == self.extension_id
        })
        .unwrap_or_else(|e| {
            tracing::debug!("cannot list VS Code extensions: {}", e);
            false
        })
    }

    /// On Windows the extension may live in the WSL remote server instead,
    /// under a versioned directory such as `ms-vscode.go-0.14.1`.
    fn installed_in_wsl(&self, host: &dyn Host) -> bool {
        let needle = self.extension_id.to_lowercase();
        host.scan_stdout("wsl", &["ls", WSL_EXTENSIONS_DIR], &mut |line| {
            line.to_lowercase().contains(&needle)
        })
        .unwrap_or_else(|e| {
            tracing::debug!("cannot list WSL extensions: {}", e);
            false
        })
    }
}

impl Check for VsCodeCheck {
    fn name(&self) -> &'static str {
        "vscode"
    }

    fn probe(&mut self, host: &dyn Host) -> CheckOutcome {
        if !host.has_program("code") {
            return CheckOutcome::skip();
        }

        if self.listed_by_code(host) {
            return CheckOutcome::pass();
        }
        if host.platform().is_windows() {
            return CheckOutcome::from_bool(self.installed_in_wsl(host));
        }
        CheckOutcome::fail()
    }

    fn describe(&self) -> String {
        "VSCode Go extension".to_string()
    }

    fn explain(&self) -> String {
        "VSCode Go extension is not installed.\n\
         See https://code.visualstudio.com/docs/languages/go to install."
            .to_string()
    }
}
