//! Vim Go plugin.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::host::{home_dir, Host};

use super::{Check, CheckOutcome};

/// Substring that identifies the plugin in a path under `~/.vim`.
const PLUGIN_MARKER: &str = "vim-go";

/// Checks that vim-go is installed under `~/.vim`.
///
/// The walk is best effort: an unreadable entry ends it quietly and the
/// plugin counts as missing. A very large `~/.vim` is walked in full before
/// the check gives up.
#[derive(Debug, Default)]
pub struct VimCheck {
    error: Option<io::Error>,
}

impl VimCheck {
    /// Create a new Vim plugin check.
    pub fn new() -> Self {
        Self::default()
    }

    fn plugin_dir(host: &dyn Host) -> io::Result<PathBuf> {
        let vim_dir = home_dir(host).join(".vim");
        let meta = fs::symlink_metadata(&vim_dir)?;
        if !meta.file_type().is_symlink() {
            return Ok(vim_dir);
        }

        // One level only; a relative target is relative to the link's directory.
        let target = fs::read_link(&vim_dir)?;
        Ok(match vim_dir.parent() {
            Some(parent) if target.is_relative() => parent.join(target),
            _ => target,
        })
    }
}

impl Check for VimCheck {
    fn name(&self) -> &'static str {
        "vim"
    }

    fn probe(&mut self, host: &dyn Host) -> CheckOutcome {
        self.error = None;
        if !host.has_program("vim") {
            return CheckOutcome::skip();
        }

        match Self::plugin_dir(host) {
            Ok(dir) => CheckOutcome::from_bool(contains_marker(&dir, PLUGIN_MARKER)),
            Err(e) => {
                tracing::debug!("cannot inspect ~/.vim: {}", e);
                self.error = Some(e);
                CheckOutcome::fail()
            }
        }
    }

    fn describe(&self) -> String {
        "Vim Go plugin".to_string()
    }

    fn explain(&self) -> String {
        let mut msg = String::from("Vim is installed but cannot determine the Go plugin status.\n");
        if let Some(e) = &self.error {
            msg.push_str(&format!("Error: {}\n", e));
        }
        msg + "See https://github.com/fatih/vim-go to install."
    }
}

/// Walk `root` and report whether any path contains `marker`.
///
/// Entries are visited in file name order. Stops at the first match. A walk
/// error stops the walk and counts as not found.
fn contains_marker(root: &Path, marker: &str) -> bool {
    for entry in WalkDir::new(root).sort_by_file_name() {
        match entry {
            Ok(entry) => {
                if entry.path().to_string_lossy().contains(marker) {
                    tracing::debug!("found {} at {}", marker, entry.path().display());
                    return true;
                }
            }
            Err(e) => {
                tracing::debug!("walk of {} stopped: {}", root.display(), e);
                return false;
            }
        }
    }
    false
}
