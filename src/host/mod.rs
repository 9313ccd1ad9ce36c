//! The machine under inspection.
//!
//! Checks reach the operating system only through the [`Host`] trait:
//! process execution, search path lookup, environment variables, and the
//! user account database. [`SystemHost`] talks to the real machine;
//! [`MockHost`] is scripted for tests.
//!
//! Filesystem probes (stat, readlink, directory walks) are done directly
//! by the checks on paths derived from the host, so tests point them at a
//! temporary directory instead.

pub mod mock;
pub mod system;

pub use mock::MockHost;
pub use system::SystemHost;

use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::Result;
use crate::shell::{CommandOutput, Platform};

/// Narrow interface over the OS facilities the checks consume.
pub trait Host {
    /// Locate an executable on the search path.
    fn lookup(&self, program: &str) -> Result<PathBuf>;

    /// Run a program to completion, capturing combined stdout and stderr.
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput>;

    /// Stream a program's stdout until `on_line` returns `true`.
    fn scan_stdout(
        &self,
        program: &str,
        args: &[&str],
        on_line: &mut dyn FnMut(&str) -> bool,
    ) -> Result<bool>;

    /// Read an environment variable.
    fn var_os(&self, key: &str) -> Option<OsString>;

    /// Home directory according to the user account database.
    fn user_home(&self) -> Option<PathBuf>;

    /// Operating system family.
    fn platform(&self) -> Platform;

    /// Whether `program` is on the search path.
    fn has_program(&self, program: &str) -> bool {
        self.lookup(program).is_ok()
    }
}

/// Resolve the user's home directory.
///
/// `$HOME` wins when set and non-empty, then the user account database,
/// then the empty path.
pub fn home_dir(host: &dyn Host) -> PathBuf {
    match host.var_os("HOME") {
        Some(home) if !home.is_empty() => PathBuf::from(home),
        _ => host.user_home().unwrap_or_default(),
    }
}

/// Parse the host's `PATH` into a list of directories.
pub fn search_path(host: &dyn Host) -> Vec<PathBuf> {
    host.var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_prefers_env_var() {
        let host = MockHost::new()
            .with_var("HOME", "/home/env")
            .with_user_home("/home/passwd");
        assert_eq!(home_dir(&host), PathBuf::from("/home/env"));
    }

    #[test]
    fn home_falls_back_to_account_database() {
        let host = MockHost::new().with_user_home("/home/passwd");
        assert_eq!(home_dir(&host), PathBuf::from("/home/passwd"));
    }

    #[test]
    fn empty_home_var_is_ignored() {
        let host = MockHost::new()
            .with_var("HOME", "")
            .with_user_home("/home/passwd");
        assert_eq!(home_dir(&host), PathBuf::from("/home/passwd"));
    }

    #[test]
    fn home_is_empty_when_unknown() {
        let host = MockHost::new();
        assert_eq!(home_dir(&host), PathBuf::new());
    }

    #[cfg(unix)]
    #[test]
    fn search_path_splits_entries() {
        let host = MockHost::new().with_var("PATH", "/usr/bin:/home/u/go/bin");
        assert_eq!(
            search_path(&host),
            vec![PathBuf::from("/usr/bin"), PathBuf::from("/home/u/go/bin")]
        );
    }

    #[test]
    fn search_path_empty_without_var() {
        assert!(search_path(&MockHost::new()).is_empty());
    }
}
