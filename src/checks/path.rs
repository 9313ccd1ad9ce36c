//! `$GOPATH/bin` membership in `$PATH`.

use std::path::{Component, Path, PathBuf};

use crate::error::{DoctorError, Result};
use crate::host::{search_path, Host};
use crate::shell::Platform;

use super::{Check, CheckOutcome};

/// Checks that the directory `go install` writes binaries to is on `$PATH`.
#[derive(Debug)]
pub struct PathCheck {
    gopath_bin: Option<PathBuf>,
    platform: Platform,
    error: Option<DoctorError>,
}

impl Default for PathCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl PathCheck {
    /// Create a new PATH check.
    pub fn new() -> Self {
        Self {
            gopath_bin: None,
            platform: Platform::current(),
            error: None,
        }
    }

    /// Expected binary directory found by the last probe.
    pub fn gopath_bin(&self) -> Option<&Path> {
        self.gopath_bin.as_deref()
    }

    fn resolve_bin(host: &dyn Host) -> Result<PathBuf> {
        let output = host
            .run("go", &["env", "GOPATH"])?
            .into_result("go env GOPATH")?;
        // GOPATH may be a list; `go install` uses the first entry.
        let first = std::env::split_paths(&output)
            .find(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| DoctorError::UnexpectedOutput {
                command: "go env GOPATH".to_string(),
                output: output.clone(),
            })?;
        Ok(clean_path(&first.join("bin")))
    }
}

impl Check for PathCheck {
    fn name(&self) -> &'static str {
        "path"
    }

    fn probe(&mut self, host: &dyn Host) -> CheckOutcome {
        self.platform = host.platform();
        self.gopath_bin = None;
        self.error = None;

        let bin = match Self::resolve_bin(host) {
            Ok(bin) => bin,
            Err(e) => {
                tracing::debug!("cannot resolve GOPATH: {}", e);
                self.error = Some(e);
                return CheckOutcome::fail();
            }
        };

        let found = search_path(host)
            .iter()
            .any(|entry| clean_path(entry) == bin);
        tracing::debug!("{} on PATH: {}", bin.display(), found);
        self.gopath_bin = Some(bin);
        CheckOutcome::from_bool(found)
    }

    fn describe(&self) -> String {
        match &self.gopath_bin {
            Some(bin) => format!("Checking if $PATH contains \"{}\"", bin.display()),
            None => "Checking if $PATH contains $GOPATH/bin".to_string(),
        }
    }

    fn explain(&self) -> String {
        if let Some(e) = &self.error {
            return format!(
                "Cannot determine GOPATH: {}.\nMake sure Go is installed and \"go env GOPATH\" works.",
                e
            );
        }

        let bin = self
            .gopath_bin
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        match self.platform {
            Platform::Windows => format!(
                "Add \"{bin}\" to your %PATH%.\nOn Windows:\nsetx PATH \"%PATH%;{bin}\""
            ),
            Platform::MacOS | Platform::Linux => {
                format!("Add \"{bin}\" to your $PATH.\nOn Unix systems:\nexport PATH=$PATH:{bin}")
            }
        }
    }
}

/// Lexically normalize a path: drop `.` components, resolve `..` against
/// preceding components, and collapse repeated or trailing separators.
///
/// The filesystem is never consulted, so symlinks are not resolved. An empty
/// result becomes `.`.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        PathBuf::from(".")
    } else {
        parts.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MockHost;
    use crate::shell::CommandOutput;

    fn host(gopath: &str, path: &str) -> MockHost {
        MockHost::new()
            .with_program("go")
            .with_output("go", &["env", "GOPATH"], CommandOutput::success(gopath))
            .with_var("PATH", path)
    }

    #[cfg(unix)]
    #[test]
    fn passes_when_gopath_bin_on_path() {
        let host = host("/home/u/go", "/usr/bin:/home/u/go/bin");
        let mut check = PathCheck::new();
        assert_eq!(check.probe(&host), CheckOutcome::pass());
        assert_eq!(check.gopath_bin(), Some(Path::new("/home/u/go/bin")));
    }

    #[cfg(unix)]
    #[test]
    fn fails_when_gopath_bin_missing() {
        let host = host("/home/u/go", "/usr/bin");
        let mut check = PathCheck::new();
        assert_eq!(check.probe(&host), CheckOutcome::fail());
        assert_eq!(check.describe(), "Checking if $PATH contains \"/home/u/go/bin\"");
        assert!(check.explain().contains("export PATH=$PATH:/home/u/go/bin"));
    }

    #[cfg(unix)]
    #[test]
    fn path_entries_are_normalized() {
        let host = host("/home/u/go/", "/usr/bin:/home/u/./go//bin/");
        let mut check = PathCheck::new();
        assert_eq!(check.probe(&host), CheckOutcome::pass());
    }

    #[cfg(unix)]
    #[test]
    fn uses_first_gopath_entry() {
        let host = host("/home/u/go:/opt/go", "/opt/go/bin");
        let mut check = PathCheck::new();
        assert_eq!(check.probe(&host), CheckOutcome::fail());
        assert_eq!(check.gopath_bin(), Some(Path::new("/home/u/go/bin")));
    }

    #[cfg(unix)]
    #[test]
    fn windows_remediation_uses_setx() {
        let host = host("/home/u/go", "/usr/bin").with_platform(Platform::Windows);
        let mut check = PathCheck::new();
        check.probe(&host);
        assert!(check.explain().contains("setx PATH"));
    }

    #[test]
    fn missing_go_fails_with_error() {
        let host = MockHost::new().with_var("PATH", "");
        let mut check = PathCheck::new();
        assert_eq!(check.probe(&host), CheckOutcome::fail());
        assert!(check.explain().starts_with("Cannot determine GOPATH"));
        assert_eq!(check.describe(), "Checking if $PATH contains $GOPATH/bin");
    }

    #[test]
    fn empty_gopath_is_unexpected() {
        let host = host("", "");
        let mut check = PathCheck::new();
        assert_eq!(check.probe(&host), CheckOutcome::fail());
        assert!(check.explain().contains("unexpected output"));
    }

    #[cfg(unix)]
    #[test]
    fn clean_path_normalizes_lexically() {
        assert_eq!(clean_path(Path::new("/a/./b//c/")), PathBuf::from("/a/b/c"));
        assert_eq!(clean_path(Path::new("/a/b/../c")), PathBuf::from("/a/c"));
        assert_eq!(clean_path(Path::new("/../a")), PathBuf::from("/a"));
        assert_eq!(clean_path(Path::new("../a")), PathBuf::from("../a"));
        assert_eq!(clean_path(Path::new("")), PathBuf::from("."));
        assert_eq!(clean_path(Path::new("a/..")), PathBuf::from("."));
    }
}
