//! Integration tests for the godoctor binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A command with a scrubbed environment: only the given PATH and HOME.
fn godoctor(path: &std::ffi::OsStr, home: &std::path::Path) -> Command {
    let mut cmd = Command::new(cargo_bin("godoctor"));
    cmd.env_clear()
        .env("PATH", path)
        .env("HOME", home)
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("godoctor"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--ignore-cgo"))
        .stdout(predicate::str::contains("--ignore-editors"))
        .stdout(predicate::str::contains("--versions"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("godoctor"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_rejects_unknown_flag() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("godoctor"));
    cmd.arg("--ignore-everything");
    cmd.assert().code(2);
    Ok(())
}

#[test]
fn cli_rejects_unknown_version_source() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("godoctor"));
    cmd.args(["--versions", "yaml"]);
    cmd.assert().code(2);
    Ok(())
}

#[test]
fn cli_fails_without_go() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let bin = temp.path().join("bin");
    std::fs::create_dir_all(&bin)?;

    let mut cmd = godoctor(bin.as_os_str(), temp.path());
    cmd.args(["--versions", "static", "--ignore-cgo", "--ignore-editors"]);
    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("[✗] Go installation"))
        .stdout(predicate::str::contains("    Is Go installed?"));
    Ok(())
}

#[test]
fn cli_ignored_checks_print_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    let mut cmd = godoctor(temp.path().as_os_str(), temp.path());
    cmd.args(["--versions", "static", "--ignore-cgo", "--ignore-editors"]);
    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("CGO").not())
        .stdout(predicate::str::contains("Vim").not())
        .stdout(predicate::str::contains("VSCode").not());
    Ok(())
}

#[cfg(unix)]
mod fake_go {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};

    /// Install a `go` script that reports `version` and the given GOPATH.
    fn install_go(bin: &Path, version: &str, gopath: &Path) -> std::io::Result<()> {
        let script = format!(
            "#!/bin/sh\nif [ \"$1\" = \"version\" ]; then\n  echo \"go version {} linux/amd64\"\nelse\n  echo \"{}\"\nfi\n",
            version,
            gopath.display()
        );
        let go = bin.join("go");
        fs::write(&go, script)?;
        fs::set_permissions(&go, fs::Permissions::from_mode(0o755))
    }

    fn install_script(bin: &Path, name: &str, body: &str) -> std::io::Result<()> {
        let path = bin.join(name);
        fs::write(&path, format!("#!/bin/sh\n{}\n", body))?;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
    }

    /// Put `vim` and a `code` that lists the Go extension next to `go`.
    fn install_editors(bin: &Path) -> std::io::Result<()> {
        install_script(bin, "vim", "exit 0")?;
        install_script(bin, "code", "echo ms-vscode.Go")
    }

    fn setup(version: &str) -> std::io::Result<(TempDir, PathBuf, PathBuf)> {
        let temp = TempDir::new()?;
        let bin = temp.path().join("bin");
        let gopath = temp.path().join("gopath");
        fs::create_dir_all(&bin)?;
        fs::create_dir_all(gopath.join("bin"))?;
        install_go(&bin, version, &gopath)?;
        Ok((temp, bin, gopath))
    }

    #[test]
    fn cli_passes_on_healthy_setup() -> Result<(), Box<dyn std::error::Error>> {
        let (temp, bin, gopath) = setup("go1.13.5")?;
        let path = std::env::join_paths([bin, gopath.join("bin")])?;

        let mut cmd = godoctor(&path, temp.path());
        cmd.args(["--versions", "static", "--ignore-cgo", "--ignore-editors"]);
        cmd.assert()
            .success()
            .stdout(predicate::str::contains("[✔] Go (go1.13.5)"))
            .stdout(predicate::str::contains("[✔] Checking if $PATH contains"));
        Ok(())
    }

    #[test]
    fn cli_fails_when_gopath_bin_missing_from_path() -> Result<(), Box<dyn std::error::Error>> {
        let (temp, bin, gopath) = setup("go1.13.5")?;

        let mut cmd = godoctor(bin.as_os_str(), temp.path());
        cmd.args(["--versions", "static", "--ignore-cgo", "--ignore-editors"]);
        cmd.assert()
            .code(1)
            .stdout(predicate::str::contains("[✗] Checking if $PATH contains"))
            .stdout(predicate::str::contains(format!(
                "    export PATH=$PATH:{}",
                gopath.join("bin").display()
            )));
        Ok(())
    }

    #[test]
    fn cli_reports_unsupported_version() -> Result<(), Box<dyn std::error::Error>> {
        let (temp, bin, gopath) = setup("go1.9")?;
        let path = std::env::join_paths([bin, gopath.join("bin")])?;

        let mut cmd = godoctor(&path, temp.path());
        cmd.args([
            "--versions",
            "static",
            "--supported",
            "go1.22.1,go1.21.8",
            "--ignore-cgo",
            "--ignore-editors",
        ]);
        cmd.assert()
            .code(1)
            .stdout(predicate::str::contains("[✗] Go (go1.9)"))
            .stdout(predicate::str::contains(
                "Supported Go versions are go1.22.1, go1.21.8.",
            ));
        Ok(())
    }

    #[test]
    fn cli_missing_compiler_is_only_a_warning() -> Result<(), Box<dyn std::error::Error>> {
        let (temp, bin, gopath) = setup("go1.13.5")?;
        let path = std::env::join_paths([bin, gopath.join("bin")])?;

        let mut cmd = godoctor(&path, temp.path());
        cmd.env("CC", "godoctor-missing-cc");
        cmd.args(["--versions", "static", "--ignore-editors"]);
        cmd.assert()
            .success()
            .stdout(predicate::str::contains(
                "[!] Checking godoctor-missing-cc for CGO support",
            ));
        Ok(())
    }

    #[test]
    fn cli_reports_installed_editors() -> Result<(), Box<dyn std::error::Error>> {
        let (temp, bin, gopath) = setup("go1.13.5")?;
        install_editors(&bin)?;
        let path = std::env::join_paths([bin, gopath.join("bin")])?;

        let mut cmd = godoctor(&path, temp.path());
        cmd.args(["--versions", "static", "--ignore-cgo"]);
        cmd.assert()
            .success()
            .stdout(predicate::str::contains("[!] Vim Go plugin"))
            .stdout(predicate::str::contains("[✔] VSCode Go extension"));
        Ok(())
    }

    #[test]
    fn cli_ignore_editors_hides_installed_editors() -> Result<(), Box<dyn std::error::Error>> {
        let (temp, bin, gopath) = setup("go1.13.5")?;
        install_editors(&bin)?;
        let path = std::env::join_paths([bin, gopath.join("bin")])?;

        let mut cmd = godoctor(&path, temp.path());
        cmd.args(["--versions", "static", "--ignore-cgo", "--ignore-editors"]);
        cmd.assert()
            .success()
            .stdout(predicate::str::contains("Vim").not())
            .stdout(predicate::str::contains("VSCode").not())
            .stdout(predicate::str::contains("CGO").not());
        Ok(())
    }
}
