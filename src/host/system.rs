//! The real machine.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::{DoctorError, Result};
use crate::shell::{self, CommandOutput, Platform};

use super::Host;

/// [`Host`] backed by the current process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemHost;

impl SystemHost {
    /// Create a host for the current machine.
    pub fn new() -> Self {
        Self
    }
}

impl Host for SystemHost {
    fn lookup(&self, program: &str) -> Result<PathBuf> {
        let found = which::which(program).map_err(|e| {
            tracing::debug!("{} not on PATH: {}", program, e);
            DoctorError::CommandNotFound {
                command: program.to_string(),
            }
        })?;
        tracing::debug!("{} resolved to {}", program, found.display());
        Ok(found)
    }

    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput> {
        shell::run_combined(program, args)
    }

    fn scan_stdout(
        &self,
        program: &str,
        args: &[&str],
        on_line: &mut dyn FnMut(&str) -> bool,
    ) -> Result<bool> {
        shell::scan_stdout(program, args, on_line)
    }

    fn var_os(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }

    fn user_home(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }

    fn platform(&self) -> Platform {
        Platform::current()
    }
}
