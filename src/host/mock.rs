//! Scripted host for testing.
//!
//! `MockHost` implements the [`Host`] trait from canned data: which
//! programs are installed, what each command prints, and the environment.
//! Every command invocation is recorded for later assertion.
//!
//! # Example
//!
//! ```
//! use godoctor::host::{Host, MockHost};
//! use godoctor::shell::CommandOutput;
//!
//! let host = MockHost::new()
//!     .with_program("go")
//!     .with_output("go", &["env", "GOPATH"], CommandOutput::success("/home/u/go"));
//!
//! let out = host.run("go", &["env", "GOPATH"]).unwrap();
//! assert_eq!(out.output, "/home/u/go");
//! assert_eq!(host.calls(), vec!["go env GOPATH".to_string()]);
//! ```

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::{DoctorError, Result};
use crate::shell::{display_command, CommandOutput, Platform};

use super::Host;

/// Mock host implementation for testing.
#[derive(Debug)]
pub struct MockHost {
    programs: HashSet<String>,
    outputs: HashMap<String, CommandOutput>,
    launch_errors: HashMap<String, String>,
    vars: HashMap<String, OsString>,
    user_home: Option<PathBuf>,
    platform: Platform,
    calls: RefCell<Vec<String>>,
}

impl Default for MockHost {
    fn default() -> Self {
        Self::new()
    }
}

impl MockHost {
    /// Create a host with nothing installed and an empty environment.
    pub fn new() -> Self {
        Self {
            programs: HashSet::new(),
            outputs: HashMap::new(),
            launch_errors: HashMap::new(),
            vars: HashMap::new(),
            user_home: None,
            platform: Platform::Linux,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Put a program on the search path.
    pub fn with_program(mut self, program: &str) -> Self {
        self.programs.insert(program.to_string());
        self
    }

    /// Script the result of running `program` with `args`.
    ///
    /// Scripting a command does not install the program; combine with
    /// [`with_program`](Self::with_program) where the check looks it up.
    pub fn with_output(mut self, program: &str, args: &[&str], output: CommandOutput) -> Self {
        self.outputs.insert(display_command(program, args), output);
        self
    }

    /// Make running `program` with `args` fail to launch.
    pub fn with_launch_error(mut self, program: &str, args: &[&str], message: &str) -> Self {
        self.launch_errors
            .insert(display_command(program, args), message.to_string());
        self
    }

    /// Set an environment variable.
    pub fn with_var(mut self, key: &str, value: impl Into<OsString>) -> Self {
        self.vars.insert(key.to_string(), value.into());
        self
    }

    /// Set the home directory reported by the account database.
    pub fn with_user_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.user_home = Some(home.into());
        self
    }

    /// Set the reported platform.
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Commands run so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn respond(&self, program: &str, args: &[&str]) -> Result<CommandOutput> {
        let command = display_command(program, args);
        self.calls.borrow_mut().push(command.clone());

        if let Some(message) = self.launch_errors.get(&command) {
            return Err(DoctorError::Io(std::io::Error::other(message.clone())));
        }
        if let Some(output) = self.outputs.get(&command) {
            return Ok(output.clone());
        }
        if self.programs.contains(program) {
            return Err(DoctorError::Io(std::io::Error::other(format!(
                "no scripted output for {}",
                command
            ))));
        }
        Err(DoctorError::CommandNotFound {
            command: program.to_string(),
        })
    }
}

impl Host for MockHost {
    fn lookup(&self, program: &str) -> Result<PathBuf> {
        if self.programs.contains(program) {
            Ok(PathBuf::from("/mock/bin").join(program))
        } else {
            Err(DoctorError::CommandNotFound {
                command: program.to_string(),
            })
        }
    }

    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput> {
        self.respond(program, args)
    }

    fn scan_stdout(
        &self,
        program: &str,
        args: &[&str],
        on_line: &mut dyn FnMut(&str) -> bool,
    ) -> Result<bool> {
        let output = self.respond(program, args)?;
        Ok(output.output.lines().any(|line| on_line(line)))
    }

    fn var_os(&self, key: &str) -> Option<OsString> {
        self.vars.get(key).cloned()
    }

    fn user_home(&self) -> Option<PathBuf> {
        self.user_home.clone()
    }

    fn platform(&self) -> Platform {
        self.platform
    }
}
