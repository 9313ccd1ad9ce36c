//! Process execution.
//!
//! Checks never go through a shell: every probe runs a program directly with
//! a fixed argument list, so quoting never comes into play.

use crate::error::{DoctorError, Result};
use std::io::{BufRead, BufReader, ErrorKind};
use std::process::{Command, Stdio};

/// Result of running a program to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Stdout followed by stderr, whitespace-trimmed.
    pub output: String,
}

impl CommandOutput {
    /// Create a successful result.
    pub fn success(output: impl Into<String>) -> Self {
        Self {
            exit_code: Some(0),
            output: output.into(),
        }
    }

    /// Create a failed result.
    pub fn failure(exit_code: Option<i32>, output: impl Into<String>) -> Self {
        Self {
            exit_code,
            output: output.into(),
        }
    }

    /// Whether the program exited with status 0.
    pub fn succeeded(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Convert into the output text, or an error if the program failed.
    pub fn into_result(self, command: &str) -> Result<String> {
        if self.succeeded() {
            Ok(self.output)
        } else {
            Err(DoctorError::CommandFailed {
                command: command.to_string(),
                code: self.exit_code,
                output: self.output,
            })
        }
    }
}

/// Render a program and its arguments for messages and logs.
pub fn display_command(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}

/// Run a program to completion and capture its combined output.
///
/// Only failure to launch is an error; a non-zero exit is reported through
/// [`CommandOutput::exit_code`].
pub fn run_combined(program: &str, args: &[&str]) -> Result<CommandOutput> {
    let command = display_command(program, args);
    tracing::debug!("running {}", command);

    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| spawn_error(program, e))?;

    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));

    let result = CommandOutput {
        exit_code: output.status.code(),
        output: combined.trim().to_string(),
    };
    tracing::trace!("{} exited with {:?}", command, result.exit_code);
    Ok(result)
}

/// Stream a program's stdout line by line until `on_line` returns `true`.
///
/// Returns `Ok(true)` as soon as a line matches; the child is then killed,
/// since some tools keep running long after printing what we need. Returns
/// `Ok(false)` when stdout ends without a match.
///
/// There is no timeout: a child that never closes stdout blocks the caller.
pub fn scan_stdout(
    program: &str,
    args: &[&str],
    on_line: &mut dyn FnMut(&str) -> bool,
) -> Result<bool> {
    let command = display_command(program, args);
    tracing::debug!("streaming {}", command);

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| spawn_error(program, e))?;

    let Some(stdout) = child.stdout.take() else {
        child.kill().ok();
        child.wait().ok();
        return Ok(false);
    };

    for line in BufReader::new(stdout).lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                child.kill().ok();
                child.wait().ok();
                return Err(e.into());
            }
        };
        if on_line(&line) {
            tracing::trace!("{} matched line {:?}", command, line);
            child.kill().ok();
            child.wait().ok();
            return Ok(true);
        }
    }

    child.wait()?;
    Ok(false)
}

fn spawn_error(program: &str, err: std::io::Error) -> DoctorError {
    if err.kind() == ErrorKind::NotFound {
        DoctorError::CommandNotFound {
            command: program.to_string(),
        }
    } else {
        DoctorError::Io(err)
    }
}
