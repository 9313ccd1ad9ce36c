//! Error types for godoctor operations.
//!
//! This module defines [`DoctorError`], the error type produced by the host
//! collaborators (process execution, search path lookup, version feeds), and
//! a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Checks never propagate a `DoctorError`; they store it and surface it
//!   through their remediation text
//! - `anyhow` context stays inside the version feed code and is flattened
//!   into [`DoctorError::VersionFeed`]
//! - All errors should read well when embedded in a remediation message

use thiserror::Error;

/// Core error type for godoctor operations.
#[derive(Debug, Error)]
pub enum DoctorError {
    /// Executable is not on the search path.
    #[error("executable \"{command}\" not found in $PATH")]
    CommandNotFound { command: String },

    /// Command ran but exited unsuccessfully.
    #[error("command failed with exit code {code:?}: {command}")]
    CommandFailed {
        command: String,
        code: Option<i32>,
        output: String,
    },

    /// Command output did not have the expected shape.
    #[error("unexpected output from {command}: {output:?}")]
    UnexpectedOutput { command: String, output: String },

    /// Supported-version feed could not be fetched or parsed.
    #[error("cannot read supported Go versions from {url}: {message}")]
    VersionFeed { url: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for godoctor operations.
pub type Result<T> = std::result::Result<T, DoctorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_not_found_displays_command() {
        let err = DoctorError::CommandNotFound {
            command: "go".into(),
        };
        assert_eq!(err.to_string(), "executable \"go\" not found in $PATH");
    }

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = DoctorError::CommandFailed {
            command: "go env GOPATH".into(),
            code: Some(2),
            output: "go: unknown".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("go env GOPATH"));
        assert!(msg.contains('2'));
    }

    #[test]
    fn unexpected_output_displays_output() {
        let err = DoctorError::UnexpectedOutput {
            command: "go version".into(),
            output: "garbage".into(),
        };
        assert!(err.to_string().contains("garbage"));
    }

    #[test]
    fn version_feed_displays_url_and_message() {
        let err = DoctorError::VersionFeed {
            url: "https://golang.org/dl/?mode=json".into(),
            message: "HTTP 500".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("golang.org/dl"));
        assert!(msg.contains("HTTP 500"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: DoctorError = io_err.into();
        assert!(matches!(err, DoctorError::Io(_)));
    }
}
