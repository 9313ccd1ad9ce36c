//! godoctor - checks whether the current system is properly configured for
//! Go development.
//!
//! A run probes a fixed list of checks: the Go toolchain and its version and
//! `$GOPATH/bin` on `$PATH` are required; a C compiler for cgo and the Vim
//! and VS Code Go plugins are optional. Each result is printed with a
//! status glyph, failures come with remediation advice, and the process
//! exits non-zero only when a required check fails.
//!
//! # Modules
//!
//! - [`checks`] - The check contract and the individual checks
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Run configuration built from the command line
//! - [`error`] - Error types and result aliases
//! - [`host`] - OS collaborators (processes, search path, environment)
//! - [`runner`] - Check registry, execution order, and exit status
//! - [`shell`] - Process execution and platform detection
//! - [`ui`] - Status glyphs, colors, and report output
//! - [`versions`] - Supported Go version sources
//!
//! # Example
//!
//! ```
//! use godoctor::checks::PathCheck;
//! use godoctor::host::MockHost;
//! use godoctor::runner::Runner;
//! use godoctor::shell::CommandOutput;
//! use godoctor::ui::MockUI;
//!
//! let host = MockHost::new()
//!     .with_program("go")
//!     .with_output("go", &["env", "GOPATH"], CommandOutput::success("/home/u/go"))
//!     .with_var("PATH", std::env::join_paths(["/usr/bin"]).unwrap());
//!
//! let mut runner = Runner::new().require(PathCheck::new());
//! let mut ui = MockUI::new();
//! let report = runner.run(&host, &mut ui);
//!
//! assert_eq!(report.exit_code(), 1);
//! assert!(ui.mentions("export PATH=$PATH:/home/u/go/bin"));
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod host;
pub mod runner;
pub mod shell;
pub mod ui;
pub mod versions;

pub use error::{DoctorError, Result};
