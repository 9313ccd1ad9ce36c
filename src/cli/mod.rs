//! Command-line interface for godoctor.
//!
//! This module provides the CLI argument parsing using clap's derive macros.
//! Parsed arguments become a [`DoctorConfig`](crate::config::DoctorConfig).

pub mod args;

pub use args::Cli;
