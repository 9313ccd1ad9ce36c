//! Process execution and platform detection.

pub mod command;
pub mod platform;

pub use command::{display_command, run_combined, scan_stdout, CommandOutput};
pub use platform::Platform;
