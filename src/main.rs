//! godoctor CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use godoctor::cli::Cli;
use godoctor::config::DoctorConfig;
use godoctor::host::SystemHost;
use godoctor::runner::Runner;
use godoctor::ui::TerminalUI;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr; stdout carries only the report.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("godoctor=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("godoctor=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("godoctor starting with args: {:?}", cli);

    let config = DoctorConfig::from(&cli);
    tracing::debug!("supported Go versions from {}", config.versions);
    if !config.color {
        console::set_colors_enabled(false);
    }

    let mut ui = TerminalUI::new(config.color);
    let mut runner = Runner::from_config(&config);
    let report = runner.run(&SystemHost::new(), &mut ui);

    ExitCode::from(report.exit_code())
}
