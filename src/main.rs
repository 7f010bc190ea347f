//! verify-links CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use verify_links::cli::{Cli, VerifyCommand};
use verify_links::ui::{ConsoleReporter, ReportTheme, Reporter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr; stdout carries the report.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("verify_links=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("verify_links=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("verify-links starting with args: {:?}", cli);

    let mut reporter = if cli.no_color {
        ConsoleReporter::with_theme(ReportTheme::plain())
    } else {
        ConsoleReporter::new()
    };

    match VerifyCommand::new(&cli).execute(&mut reporter) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            reporter.fail(&e.to_string());
            ExitCode::from(1)
        }
    }
}
