//! Stair compliance checker binary
//!
//! Exit codes: 0 success or compliant, 1 not compliant, 2 invalid input, 3 runtime error.

use std::process::ExitCode;

use clap::Parser;
use stair_check_cli::{cli::Args, commands, EXIT_ERROR};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    let args = Args::parse();

    // stdout carries the report, so logs go to stderr
    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("stair-check v{}", env!("CARGO_PKG_VERSION"));

    let mut stdout = std::io::stdout().lock();
    match commands::run(&args, &mut stdout) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
