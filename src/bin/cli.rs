//! inistore CLI
//!
//! Command-line interface for editing an inistore file.

use std::process::ExitCode;

use clap::Parser;
use inistore::cli::{self, Args};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> ExitCode {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,inistore=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let stdout = std::io::stdout();
    let status = cli::run(args, &mut stdout.lock());

    ExitCode::from(status)
}
