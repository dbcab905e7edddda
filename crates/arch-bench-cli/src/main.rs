//! Arch Bench CLI application
//!
//! Runs benchmark definitions against a subject model and scores the answers
//! with a judge model.
//!
//! # Installation
//!
//! ```bash
//! cargo install --path crates/arch-bench-cli
//! ```
//!
//! Logging follows `RUST_LOG` and defaults to `warn`; `--verbose` raises it
//! to `debug`.

mod args;
mod commands;
mod console;
mod router;

use std::process::ExitCode;

use arch_bench_core::BenchError;
use clap::Parser;
use colored::*;
use tracing_subscriber::EnvFilter;

use crate::args::Cli;
use crate::console::{CliConsole, error_footer};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let console = CliConsole::new(cli.verbose);
    match router::route(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            console.error(&err.to_string());
            if let Some(bench) = err.downcast_ref::<BenchError>() {
                eprintln!("  {}", error_footer(bench).dimmed());
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
