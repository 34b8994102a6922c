// src/main.rs

use anyhow::{Context, Result};
use clap::Parser;
use linemerge::cli::Cli;
use linemerge::selection::TerminalPicker;
use linemerge::{run, Config, RunOutcome};
use std::io;

fn main() -> Result<()> {
    // Initialize logging on stderr so stdout carries only status lines.
    let default_directive = if cfg!(debug_assertions) {
        "linemerge=debug"
    } else {
        "linemerge=info"
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                default_directive
                    .parse::<tracing_subscriber::filter::Directive>()
                    .context("Invalid default log directive")?,
            ),
        )
        .init();

    log::info!("Starting linemerge v{}...", env!("CARGO_PKG_VERSION"));
    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());

    let cli = Cli::parse();

    // Every failure is reported on stdout, next to the status lines, and stops the run.
    let config = match Config::try_from(cli) {
        Ok(config) => config,
        Err(e) => {
            println!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let mut picker = TerminalPicker::stdio();
    let mut status = io::stdout();

    match run(&config, &mut picker, &mut status) {
        Ok(RunOutcome::Completed { outputs }) => {
            log::debug!("Run completed, wrote {} files", outputs.len());
            Ok(())
        }
        Ok(RunOutcome::Cancelled) => Ok(()),
        Err(e) => {
            println!("{}", e);
            std::process::exit(1);
        }
    }
}
