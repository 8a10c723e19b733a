//! Main Entrypoint for the Triage CLI
//!
//! Loads configuration, initializes logging, and runs the keyword-driven
//! triage agent over the inputs given on the command line or on stdin.

use anyhow::Context;
use clap::Parser;
use std::{io, sync::Arc};
use tracing::info;
use triage_core::{KeywordChooser, TriageAgent};
use triage_service::{
    config::{Config, OutputFormat},
    runner::{handle_turn, run_lines},
};

/// Pick an action for each user input and run the matching tool.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// User inputs, one turn each. Reads stdin line by line when omitted.
    inputs: Vec<String>,

    /// Output format; overrides TRIAGE_OUTPUT.
    #[arg(long, value_enum)]
    output: Option<OutputFormat>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env().context("Failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
        .with_writer(io::stderr)
        .init();

    let format = cli.output.unwrap_or(config.output);
    info!(?format, "Configuration loaded. Using keyword chooser.");

    let agent = TriageAgent::new(Arc::new(KeywordChooser));
    let mut stdout = io::stdout().lock();

    if cli.inputs.is_empty() {
        run_lines(&agent, io::stdin().lock(), format, &mut stdout)?;
    } else {
        for input in &cli.inputs {
            handle_turn(&agent, input, format, &mut stdout)?;
        }
    }

    Ok(())
}
