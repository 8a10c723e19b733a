//! Drives the agent over a sequence of user turns and writes each outcome.

use crate::config::OutputFormat;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, info};
use triage_core::{TriageAgent, TriageOutcome};

/// Formats a single outcome as one output line (without the trailing newline).
pub fn render(outcome: &TriageOutcome, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format!("[{}] {}", outcome.action, outcome.response)),
        OutputFormat::Json => {
            serde_json::to_string(outcome).context("Failed to serialize triage outcome")
        }
    }
}

/// Handles one user turn and writes the rendered outcome to `out`.
pub fn handle_turn<W: Write>(
    agent: &TriageAgent,
    user_input: &str,
    format: OutputFormat,
    out: &mut W,
) -> Result<TriageOutcome> {
    let outcome = agent.handle(user_input);
    writeln!(out, "{}", render(&outcome, format)?).context("Failed to write output")?;
    Ok(outcome)
}

/// Handles every non-empty line of `reader` as a separate turn.
///
/// Returns the number of turns handled.
pub fn run_lines<R: BufRead, W: Write>(
    agent: &TriageAgent,
    reader: R,
    format: OutputFormat,
    out: &mut W,
) -> Result<usize> {
    let mut handled = 0;
    for line in reader.lines() {
        let line = line.context("Failed to read input line")?;
        let user_input = line.trim();
        if user_input.is_empty() {
            debug!("Skipping blank input line");
            continue;
        }
        handle_turn(agent, user_input, format, out)?;
        handled += 1;
    }
    out.flush().context("Failed to flush output")?;
    info!(turns = handled, "Finished reading input");
    Ok(handled)
}
