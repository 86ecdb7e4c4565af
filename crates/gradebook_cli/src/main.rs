//! Gradebook console entry point.
//!
//! # Responsibility
//! - Parse command-line configuration and start optional file logging.
//! - Run the chosen interactive session on stdin/stdout.

mod calculator;
mod cli;
mod console;
mod records;

use anyhow::{anyhow, Context, Result};
use calculator::CalculatorSession;
use clap::Parser;
use cli::{Command, CommandLine};
use log::info;
use records::{RecordSession, ReportFormat};
use std::io;

fn main() -> Result<()> {
    let cli = CommandLine::parse();
    init_logging(&cli)?;

    let stdin = io::stdin();
    let stdout = io::stdout();

    match cli.command_or_default() {
        Command::Records { json } => {
            info!("event=session_start module=records status=ok json={json}");
            let format = if json {
                ReportFormat::Json
            } else {
                ReportFormat::Text
            };
            RecordSession::new(stdin.lock(), stdout.lock()).run(format)?;
        }
        Command::Calc => {
            info!("event=session_start module=calculator status=ok");
            CalculatorSession::new(stdin.lock(), stdout.lock()).run()?;
        }
    }

    Ok(())
}

fn init_logging(cli: &CommandLine) -> Result<()> {
    let Some(log_dir) = cli.log_dir.as_deref() else {
        return Ok(());
    };
    let log_dir = std::path::absolute(log_dir)
        .with_context(|| format!("failed to resolve log directory `{}`", log_dir.display()))?;
    let level = cli
        .log_level
        .as_deref()
        .unwrap_or_else(|| gradebook_core::default_log_level());

    gradebook_core::init_logging(level, &log_dir).map_err(|err| anyhow!(err))?;
    info!(
        "event=cli_start module=cli status=ok core_version={}",
        gradebook_core::core_version()
    );
    Ok(())
}
