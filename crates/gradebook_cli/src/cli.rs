//! Command-line surface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "gradebook", version, about = "Session grade book and calculator")]
pub struct CommandLine {
    /// Log level: trace|debug|info|warn|error.
    #[arg(long, env = "GRADEBOOK_LOG_LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Directory for rolling log files. Logging is off when unset.
    #[arg(long, env = "GRADEBOOK_LOG_DIR", global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Interactive student record manager (default).
    Records {
        /// Print the final class report as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Four-function calculator.
    Calc,
}

impl CommandLine {
    pub fn command_or_default(&self) -> Command {
        self.command
            .clone()
            .unwrap_or(Command::Records { json: false })
    }
}
