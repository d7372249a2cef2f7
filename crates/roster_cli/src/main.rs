//! Command-line roster shell.
//!
//! # Responsibility
//! - Host one roster session for the lifetime of the process.
//! - Render registry results and surface typed errors as text.

mod command;
mod shell;

use anyhow::{Context, Result};
use clap::Parser;
use roster_core::{default_log_level, init_logging, RosterService, DEFAULT_DEPARTMENT_NAME};
use std::io;

#[derive(Debug, Parser)]
#[command(name = "roster", version, about = "Manage an in-memory department roster")]
struct Args {
    /// Department label for this session.
    #[arg(long, env = "ROSTER_DEPARTMENT", default_value = DEFAULT_DEPARTMENT_NAME)]
    department: String,

    /// Log level (trace|debug|info|warn|error).
    #[arg(long, env = "ROSTER_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; file logging is off without it.
    #[arg(long, env = "ROSTER_LOG_DIR")]
    log_dir: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(log_dir) = args.log_dir.as_deref() {
        let level = args.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir).context("failed to initialize logging")?;
    }

    let mut service = RosterService::new(args.department);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    shell::run(&mut service, stdin.lock(), &mut stdout).context("roster shell I/O failed")
}
