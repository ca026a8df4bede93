//! Study session manager entry point.
//!
//! # Responsibility
//! - Parse command-line flags and start diagnostic logging.
//! - Own the session ledger for the lifetime of one interactive run.

mod input;
mod shell;

use clap::Parser;
use input::EditorInput;
use log::info;
use shell::Shell;
use std::error::Error;
use std::io;
use std::path::PathBuf;
use studyledger_core::{default_log_level, init_logging, SessionLedger};

#[derive(Parser, Debug)]
#[command(name = "studyledger", version)]
#[command(about = "Track study sessions and review time spent per subject")]
struct Args {
    /// Log level: trace|debug|info|warn|error (defaults by build mode)
    #[arg(long, env = "STUDYLEDGER_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files
    #[arg(long, env = "STUDYLEDGER_LOG_DIR")]
    log_dir: Option<PathBuf>,

    /// Disable file logging
    #[arg(long)]
    no_log: bool,
}

impl Args {
    fn resolved_log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(default_log_level())
    }

    fn resolved_log_dir(&self) -> PathBuf {
        self.log_dir
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("studyledger").join("logs"))
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    if !args.no_log {
        // Logging is diagnostics only; the shell still runs without it.
        if let Err(err) = init_logging(args.resolved_log_level(), &args.resolved_log_dir()) {
            eprintln!("warning: file logging disabled: {err}");
        }
    }

    let mut ledger = SessionLedger::new();
    let input = EditorInput::new()?;
    Shell::new(&mut ledger, input, io::stdout()).run()?;

    info!(
        "event=app_exit module=cli status=ok sessions={}",
        ledger.len()
    );
    Ok(())
}
