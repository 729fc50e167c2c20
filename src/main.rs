//! Assistant Bot - Main entry point
//!
//! Runs the interactive address book on standard input and output.

use anyhow::{Context, Result};
use assistant_bot::{repl, Config, Session};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env();

    // Initialize logging (stderr only, stdout belongs to the user)
    let level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let mut session = Session::new();
    let stdin = io::stdin();
    let stdout = io::stdout();

    repl::run(&mut session, &config.prompt, stdin.lock(), stdout.lock())
        .context("terminal I/O failed")?;

    Ok(())
}
