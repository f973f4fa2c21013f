//! Contact Ledger - Main entry point
//!
//! Reads one JSON command per line on stdin and writes one JSON response per
//! line on stdout. Logs go to stderr.

use anyhow::{Context, Result};
use contact_ledger::{Config, JsonFileRepository, LedgerService, SystemClock};
use std::io::{self, BufRead, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    // Initialize logging (stderr only to keep stdout for responses)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Using ledger file {}", config.ledger_path.display());

    let repository = JsonFileRepository::new(config.ledger_path.clone());
    let mut service = match LedgerService::open(
        Box::new(repository),
        Box::new(SystemClock),
        config.birthday_window_days,
    ) {
        Ok(service) => service,
        Err(e) => {
            error!("Failed to open ledger: {}", e);
            return Err(e.into());
        }
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read command")?;
        if line.trim().is_empty() {
            continue;
        }

        let response = service.handle_line(&line);
        serde_json::to_writer(&mut stdout, &response)?;
        writeln!(stdout)?;
        stdout.flush()?;
    }

    info!("Contact ledger session closed");
    Ok(())
}
