mod actors;
mod app_system;
mod clients;
mod config;
mod console;
mod domain;
mod ledger;
mod messages;

#[cfg(test)]
mod mock_framework;

use tokio::io::BufReader;
use tracing::{error, info};

use crate::app_system::{setup_tracing, AppError, ReservationSystem};
use crate::config::LedgerConfig;
use crate::console::Console;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    setup_tracing();

    let config = LedgerConfig::from_env().inspect_err(|e| error!(error = %e, "Invalid configuration"))?;
    info!(
        opening = %config.opening_time,
        closing = %config.closing_time,
        max_tables = config.max_tables_per_date,
        policy = ?config.cancellation,
        "Starting restaurant reservation system"
    );

    let system = ReservationSystem::new(config.clone());

    let mut console = Console::new(
        system.reservation_client.clone(),
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
        &config,
    );
    let session = console.run().await;

    // Shut down even if the console failed, then report the console error.
    system.shutdown().await?;
    session?;

    info!("Application completed successfully");
    Ok(())
}
