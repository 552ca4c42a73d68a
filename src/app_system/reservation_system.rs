use tracing::{error, info, instrument};

use crate::actors::ReservationService;
use crate::clients::ReservationClient;
use crate::config::LedgerConfig;

use super::AppError;

const SERVICE_BUFFER: usize = 32;

/// Starts the reservation service and manages its lifecycle.
pub struct ReservationSystem {
    pub reservation_client: ReservationClient,
    handle: tokio::task::JoinHandle<()>,
}

impl ReservationSystem {
    #[instrument(name = "reservation_system", skip(config))]
    pub fn new(config: LedgerConfig) -> Self {
        info!(
            opening = %config.opening_time,
            closing = %config.closing_time,
            "Starting reservation system"
        );

        let (service, reservation_client) = ReservationService::new(SERVICE_BUFFER, config);
        let handle = tokio::spawn(service.run());

        Self {
            reservation_client,
            handle,
        }
    }

    /// Stops the service and waits for its task to finish.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), AppError> {
        info!("Shutting down reservation system");

        if let Err(e) = self.reservation_client.shutdown().await {
            error!(error = %e, "Service already stopped");
        }

        self.handle.await.map_err(|e| {
            error!(error = ?e, "Service shutdown error");
            AppError::Shutdown(e.to_string())
        })?;

        info!("Reservation system shutdown complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ReservationCreate;

    #[tokio::test]
    async fn test_start_use_and_shutdown() -> Result<(), Box<dyn std::error::Error>> {
        let system = ReservationSystem::new(LedgerConfig::default());
        let client = system.reservation_client.clone();

        let receipt = client
            .add_reservation(ReservationCreate::new("Dana", "2026/01/15", "18:00", 2, "0500"))
            .await?;
        assert_eq!(receipt, 1);

        system.shutdown().await?;

        assert!(client.search_reservation(receipt).await.is_err());
        Ok(())
    }
}
