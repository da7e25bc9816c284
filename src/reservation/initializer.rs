use crate::domain::{CorrelationId, Reservation};
use crate::infrastructure::log_messages::reservations as messages;
use crate::reservation::ReservationService;
use crate::Result;
use tracing::{info, instrument};

/// Names seeded at startup
pub const SAMPLE_NAMES: [&str; 7] = [
    "Josh", "Andre", "Bennie", "Dieter", "Johan", "Spencer", "Stephan",
];

/// Resets the reservation table to the sample names
pub struct SampleDataInitializer {
    service: ReservationService,
}

impl SampleDataInitializer {
    pub fn new(service: ReservationService) -> Self {
        Self { service }
    }

    /// Delete everything, store the sample names, then log what is stored
    #[instrument(skip(self), fields(correlation_id = %correlation))]
    pub async fn run(&self, correlation: CorrelationId) -> Result<Vec<Reservation>> {
        info!("{}", messages::SEEDING);

        self.service.repository().delete_all().await?;
        self.service.save_all(&SAMPLE_NAMES, correlation).await?;

        let stored = self.service.find_all().await?;
        for reservation in &stored {
            info!(id = reservation.id, name = %reservation.name, "{}", messages::STORED);
        }
        Ok(stored)
    }
}
