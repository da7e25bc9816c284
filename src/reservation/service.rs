use crate::domain::{CorrelationId, Reservation, ReservationName};
use crate::infrastructure::log_messages::reservations as messages;
use crate::reservation::ReservationRepository;
use crate::{Error, Result};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Reservation use cases on top of a repository
#[derive(Clone)]
pub struct ReservationService {
    repository: Arc<dyn ReservationRepository>,
}

impl ReservationService {
    pub fn new(repository: Arc<dyn ReservationRepository>) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &Arc<dyn ReservationRepository> {
        &self.repository
    }

    /// Store a batch of reservations, all or nothing
    ///
    /// Every name must start with an uppercase character. One bad name
    /// rejects the batch before anything is written; a storage failure
    /// part-way rolls the batch back.
    #[instrument(skip(self, names), fields(correlation_id = %correlation, count = names.len()))]
    pub async fn save_all<S>(&self, names: &[S], correlation: CorrelationId) -> Result<Vec<Reservation>>
    where
        S: AsRef<str>,
    {
        let validated = names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                ReservationName::try_new(name.to_string())
                    .map_err(|_| Error::invalid_reservation_name(name))
            })
            .collect::<Result<Vec<_>>>();

        let validated = match validated {
            Ok(validated) => validated,
            Err(error) => {
                warn!(error = %error, "{}", messages::BATCH_REJECTED);
                return Err(error);
            }
        };

        info!("{}", messages::SAVING_BATCH);
        let saved = self.repository.save_all(&validated).await?;
        info!(saved = saved.len(), "{}", messages::BATCH_SAVED);
        Ok(saved)
    }

    pub async fn find_all(&self) -> Result<Vec<Reservation>> {
        self.repository.find_all().await
    }
}
