use std::sync::Arc;

use chrono::{Duration, Utc};
use marketmood_core::{NewObservation, Observation};
use marketmood_storage::SentimentStore;

use crate::ServiceError;

/// Observation ingestion and raw listing.
pub struct ObservationService {
    store: Arc<dyn SentimentStore>,
}

impl ObservationService {
    #[must_use]
    pub fn new(store: Arc<dyn SentimentStore>) -> Self {
        Self { store }
    }

    /// Record one observation. The referenced instrument must exist; the
    /// check runs before anything is written, so a dangling reference
    /// never produces a row.
    pub async fn record(&self, input: NewObservation) -> Result<Observation, ServiceError> {
        if self.store.get_instrument(input.instrument_id).await?.is_none() {
            return Err(ServiceError::instrument_not_found(input.instrument_id));
        }
        let observation = self.store.insert_observation(&input).await?;
        tracing::debug!(
            id = observation.id,
            instrument_id = observation.instrument_id,
            category = %observation.category,
            "observation recorded"
        );
        Ok(observation)
    }

    /// Raw observations for one instrument over a trailing window, newest
    /// first, capped at `limit`.
    pub async fn recent(
        &self,
        instrument_id: i32,
        days: u32,
        limit: usize,
    ) -> Result<Vec<Observation>, ServiceError> {
        if self.store.get_instrument(instrument_id).await?.is_none() {
            return Err(ServiceError::instrument_not_found(instrument_id));
        }
        let cutoff = Utc::now() - Duration::days(i64::from(days));
        Ok(self.store.recent_observations(instrument_id, cutoff, limit).await?)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "test code")]
mod tests {
    use super::*;
    use crate::test_store::{seeded_instrument, MemoryStore};
    use marketmood_core::SentimentCategory;

    fn new_observation(instrument_id: i32, score: f64) -> NewObservation {
        NewObservation {
            instrument_id,
            score,
            category: SentimentCategory::Positive,
            confidence: 0.8,
            source: "newswire".to_owned(),
            note: Some("earnings beat".to_owned()),
        }
    }

    #[tokio::test]
    async fn record_rejects_unknown_instrument_without_writing() {
        let store = Arc::new(MemoryStore::default());
        let service = ObservationService::new(store.clone());

        let err = service.record(new_observation(42, 0.5)).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(store.observation_count(), 0);
    }

    #[tokio::test]
    async fn record_returns_populated_row() {
        let store = Arc::new(MemoryStore::default());
        store.seed_instrument(seeded_instrument(1, "ACME"));
        let service = ObservationService::new(store.clone());

        let observation = service.record(new_observation(1, 0.5)).await.unwrap();
        assert_eq!(observation.id, 1);
        assert_eq!(observation.instrument_id, 1);
        assert_eq!(observation.note.as_deref(), Some("earnings beat"));
    }

    #[tokio::test]
    async fn recent_rejects_unknown_instrument() {
        let service = ObservationService::new(Arc::new(MemoryStore::default()));
        let err = service.recent(9, 30, 100).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn recent_returns_newest_first() {
        let store = Arc::new(MemoryStore::default());
        store.seed_instrument(seeded_instrument(1, "ACME"));
        let service = ObservationService::new(store.clone());

        let first = service.record(new_observation(1, 0.1)).await.unwrap();
        let second = service.record(new_observation(1, 0.2)).await.unwrap();

        let recent = service.recent(1, 30, 100).await.unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].id, second.id);
        assert_eq!(recent[1].id, first.id);
    }
}
