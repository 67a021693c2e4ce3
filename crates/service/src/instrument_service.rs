use std::sync::Arc;

use marketmood_core::{Instrument, InstrumentPatch, NewInstrument};
use marketmood_storage::SentimentStore;

use crate::ServiceError;

/// Instrument CRUD orchestration.
pub struct InstrumentService {
    store: Arc<dyn SentimentStore>,
}

impl InstrumentService {
    #[must_use]
    pub fn new(store: Arc<dyn SentimentStore>) -> Self {
        Self { store }
    }

    /// Track a new instrument. Duplicate symbols surface as
    /// [`marketmood_storage::StorageError::Duplicate`].
    pub async fn create(&self, input: NewInstrument) -> Result<Instrument, ServiceError> {
        let instrument = self.store.insert_instrument(&input).await?;
        tracing::info!(id = instrument.id, symbol = %instrument.symbol, "instrument tracked");
        Ok(instrument)
    }

    /// All tracked instruments, ordered by symbol.
    pub async fn list(&self) -> Result<Vec<Instrument>, ServiceError> {
        Ok(self.store.list_instruments().await?)
    }

    /// Fetch one instrument; unknown ids are an error, not an empty result.
    pub async fn get(&self, id: i32) -> Result<Instrument, ServiceError> {
        self.store
            .get_instrument(id)
            .await?
            .ok_or_else(|| ServiceError::instrument_not_found(id))
    }

    /// Partial update. Always refreshes `last_updated`, even for an empty
    /// patch.
    pub async fn update(
        &self,
        id: i32,
        patch: InstrumentPatch,
    ) -> Result<Instrument, ServiceError> {
        self.store
            .update_instrument(id, &patch)
            .await?
            .ok_or_else(|| ServiceError::instrument_not_found(id))
    }
}
