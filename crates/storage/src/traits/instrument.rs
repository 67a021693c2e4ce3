use async_trait::async_trait;
use marketmood_core::{Instrument, InstrumentPatch, NewInstrument};

use crate::error::StorageError;

/// CRUD operations on tracked instruments.
#[async_trait]
pub trait InstrumentStore: Send + Sync {
    /// Insert a new instrument. Fails with [`StorageError::Duplicate`] when
    /// the symbol is already tracked.
    async fn insert_instrument(&self, input: &NewInstrument) -> Result<Instrument, StorageError>;

    /// Get an instrument by id.
    async fn get_instrument(&self, id: i32) -> Result<Option<Instrument>, StorageError>;

    /// All tracked instruments, ordered by symbol.
    async fn list_instruments(&self) -> Result<Vec<Instrument>, StorageError>;

    /// Apply a partial update, refreshing `last_updated`. Returns `None`
    /// when no instrument with that id exists.
    async fn update_instrument(
        &self,
        id: i32,
        patch: &InstrumentPatch,
    ) -> Result<Option<Instrument>, StorageError>;
}
