use async_trait::async_trait;
use chrono::{DateTime, Utc};
use marketmood_core::{NewObservation, Observation};

use crate::error::StorageError;

/// Append and read operations on the observation stream.
///
/// The stream is append-only: there is no update or delete here.
/// Observation rows disappear only via the instrument-delete cascade at
/// the schema level.
#[async_trait]
pub trait ObservationStore: Send + Sync {
    /// Append an observation. The store assigns `id`, `recorded_at`, and
    /// `created_at`, and returns the fully populated row.
    async fn insert_observation(
        &self,
        input: &NewObservation,
    ) -> Result<Observation, StorageError>;

    /// All observations for one instrument with `recorded_at >= cutoff`,
    /// ascending by `recorded_at`. Feeds the daily aggregator.
    async fn observations_since(
        &self,
        instrument_id: i32,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<Observation>, StorageError>;

    /// Observations for one instrument with `recorded_at >= cutoff`,
    /// newest first, capped at `limit`.
    async fn recent_observations(
        &self,
        instrument_id: i32,
        cutoff: DateTime<Utc>,
        limit: usize,
    ) -> Result<Vec<Observation>, StorageError>;

    /// The latest observation of every instrument that has one: maximal
    /// `recorded_at` per instrument, ties resolved to the highest `id`.
    async fn latest_observations(&self) -> Result<Vec<Observation>, StorageError>;
}
