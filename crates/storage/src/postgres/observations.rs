//! ObservationStore implementation for PgStorage.

use super::*;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use marketmood_core::NewObservation;

use crate::traits::ObservationStore;

#[async_trait]
impl ObservationStore for PgStorage {
    async fn insert_observation(
        &self,
        input: &NewObservation,
    ) -> Result<Observation, StorageError> {
        let row = sqlx::query(&format!(
            "INSERT INTO observations
               (instrument_id, score, category, confidence, source, note)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {OBSERVATION_COLUMNS}"
        ))
        .bind(input.instrument_id)
        .bind(input.score)
        .bind(input.category.as_str())
        .bind(input.confidence)
        .bind(&input.source)
        .bind(&input.note)
        .fetch_one(&self.pool)
        .await?;
        row_to_observation(&row)
    }

    async fn observations_since(
        &self,
        instrument_id: i32,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<Observation>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {OBSERVATION_COLUMNS} FROM observations
              WHERE instrument_id = $1 AND recorded_at >= $2
              ORDER BY recorded_at, id"
        ))
        .bind(instrument_id)
        .bind(cutoff)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_observation).collect()
    }

    async fn recent_observations(
        &self,
        instrument_id: i32,
        cutoff: DateTime<Utc>,
        limit: usize,
    ) -> Result<Vec<Observation>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {OBSERVATION_COLUMNS} FROM observations
              WHERE instrument_id = $1 AND recorded_at >= $2
              ORDER BY recorded_at DESC, id DESC
              LIMIT $3"
        ))
        .bind(instrument_id)
        .bind(cutoff)
        .bind(usize_to_i64(limit))
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_observation).collect()
    }

    async fn latest_observations(&self) -> Result<Vec<Observation>, StorageError> {
        // Groupwise maximum. `id DESC` is the documented tie-break for
        // observations sharing a `recorded_at`; without it the picked row
        // would be engine-dependent.
        let rows = sqlx::query(&format!(
            "SELECT DISTINCT ON (instrument_id) {OBSERVATION_COLUMNS}
               FROM observations
              ORDER BY instrument_id, recorded_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_observation).collect()
    }
}
