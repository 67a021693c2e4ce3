//! PostgreSQL storage backend using sqlx.
//!
//! Split into modular files by domain concern.

mod instruments;
mod observations;

use marketmood_core::{
    Instrument, Observation, SentimentCategory, env_parse_or, PG_POOL_ACQUIRE_TIMEOUT_SECS,
    PG_POOL_IDLE_TIMEOUT_SECS, PG_POOL_MAX_CONNECTIONS,
};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};

use crate::error::StorageError;
use crate::migrations::run_migrations;

#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let max_connections =
            env_parse_or("MARKETMOOD_PG_MAX_CONNECTIONS", PG_POOL_MAX_CONNECTIONS);
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(std::time::Duration::from_secs(PG_POOL_ACQUIRE_TIMEOUT_SECS))
            .idle_timeout(std::time::Duration::from_secs(PG_POOL_IDLE_TIMEOUT_SECS))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;
        run_migrations(&pool).await.map_err(|e| StorageError::Migration(e.to_string()))?;
        tracing::info!("PgStorage initialized");
        Ok(Self { pool })
    }
}

/// Parse `SentimentCategory` from a text column. The CHECK constraint makes
/// a mismatch unreachable in practice; warn and default rather than fail
/// the whole query if it ever happens.
pub(crate) fn parse_category(s: &str) -> SentimentCategory {
    s.parse().unwrap_or_else(|()| {
        tracing::warn!(invalid_category = %s, "corrupt category in DB, defaulting to neutral");
        SentimentCategory::Neutral
    })
}

/// Convert `usize` to `i64` for SQL LIMIT binds.
/// Saturates to `i64::MAX` on overflow (only possible on 128-bit targets).
pub(crate) fn usize_to_i64(val: usize) -> i64 {
    i64::try_from(val).unwrap_or(i64::MAX)
}

pub(crate) fn row_to_instrument(row: &sqlx::postgres::PgRow) -> Result<Instrument, StorageError> {
    Ok(Instrument {
        id: row.try_get("id")?,
        symbol: row.try_get("symbol")?,
        name: row.try_get("name")?,
        current_price: row.try_get("current_price")?,
        price_change_24h: row.try_get("price_change_24h")?,
        market_cap: row.try_get("market_cap")?,
        volume_24h: row.try_get("volume_24h")?,
        last_updated: row.try_get("last_updated")?,
        created_at: row.try_get("created_at")?,
    })
}

pub(crate) fn row_to_observation(row: &sqlx::postgres::PgRow) -> Result<Observation, StorageError> {
    let category = parse_category(&row.try_get::<String, _>("category")?);
    Ok(Observation {
        id: row.try_get("id")?,
        instrument_id: row.try_get("instrument_id")?,
        score: row.try_get("score")?,
        category,
        confidence: row.try_get("confidence")?,
        source: row.try_get("source")?,
        note: row.try_get("note")?,
        recorded_at: row.try_get("recorded_at")?,
        created_at: row.try_get("created_at")?,
    })
}

pub(crate) const INSTRUMENT_COLUMNS: &str =
    "id, symbol, name, current_price, price_change_24h, market_cap, volume_24h,
     last_updated, created_at";

pub(crate) const OBSERVATION_COLUMNS: &str =
    "id, instrument_id, score, category, confidence, source, note, recorded_at, created_at";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_category_known_labels() {
        assert_eq!(parse_category("very_positive"), SentimentCategory::VeryPositive);
        assert_eq!(parse_category("negative"), SentimentCategory::Negative);
    }

    #[test]
    fn parse_category_defaults_on_garbage() {
        assert_eq!(parse_category("bogus"), SentimentCategory::Neutral);
    }

    #[test]
    fn usize_to_i64_round_trips_small_values() {
        assert_eq!(usize_to_i64(100), 100);
        assert_eq!(usize_to_i64(0), 0);
    }
}
