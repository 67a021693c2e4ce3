//! InstrumentStore implementation for PgStorage.

use super::*;

use async_trait::async_trait;
use marketmood_core::{InstrumentPatch, NewInstrument};

use crate::traits::InstrumentStore;

#[async_trait]
impl InstrumentStore for PgStorage {
    async fn insert_instrument(&self, input: &NewInstrument) -> Result<Instrument, StorageError> {
        let row = sqlx::query(&format!(
            "INSERT INTO instruments
               (symbol, name, current_price, price_change_24h, market_cap, volume_24h)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {INSTRUMENT_COLUMNS}"
        ))
        .bind(&input.symbol)
        .bind(&input.name)
        .bind(input.current_price)
        .bind(input.price_change_24h)
        .bind(input.market_cap)
        .bind(input.volume_24h)
        .fetch_one(&self.pool)
        .await?;
        row_to_instrument(&row)
    }

    async fn get_instrument(&self, id: i32) -> Result<Option<Instrument>, StorageError> {
        let row =
            sqlx::query(&format!("SELECT {INSTRUMENT_COLUMNS} FROM instruments WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        row.map(|r| row_to_instrument(&r)).transpose()
    }

    async fn list_instruments(&self) -> Result<Vec<Instrument>, StorageError> {
        let rows =
            sqlx::query(&format!("SELECT {INSTRUMENT_COLUMNS} FROM instruments ORDER BY symbol"))
                .fetch_all(&self.pool)
                .await?;
        rows.iter().map(row_to_instrument).collect()
    }

    async fn update_instrument(
        &self,
        id: i32,
        patch: &InstrumentPatch,
    ) -> Result<Option<Instrument>, StorageError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query(&format!(
            "SELECT {INSTRUMENT_COLUMNS} FROM instruments WHERE id = $1 FOR UPDATE"
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };
        let mut instrument = row_to_instrument(&row)?;
        patch.apply(&mut instrument);

        let updated = sqlx::query(&format!(
            "UPDATE instruments
                SET symbol = $1, name = $2, current_price = $3, price_change_24h = $4,
                    market_cap = $5, volume_24h = $6, last_updated = NOW()
              WHERE id = $7
              RETURNING {INSTRUMENT_COLUMNS}"
        ))
        .bind(&instrument.symbol)
        .bind(&instrument.name)
        .bind(instrument.current_price)
        .bind(instrument.price_change_24h)
        .bind(instrument.market_cap)
        .bind(instrument.volume_24h)
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        row_to_instrument(&updated).map(Some)
    }
}
