//! In-memory store backing the service tests.
//!
//! Implements the storage traits over plain `Vec`s, mirroring the
//! documented query contracts (symbol ordering, `(recorded_at, id)`
//! groupwise maximum) so service logic can be exercised without a
//! database.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use marketmood_core::{
    Instrument, InstrumentPatch, NewInstrument, NewObservation, Observation, SentimentCategory,
};
use marketmood_storage::{InstrumentStore, ObservationStore, StorageError};

#[derive(Default)]
pub(crate) struct MemoryStore {
    instruments: Mutex<Vec<Instrument>>,
    observations: Mutex<Vec<Observation>>,
}

impl MemoryStore {
    pub(crate) fn seed_instrument(&self, instrument: Instrument) {
        self.instruments.lock().expect("lock").push(instrument);
    }

    pub(crate) fn seed_observation(&self, observation: Observation) {
        self.observations.lock().expect("lock").push(observation);
    }

    pub(crate) fn observation_count(&self) -> usize {
        self.observations.lock().expect("lock").len()
    }
}

pub(crate) fn seeded_instrument(id: i32, symbol: &str) -> Instrument {
    Instrument {
        id,
        symbol: symbol.to_owned(),
        name: format!("{symbol} Corp"),
        current_price: 100.0,
        price_change_24h: 0.0,
        market_cap: None,
        volume_24h: None,
        last_updated: Utc::now(),
        created_at: Utc::now(),
    }
}

pub(crate) fn seeded_observation(
    id: i32,
    instrument_id: i32,
    score: f64,
    category: SentimentCategory,
    recorded_at: DateTime<Utc>,
) -> Observation {
    Observation {
        id,
        instrument_id,
        score,
        category,
        confidence: 0.8,
        source: "newswire".to_owned(),
        note: None,
        recorded_at,
        created_at: recorded_at,
    }
}

#[async_trait]
impl InstrumentStore for MemoryStore {
    async fn insert_instrument(&self, input: &NewInstrument) -> Result<Instrument, StorageError> {
        let mut instruments = self.instruments.lock().expect("lock");
        if instruments.iter().any(|i| i.symbol == input.symbol) {
            return Err(StorageError::Duplicate(format!("symbol {}", input.symbol)));
        }
        let id = instruments.iter().map(|i| i.id).max().unwrap_or(0) + 1;
        let instrument = Instrument {
            id,
            symbol: input.symbol.clone(),
            name: input.name.clone(),
            current_price: input.current_price,
            price_change_24h: input.price_change_24h,
            market_cap: input.market_cap,
            volume_24h: input.volume_24h,
            last_updated: Utc::now(),
            created_at: Utc::now(),
        };
        instruments.push(instrument.clone());
        Ok(instrument)
    }

    async fn get_instrument(&self, id: i32) -> Result<Option<Instrument>, StorageError> {
        Ok(self.instruments.lock().expect("lock").iter().find(|i| i.id == id).cloned())
    }

    async fn list_instruments(&self) -> Result<Vec<Instrument>, StorageError> {
        let mut instruments = self.instruments.lock().expect("lock").clone();
        instruments.sort_by(|a, b| a.symbol.cmp(&b.symbol));
        Ok(instruments)
    }

    async fn update_instrument(
        &self,
        id: i32,
        patch: &InstrumentPatch,
    ) -> Result<Option<Instrument>, StorageError> {
        let mut instruments = self.instruments.lock().expect("lock");
        let Some(instrument) = instruments.iter_mut().find(|i| i.id == id) else {
            return Ok(None);
        };
        patch.apply(instrument);
        instrument.last_updated = Utc::now();
        Ok(Some(instrument.clone()))
    }
}

#[async_trait]
impl ObservationStore for MemoryStore {
    async fn insert_observation(
        &self,
        input: &NewObservation,
    ) -> Result<Observation, StorageError> {
        let mut observations = self.observations.lock().expect("lock");
        let id = observations.iter().map(|o| o.id).max().unwrap_or(0) + 1;
        let now = Utc::now();
        let observation = Observation {
            id,
            instrument_id: input.instrument_id,
            score: input.score,
            category: input.category,
            confidence: input.confidence,
            source: input.source.clone(),
            note: input.note.clone(),
            recorded_at: now,
            created_at: now,
        };
        observations.push(observation.clone());
        Ok(observation)
    }

    async fn observations_since(
        &self,
        instrument_id: i32,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<Observation>, StorageError> {
        let mut rows: Vec<Observation> = self
            .observations
            .lock()
            .expect("lock")
            .iter()
            .filter(|o| o.instrument_id == instrument_id && o.recorded_at >= cutoff)
            .cloned()
            .collect();
        rows.sort_by_key(|o| (o.recorded_at, o.id));
        Ok(rows)
    }

    async fn recent_observations(
        &self,
        instrument_id: i32,
        cutoff: DateTime<Utc>,
        limit: usize,
    ) -> Result<Vec<Observation>, StorageError> {
        let mut rows = self.observations_since(instrument_id, cutoff).await?;
        rows.reverse();
        rows.truncate(limit);
        Ok(rows)
    }

    async fn latest_observations(&self) -> Result<Vec<Observation>, StorageError> {
        let mut best: HashMap<i32, Observation> = HashMap::new();
        for obs in self.observations.lock().expect("lock").iter() {
            let keep = best
                .get(&obs.instrument_id)
                .is_none_or(|cur| (obs.recorded_at, obs.id) > (cur.recorded_at, cur.id));
            if keep {
                best.insert(obs.instrument_id, obs.clone());
            }
        }
        Ok(best.into_values().collect())
    }
}
