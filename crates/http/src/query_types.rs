//! Request/query types (Deserialize) with boundary validation.
//!
//! Domain violations are rejected here, before anything reaches the
//! aggregation logic.

use marketmood_core::{
    InstrumentPatch, NewInstrument, NewObservation, SentimentCategory, DEFAULT_QUERY_LIMIT,
    DEFAULT_WINDOW_DAYS, MAX_QUERY_LIMIT, MAX_SYMBOL_LEN, MAX_WINDOW_DAYS,
};
use serde::Deserialize;

const fn default_days() -> u32 {
    DEFAULT_WINDOW_DAYS
}

const fn default_limit() -> usize {
    DEFAULT_QUERY_LIMIT
}

/// Query parameters shared by the raw listing and the history endpoint.
#[derive(Debug, Deserialize)]
pub struct SentimentQuery {
    pub instrument_id: i32,
    #[serde(default = "default_days")]
    pub days: u32,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl SentimentQuery {
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=MAX_WINDOW_DAYS).contains(&self.days) {
            return Err(format!("days must be within 1..={MAX_WINDOW_DAYS}"));
        }
        if !(1..=MAX_QUERY_LIMIT).contains(&self.limit) {
            return Err(format!("limit must be within 1..={MAX_QUERY_LIMIT}"));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateInstrumentRequest {
    pub symbol: String,
    pub name: String,
    pub current_price: f64,
    pub price_change_24h: f64,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub volume_24h: Option<f64>,
}

impl CreateInstrumentRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.symbol.is_empty() || self.symbol.len() > MAX_SYMBOL_LEN {
            return Err(format!("symbol must be 1..={MAX_SYMBOL_LEN} characters"));
        }
        if self.name.is_empty() {
            return Err("name must not be empty".to_owned());
        }
        if self.current_price <= 0.0 {
            return Err("current_price must be positive".to_owned());
        }
        if self.market_cap.is_some_and(|v| v <= 0.0) {
            return Err("market_cap must be positive when present".to_owned());
        }
        if self.volume_24h.is_some_and(|v| v < 0.0) {
            return Err("volume_24h must be non-negative when present".to_owned());
        }
        Ok(())
    }

    pub fn into_input(self) -> NewInstrument {
        NewInstrument {
            symbol: self.symbol,
            name: self.name,
            current_price: self.current_price,
            price_change_24h: self.price_change_24h,
            market_cap: self.market_cap,
            volume_24h: self.volume_24h,
        }
    }
}

/// Validate a partial instrument update against the same bounds as
/// creation, for the fields it actually carries.
pub fn validate_patch(patch: &InstrumentPatch) -> Result<(), String> {
    if patch.symbol.as_ref().is_some_and(|s| s.is_empty() || s.len() > MAX_SYMBOL_LEN) {
        return Err(format!("symbol must be 1..={MAX_SYMBOL_LEN} characters"));
    }
    if patch.name.as_ref().is_some_and(String::is_empty) {
        return Err("name must not be empty".to_owned());
    }
    if patch.current_price.is_some_and(|v| v <= 0.0) {
        return Err("current_price must be positive".to_owned());
    }
    if patch.market_cap.flatten().is_some_and(|v| v <= 0.0) {
        return Err("market_cap must be positive when present".to_owned());
    }
    if patch.volume_24h.flatten().is_some_and(|v| v < 0.0) {
        return Err("volume_24h must be non-negative when present".to_owned());
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
pub struct CreateObservationRequest {
    pub instrument_id: i32,
    pub score: f64,
    pub category: SentimentCategory,
    pub confidence: f64,
    pub source: String,
    #[serde(default)]
    pub note: Option<String>,
}

impl CreateObservationRequest {
    pub fn validate(&self) -> Result<(), String> {
        if !(-1.0..=1.0).contains(&self.score) {
            return Err("score must be within [-1.0, 1.0]".to_owned());
        }
        if !(0.0..=1.0).contains(&self.confidence) {
            return Err("confidence must be within [0.0, 1.0]".to_owned());
        }
        if self.source.is_empty() {
            return Err("source must not be empty".to_owned());
        }
        Ok(())
    }

    pub fn into_input(self) -> NewObservation {
        NewObservation {
            instrument_id: self.instrument_id,
            score: self.score,
            category: self.category,
            confidence: self.confidence,
            source: self.source,
            note: self.note,
        }
    }
}
