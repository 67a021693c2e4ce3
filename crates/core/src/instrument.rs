use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A tracked financial instrument.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instrument {
    /// Unique identifier, assigned by the store.
    pub id: i32,
    /// Ticker symbol, unique across instruments.
    pub symbol: String,
    /// Display name.
    pub name: String,
    /// Most recent price.
    pub current_price: f64,
    /// Price change over the trailing 24 hours.
    pub price_change_24h: f64,
    /// Market capitalization, when known.
    pub market_cap: Option<f64>,
    /// Trading volume over the trailing 24 hours, when known.
    pub volume_24h: Option<f64>,
    /// Last time any attribute was updated.
    pub last_updated: DateTime<Utc>,
    /// When the instrument was first tracked.
    pub created_at: DateTime<Utc>,
}

/// Input for tracking a new instrument.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewInstrument {
    pub symbol: String,
    pub name: String,
    pub current_price: f64,
    pub price_change_24h: f64,
    pub market_cap: Option<f64>,
    pub volume_24h: Option<f64>,
}

/// Partial update for an instrument.
///
/// Outer `Option` distinguishes "field absent" from "set to null" for the
/// nullable attributes: `None` leaves the column untouched, `Some(None)`
/// clears it, `Some(Some(v))` sets it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InstrumentPatch {
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default)]
    pub price_change_24h: Option<f64>,
    #[serde(default, deserialize_with = "nullable_field", skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<Option<f64>>,
    #[serde(default, deserialize_with = "nullable_field", skip_serializing_if = "Option::is_none")]
    pub volume_24h: Option<Option<f64>>,
}

/// Plain serde collapses an explicit `null` into the outer `None`; this
/// keeps it as `Some(None)` so "clear the column" survives deserialization.
fn nullable_field<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

impl InstrumentPatch {
    /// Whether the patch carries no changes at all.
    pub fn is_empty(&self) -> bool {
        self.symbol.is_none()
            && self.name.is_none()
            && self.current_price.is_none()
            && self.price_change_24h.is_none()
            && self.market_cap.is_none()
            && self.volume_24h.is_none()
    }

    /// Apply the patch to an instrument in place. Does not touch timestamps.
    pub fn apply(&self, instrument: &mut Instrument) {
        if let Some(symbol) = &self.symbol {
            instrument.symbol = symbol.clone();
        }
        if let Some(name) = &self.name {
            instrument.name = name.clone();
        }
        if let Some(price) = self.current_price {
            instrument.current_price = price;
        }
        if let Some(change) = self.price_change_24h {
            instrument.price_change_24h = change;
        }
        if let Some(market_cap) = self.market_cap {
            instrument.market_cap = market_cap;
        }
        if let Some(volume) = self.volume_24h {
            instrument.volume_24h = volume;
        }
    }
}
