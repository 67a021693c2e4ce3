use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Categorical sentiment label attached to an observation.
///
/// Closed set: consuming layers get compile-time exhaustiveness when
/// mapping a category to display or severity semantics.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SentimentCategory {
    VeryNegative,
    Negative,
    Neutral,
    Positive,
    VeryPositive,
}

impl SentimentCategory {
    /// Wire label, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VeryNegative => "very_negative",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
            Self::Positive => "positive",
            Self::VeryPositive => "very_positive",
        }
    }
}

impl std::str::FromStr for SentimentCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "very_negative" => Ok(Self::VeryNegative),
            "negative" => Ok(Self::Negative),
            "neutral" => Ok(Self::Neutral),
            "positive" => Ok(Self::Positive),
            "very_positive" => Ok(Self::VeryPositive),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for SentimentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One immutable sentiment observation for an instrument.
///
/// `category` is caller input and is not validated against `score`; the
/// two may disagree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Observation {
    /// Unique identifier, assigned by the store, never reused.
    pub id: i32,
    /// Owning instrument.
    pub instrument_id: i32,
    /// Normalized sentiment score in [-1.0, 1.0].
    pub score: f64,
    /// Categorical label.
    pub category: SentimentCategory,
    /// Confidence in [0.0, 1.0].
    pub confidence: f64,
    /// Provenance of the observation.
    pub source: String,
    /// Optional free-text annotation (e.g. a headline).
    pub note: Option<String>,
    /// Wall-clock of ingestion. Not guaranteed monotone in `id` under
    /// concurrent writers; readers must order by this field, not by `id`.
    pub recorded_at: DateTime<Utc>,
    /// Row creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Input for recording a new observation. The store assigns `id`,
/// `recorded_at`, and `created_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewObservation {
    pub instrument_id: i32,
    pub score: f64,
    pub category: SentimentCategory,
    pub confidence: f64,
    pub source: String,
    pub note: Option<String>,
}
