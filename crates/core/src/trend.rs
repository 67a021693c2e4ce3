use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::instrument::Instrument;
use crate::sentiment::SentimentCategory;

/// Aggregated sentiment for one UTC calendar day of one instrument.
///
/// Derived per query, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyBucket {
    /// Calendar day the bucket represents. Serializes as `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// Arithmetic mean of scores, rounded to 3 decimals.
    pub mean_score: f64,
    /// Most frequent category of the day; ties resolve to the
    /// lexicographically smallest label.
    pub category: SentimentCategory,
    /// Arithmetic mean of confidences, rounded to 3 decimals.
    pub mean_confidence: f64,
    /// Number of observations contributing to the bucket.
    pub count: usize,
}

/// Daily sentiment trend for one instrument: one bucket per calendar day
/// that had at least one observation, oldest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricalSentiment {
    pub instrument_id: i32,
    pub buckets: Vec<DailyBucket>,
}

/// An instrument together with its current sentiment, i.e. the most
/// recently recorded observation. Both fields are null when the
/// instrument has no observations; that is a valid state, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstrumentWithSentiment {
    #[serde(flatten)]
    pub instrument: Instrument,
    pub current_score: Option<f64>,
    pub current_category: Option<SentimentCategory>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_date_serializes_as_iso_day() {
        let bucket = DailyBucket {
            date: NaiveDate::from_ymd_opt(2024, 3, 7).expect("valid date"),
            mean_score: 0.6,
            category: SentimentCategory::Positive,
            mean_confidence: 0.8,
            count: 3,
        };
        let value = serde_json::to_value(&bucket).expect("serialize");
        assert_eq!(value["date"], "2024-03-07");
        assert_eq!(value["category"], "positive");
    }
}
