//! Pure aggregation and resolution logic.
//!
//! No clocks and no storage here: callers pass an explicit cutoff, so
//! tests pin timestamps instead of racing the wall clock.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, NaiveDate, Utc};
use marketmood_core::{
    DailyBucket, Instrument, InstrumentWithSentiment, Observation, SentimentCategory,
};

/// Round to 3 decimal places, half away from zero.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Partition observations into UTC calendar-day buckets and aggregate each.
///
/// Observations older than `cutoff` are ignored. Buckets come back oldest
/// to newest, truncated to the first `limit` entries, so a window wider
/// than the cap keeps the oldest days. Days without observations are
/// omitted, never zero-filled.
pub fn bucket_daily(
    observations: &[Observation],
    cutoff: DateTime<Utc>,
    limit: usize,
) -> Vec<DailyBucket> {
    let mut days: BTreeMap<NaiveDate, Vec<&Observation>> = BTreeMap::new();
    for obs in observations.iter().filter(|o| o.recorded_at >= cutoff) {
        days.entry(obs.recorded_at.date_naive()).or_default().push(obs);
    }

    // BTreeMap iterates ascending by date; take(limit) keeps the oldest.
    days.into_iter()
        .take(limit)
        .map(|(date, rows)| {
            let count = rows.len();
            let denominator = count as f64;
            DailyBucket {
                date,
                mean_score: round3(rows.iter().map(|o| o.score).sum::<f64>() / denominator),
                category: mode_category(&rows),
                mean_confidence: round3(
                    rows.iter().map(|o| o.confidence).sum::<f64>() / denominator,
                ),
                count,
            }
        })
        .collect()
}

/// Most frequent category in a bucket. Ties resolve to the
/// lexicographically smallest label, so the result is deterministic
/// regardless of row order.
fn mode_category(rows: &[&Observation]) -> SentimentCategory {
    let mut counts: BTreeMap<&'static str, (usize, SentimentCategory)> = BTreeMap::new();
    for obs in rows {
        counts.entry(obs.category.as_str()).or_insert((0, obs.category)).0 += 1;
    }

    // Labels iterate in lexicographic order; strict `>` keeps the first
    // (smallest) label on equal counts.
    let mut best: Option<(usize, SentimentCategory)> = None;
    for (count, category) in counts.into_values() {
        if best.is_none_or(|(best_count, _)| count > best_count) {
            best = Some((count, category));
        }
    }
    best.map_or(SentimentCategory::Neutral, |(_, category)| category)
}

/// Join instruments with the latest observation of each, sorted by symbol.
///
/// Instruments without an observation keep their place in the output with
/// both sentiment fields unset.
pub fn with_current_sentiment(
    instruments: Vec<Instrument>,
    latest: &[Observation],
) -> Vec<InstrumentWithSentiment> {
    let by_instrument: HashMap<i32, &Observation> =
        latest.iter().map(|obs| (obs.instrument_id, obs)).collect();

    let mut rows: Vec<InstrumentWithSentiment> = instruments
        .into_iter()
        .map(|instrument| {
            let current = by_instrument.get(&instrument.id);
            InstrumentWithSentiment {
                current_score: current.map(|obs| obs.score),
                current_category: current.map(|obs| obs.category),
                instrument,
            }
        })
        .collect();
    rows.sort_by(|a, b| a.instrument.symbol.cmp(&b.instrument.symbol));
    rows
}
