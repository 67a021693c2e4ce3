use std::sync::Arc;

use chrono::{Duration, Utc};
use marketmood_core::{HistoricalSentiment, InstrumentWithSentiment};
use marketmood_storage::SentimentStore;

use crate::analytics::{bucket_daily, with_current_sentiment};
use crate::ServiceError;

/// The two read paths over the observation stream: the daily aggregator
/// and the latest-state resolver. Stateless; everything is recomputed from
/// raw observations on each call.
pub struct AnalyticsService {
    store: Arc<dyn SentimentStore>,
}

impl AnalyticsService {
    #[must_use]
    pub fn new(store: Arc<dyn SentimentStore>) -> Self {
        Self { store }
    }

    /// Daily sentiment trend for one instrument over the trailing `days`
    /// window, truncated to the oldest `limit` buckets.
    ///
    /// An unknown instrument is an error; a known instrument without
    /// observations in the window yields empty data. The wall clock is
    /// read once per call, so repeated calls shift the window.
    pub async fn historical_sentiment(
        &self,
        instrument_id: i32,
        days: u32,
        limit: usize,
    ) -> Result<HistoricalSentiment, ServiceError> {
        if self.store.get_instrument(instrument_id).await?.is_none() {
            return Err(ServiceError::instrument_not_found(instrument_id));
        }
        let cutoff = Utc::now() - Duration::days(i64::from(days));
        let observations = self.store.observations_since(instrument_id, cutoff).await?;
        tracing::debug!(
            instrument_id,
            window_days = days,
            rows = observations.len(),
            "aggregating daily sentiment"
        );
        Ok(HistoricalSentiment {
            instrument_id,
            buckets: bucket_daily(&observations, cutoff, limit),
        })
    }

    /// Every tracked instrument with its current sentiment attached,
    /// ordered by symbol. Instruments without observations appear with
    /// null sentiment fields.
    pub async fn instruments_with_sentiment(
        &self,
    ) -> Result<Vec<InstrumentWithSentiment>, ServiceError> {
        let instruments = self.store.list_instruments().await?;
        let latest = self.store.latest_observations().await?;
        Ok(with_current_sentiment(instruments, &latest))
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "test code")]
mod tests {
    use super::*;
    use crate::test_store::{seeded_instrument, seeded_observation, MemoryStore};
    use chrono::{DateTime, TimeZone as _};
    use marketmood_core::SentimentCategory;

    fn hours_ago(hours: i64) -> DateTime<Utc> {
        Utc::now() - Duration::hours(hours)
    }

    #[tokio::test]
    async fn historical_rejects_unknown_instrument() {
        let service = AnalyticsService::new(Arc::new(MemoryStore::default()));
        let err = service.historical_sentiment(5, 30, 100).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn historical_empty_window_is_not_an_error() {
        let store = Arc::new(MemoryStore::default());
        store.seed_instrument(seeded_instrument(1, "ACME"));
        // Only data far outside a 5-day window.
        store.seed_observation(seeded_observation(
            1,
            1,
            0.4,
            SentimentCategory::Positive,
            Utc::now() - Duration::days(10),
        ));
        let service = AnalyticsService::new(store.clone());

        let history = service.historical_sentiment(1, 5, 100).await.unwrap();
        assert_eq!(history.instrument_id, 1);
        assert!(history.buckets.is_empty());
    }

    #[tokio::test]
    async fn historical_aggregates_recent_days() {
        let store = Arc::new(MemoryStore::default());
        store.seed_instrument(seeded_instrument(1, "ACME"));
        store.seed_observation(seeded_observation(
            1,
            1,
            0.8,
            SentimentCategory::Positive,
            hours_ago(2),
        ));
        store.seed_observation(seeded_observation(
            2,
            1,
            0.4,
            SentimentCategory::Positive,
            hours_ago(1),
        ));
        let service = AnalyticsService::new(store.clone());

        let history = service.historical_sentiment(1, 7, 100).await.unwrap();
        // Both observations are within the same few hours; one or two
        // buckets depending on a midnight crossing, but the totals hold.
        let total: usize = history.buckets.iter().map(|b| b.count).sum();
        assert_eq!(total, 2);
        for bucket in &history.buckets {
            assert!((-1.0..=1.0).contains(&bucket.mean_score));
        }
    }

    #[tokio::test]
    async fn resolver_picks_most_recent_observation() {
        let store = Arc::new(MemoryStore::default());
        store.seed_instrument(seeded_instrument(1, "ACME"));
        store.seed_observation(seeded_observation(
            1,
            1,
            0.3,
            SentimentCategory::Neutral,
            hours_ago(2),
        ));
        store.seed_observation(seeded_observation(
            2,
            1,
            0.65,
            SentimentCategory::Positive,
            hours_ago(1),
        ));
        let service = AnalyticsService::new(store.clone());

        let rows = service.instruments_with_sentiment().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].current_score, Some(0.65));
        assert_eq!(rows[0].current_category, Some(SentimentCategory::Positive));
    }

    #[tokio::test]
    async fn resolver_breaks_timestamp_ties_by_highest_id() {
        let store = Arc::new(MemoryStore::default());
        store.seed_instrument(seeded_instrument(1, "ACME"));
        let at = Utc.with_ymd_and_hms(2024, 3, 7, 12, 0, 0).unwrap();
        store.seed_observation(seeded_observation(7, 1, -0.5, SentimentCategory::Negative, at));
        store.seed_observation(seeded_observation(9, 1, 0.5, SentimentCategory::Positive, at));
        let service = AnalyticsService::new(store.clone());

        let rows = service.instruments_with_sentiment().await.unwrap();
        assert_eq!(rows[0].current_score, Some(0.5));
    }

    #[tokio::test]
    async fn resolver_lists_instruments_without_data() {
        let store = Arc::new(MemoryStore::default());
        store.seed_instrument(seeded_instrument(1, "ACME"));
        store.seed_instrument(seeded_instrument(2, "ZETA"));
        store.seed_observation(seeded_observation(
            1,
            1,
            0.2,
            SentimentCategory::Neutral,
            hours_ago(3),
        ));
        let service = AnalyticsService::new(store.clone());

        let rows = service.instruments_with_sentiment().await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].instrument.symbol, "ZETA");
        assert_eq!(rows[1].current_score, None);
        assert_eq!(rows[1].current_category, None);
    }
}
