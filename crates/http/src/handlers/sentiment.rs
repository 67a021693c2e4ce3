use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

use marketmood_core::{HistoricalSentiment, Observation};

use crate::api_error::ApiError;
use crate::query_types::{CreateObservationRequest, SentimentQuery};
use crate::AppState;

pub async fn record_observation(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateObservationRequest>,
) -> Result<(StatusCode, Json<Observation>), ApiError> {
    req.validate().map_err(ApiError::BadRequest)?;
    let observation = state.observations.record(req.into_input()).await?;
    Ok((StatusCode::CREATED, Json(observation)))
}

pub async fn get_observations(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SentimentQuery>,
) -> Result<Json<Vec<Observation>>, ApiError> {
    query.validate().map_err(ApiError::BadRequest)?;
    let observations =
        state.observations.recent(query.instrument_id, query.days, query.limit).await?;
    Ok(Json(observations))
}

/// Daily aggregator: one bucket per calendar day with data, oldest first.
pub async fn get_history(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SentimentQuery>,
) -> Result<Json<HistoricalSentiment>, ApiError> {
    query.validate().map_err(ApiError::BadRequest)?;
    let history =
        state.analytics.historical_sentiment(query.instrument_id, query.days, query.limit).await?;
    Ok(Json(history))
}
