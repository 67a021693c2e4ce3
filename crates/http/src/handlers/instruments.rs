use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use marketmood_core::{Instrument, InstrumentPatch, InstrumentWithSentiment};

use crate::api_error::ApiError;
use crate::query_types::{validate_patch, CreateInstrumentRequest};
use crate::AppState;

pub async fn create_instrument(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateInstrumentRequest>,
) -> Result<(StatusCode, Json<Instrument>), ApiError> {
    req.validate().map_err(ApiError::BadRequest)?;
    let instrument = state.instruments.create(req.into_input()).await?;
    Ok((StatusCode::CREATED, Json(instrument)))
}

pub async fn list_instruments(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Instrument>>, ApiError> {
    Ok(Json(state.instruments.list().await?))
}

pub async fn get_instrument(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<Instrument>, ApiError> {
    Ok(Json(state.instruments.get(id).await?))
}

pub async fn update_instrument(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(patch): Json<InstrumentPatch>,
) -> Result<Json<Instrument>, ApiError> {
    validate_patch(&patch).map_err(ApiError::BadRequest)?;
    Ok(Json(state.instruments.update(id, patch).await?))
}

/// Latest-state resolver: every tracked instrument with its most recent
/// observation attached, or nulls when it has none.
pub async fn instruments_with_sentiment(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<InstrumentWithSentiment>>, ApiError> {
    Ok(Json(state.analytics.instruments_with_sentiment().await?))
}
