//! HTTP API server for marketmood.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

pub mod api_error;
mod handlers;
mod query_types;
mod response_types;

use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Json, Router,
};
use tower_http::cors::CorsLayer;

use marketmood_service::{AnalyticsService, InstrumentService, ObservationService};
use marketmood_storage::SentimentStore;

pub use response_types::VersionResponse;

/// Shared application state for all HTTP handlers.
pub struct AppState {
    /// Instrument CRUD.
    pub instruments: Arc<InstrumentService>,
    /// Observation ingestion and raw listing.
    pub observations: Arc<ObservationService>,
    /// Daily aggregation and latest-state resolution.
    pub analytics: Arc<AnalyticsService>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn SentimentStore>) -> Self {
        Self {
            instruments: Arc::new(InstrumentService::new(Arc::clone(&store))),
            observations: Arc::new(ObservationService::new(Arc::clone(&store))),
            analytics: Arc::new(AnalyticsService::new(store)),
        }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route("/api/instruments", post(handlers::instruments::create_instrument))
        .route("/api/instruments", get(handlers::instruments::list_instruments))
        .route(
            "/api/instruments/with-sentiment",
            get(handlers::instruments::instruments_with_sentiment),
        )
        .route("/api/instruments/{id}", get(handlers::instruments::get_instrument))
        .route("/api/instruments/{id}", put(handlers::instruments::update_instrument))
        .route("/api/sentiment", post(handlers::sentiment::record_observation))
        .route("/api/sentiment", get(handlers::sentiment::get_observations))
        .route("/api/sentiment/history", get(handlers::sentiment::get_history))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
