//! Service layer for marketmood
//!
//! Centralizes business logic between the HTTP handlers and storage: the
//! daily aggregator, the latest-state resolver, observation ingestion with
//! its referential check, and instrument CRUD orchestration.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

pub mod analytics;
mod analytics_service;
mod error;
mod instrument_service;
mod observation_service;
#[cfg(test)]
mod test_store;

pub use analytics_service::AnalyticsService;
pub use error::ServiceError;
pub use instrument_service::InstrumentService;
pub use observation_service::ObservationService;
