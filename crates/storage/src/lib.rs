//! Storage layer for marketmood
//!
//! PostgreSQL-backed, append-only observation store plus the instrument
//! table it references. Query components read through the traits in
//! [`traits`]; nothing in this crate mutates observations after insert.

mod error;
mod migrations;
mod postgres;
pub mod traits;

pub use error::StorageError;
pub use migrations::run_migrations;
pub use postgres::PgStorage;
pub use traits::{InstrumentStore, ObservationStore, SentimentStore};
