//! Core types for marketmood
//!
//! This crate contains domain types shared across all other crates.

mod config;
mod constants;
mod instrument;
mod sentiment;
mod trend;

pub use config::*;
pub use constants::*;
pub use instrument::*;
pub use sentiment::*;
pub use trend::*;
