//! Shared constants for marketmood.
//!
//! Centralizes query bounds and pool sizing so they are not duplicated
//! across the storage, service, and http crates.

/// Default trailing window for sentiment queries, in days.
pub const DEFAULT_WINDOW_DAYS: u32 = 30;

/// Maximum trailing window for sentiment queries, in days.
pub const MAX_WINDOW_DAYS: u32 = 365;

/// Default number of results when the caller does not specify a limit.
pub const DEFAULT_QUERY_LIMIT: usize = 100;

/// Maximum number of results for any query (DoS protection).
pub const MAX_QUERY_LIMIT: usize = 1000;

/// Maximum length of an instrument symbol.
pub const MAX_SYMBOL_LEN: usize = 10;

/// PostgreSQL connection pool: maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 20;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;

/// Default HTTP listen port when `SERVER_PORT` is not set.
pub const DEFAULT_SERVER_PORT: u16 = 2022;
