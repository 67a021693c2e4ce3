//! Response types (Serialize)
//!
//! Most endpoints serialize the core domain types directly; only the
//! shapes with no domain counterpart live here.

use serde::Serialize;

#[derive(Debug, Serialize)]
#[non_exhaustive]
pub struct VersionResponse {
    pub version: &'static str,
}
