//! TMDB wire types.

use std::fmt;

use serde::Deserialize;

/// TMDB error document (`{"status_code": 7, "status_message": "...", "success": false}`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TmdbErrorResponse {
    /// TMDB-specific error code.
    pub status_code: u32,
    /// Human-readable message.
    pub status_message: String,
    /// Always false on errors.
    #[serde(default)]
    pub success: bool,
}

/// How requests authenticate against TMDB.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// v4 read access token, sent as `Authorization: Bearer ...`.
    Bearer(String),
    /// v3 API key, sent as the `api_key` query parameter.
    ApiKey(String),
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bearer(_) => f.write_str("Bearer(***)"),
            Self::ApiKey(_) => f.write_str("ApiKey(***)"),
        }
    }
}
