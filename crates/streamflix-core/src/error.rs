//! Error types for catalog operations

use thiserror::Error;

/// Main error type for all catalog operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The remote call could not be completed (connection, DNS, TLS, ...)
    #[error("transport error: {0}")]
    Transport(String),

    /// The catalog service answered with a non-success status
    #[error("catalog API error (HTTP {status}): {message}")]
    Status { status: u16, message: String },

    /// The catalog service kept answering 429
    #[error("catalog API rate limit exceeded after {retries} retries")]
    RateLimited { retries: u32 },

    /// The response body could not be read or decoded
    #[error("decode error: {0}")]
    Decode(String),

    /// The readiness gate did not open in time
    #[error("catalog client unavailable: {0}")]
    DependencyUnavailable(String),

    /// Genre taxonomy could not be loaded
    #[error("genre load failed: {0}")]
    GenreLoad(String),

    /// Invalid configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

impl CatalogError {
    /// Whether this error came out of a remote call.
    ///
    /// These are the failures the facade replaces with fallback data.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            CatalogError::Transport(_)
                | CatalogError::Status { .. }
                | CatalogError::RateLimited { .. }
                | CatalogError::Decode(_)
                | CatalogError::Internal(_)
        )
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Decode(err.to_string())
    }
}

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CatalogError::Transport("connection refused".to_string());
        assert_eq!(err.to_string(), "transport error: connection refused");

        let err = CatalogError::Status {
            status: 401,
            message: "Invalid API key".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "catalog API error (HTTP 401): Invalid API key"
        );

        let err = CatalogError::RateLimited { retries: 3 };
        assert_eq!(
            err.to_string(),
            "catalog API rate limit exceeded after 3 retries"
        );
    }

    #[test]
    fn test_transport_classification() {
        assert!(CatalogError::Decode("eof".into()).is_transport());
        assert!(CatalogError::RateLimited { retries: 1 }.is_transport());
        assert!(!CatalogError::DependencyUnavailable("timeout".into()).is_transport());
        assert!(!CatalogError::Config("missing token".into()).is_transport());
    }

    #[test]
    fn test_from_serde_json() {
        let err = serde_json::from_str::<u32>("nope").unwrap_err();
        let converted: CatalogError = err.into();
        assert!(matches!(converted, CatalogError::Decode(_)));
    }
}
