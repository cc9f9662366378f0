//! Error types for the aggregation service
//!
//! Provides unified error handling using thiserror. Cache misses are not
//! errors; these cover request validation and the upstream collaborators.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Api Error Enum ==
/// Unified error type for request handlers and providers.
#[derive(Error, Debug)]
pub enum ApiError {
    /// A required query parameter was not supplied
    #[error("{0} parameter is required")]
    MissingParameter(&'static str),

    /// Timezone abbreviation is not in the lookup table
    #[error("unsupported timezone abbreviation: {0}")]
    InvalidTimezone(String),

    /// Nothing to return for the request
    #[error("{0}")]
    NotFound(String),

    /// Provider credentials are not configured
    #[error("{0} API key not configured")]
    MissingApiKey(&'static str),

    /// Upstream provider answered with a non-success status
    #[error("{provider} API request failed with status: {status}")]
    Upstream { provider: &'static str, status: u16 },

    /// Transport failure talking to an upstream provider
    #[error("upstream request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Local data file could not be read
    #[error("error reading data: {0}")]
    Io(#[from] std::io::Error),

    /// Local or upstream JSON could not be parsed
    #[error("error parsing data: {0}")]
    Json(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingParameter(_) | ApiError::InvalidTimezone(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Upstream { .. } | ApiError::Http(_) => StatusCode::BAD_GATEWAY,
            ApiError::MissingApiKey(_) | ApiError::Io(_) | ApiError::Json(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(error = %self, "request rejected");
        }

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the service.
pub type Result<T> = std::result::Result<T, ApiError>;
