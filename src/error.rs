//! Domain error types for the compliance dashboard.
//!
//! Uses thiserror for ergonomic error handling with automatic Display implementations.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use std::fmt;

/// Application-level errors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Resource not found, neither live nor in the demo dataset
    #[error("{0} not found")]
    NotFound(String),

    /// Live backend answered with a non-2xx status
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// Connection, timeout or IO failure below the HTTP layer
    #[error("Transport error: {0}")]
    Transport(String),

    /// A successful response whose body has an unexpected shape
    #[error("Unexpected response body: {0}")]
    Decode(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl AppError {
    /// Whether the failure may be papered over with demo data.
    ///
    /// Only HTTP and transport failures qualify. Not-found, decode and
    /// validation errors always reach the caller.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AppError::Http { .. } | AppError::Transport(_))
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Http { status, .. } => StatusCode::from_u16(*status)
                .ok()
                .filter(|s| s.is_client_error() || s.is_server_error())
                .unwrap_or(StatusCode::BAD_GATEWAY),
            AppError::Transport(_) | AppError::Decode(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error_code = match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::Http { .. } => "UPSTREAM_ERROR",
            AppError::Transport(err_str) => {
                tracing::error!("Backend transport error: {}", err_str);
                "UPSTREAM_UNAVAILABLE"
            }
            AppError::Decode(err_str) => {
                tracing::error!("Backend returned malformed body: {}", err_str);
                "UPSTREAM_MALFORMED"
            }
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: error_code.to_string(),
            message: self.to_string(),
        })
    }
}

/// Error response body matching OpenAPI schema.
#[derive(Debug, serde::Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidInput(format!("JSON encoding error: {}", err))
    }
}

impl From<uuid::Error> for AppError {
    fn from(err: uuid::Error) -> Self {
        AppError::InvalidInput(format!("Invalid UUID: {}", err))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Transport(err.to_string())
    }
}
