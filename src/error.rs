//! Application error type and its HTTP mapping.
//!
//! Every failure is converted into a JSON body of the form
//! `{"error": "<message>"}` at the handler boundary.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::domain::fetcher::FetchError;

/// JSON error body returned to clients.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Required input is missing or malformed. Maps to 400.
    #[error("{message}")]
    Validation { message: String },

    /// The upstream page answered with a non-2xx status. Maps to 500.
    #[error("Failed to fetch page: {status}")]
    UpstreamStatus { status: u16 },

    /// DNS, connection or timeout failure while fetching. Maps to 500.
    #[error("{message}")]
    Transport { message: String },

    /// Anything else. Maps to 500.
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::UpstreamStatus { .. }
            | AppError::Transport { .. }
            | AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<FetchError> for AppError {
    fn from(e: FetchError) -> Self {
        match e {
            FetchError::Status(status) => AppError::UpstreamStatus { status },
            FetchError::Transport(message) => AppError::Transport { message },
            other @ FetchError::Body(_) => AppError::Internal {
                message: other.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
