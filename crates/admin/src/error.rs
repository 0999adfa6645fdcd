//! Unified error handling for the dashboard server.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::saleor::SaleorError;

/// Application-level error type for request handlers.
#[derive(Debug, Error)]
pub enum AppError {
    /// Saleor API call failed.
    #[error("Saleor error: {0}")]
    Saleor(#[from] SaleorError),

    /// Template rendering failed.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Saleor(SaleorError::Contract(_)) | Self::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Saleor(SaleorError::UnknownEntry(_)) | Self::NotFound(_) => {
                StatusCode::NOT_FOUND
            }
            Self::Saleor(_) => StatusCode::BAD_GATEWAY,
            Self::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Dashboard request error"
            );
        }

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Template(_) => "Internal server error".to_string(),
            Self::Saleor(SaleorError::Contract(_) | SaleorError::UnknownEntry(_)) => {
                self.to_string()
            }
            Self::Saleor(_) => "External service error".to_string(),
            _ => self.to_string(),
        };

        (status, message).into_response()
    }
}
