use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

use crate::core::response::MessageResponse;

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Request body is missing or has the wrong shape
    #[error("{0}")]
    Validation(String),

    /// An individual variant element in a multi-variant payload is invalid
    #[error("{0}")]
    UnprocessableEntity(String),

    /// Referenced product or variant does not exist
    #[error("{0}")]
    NotFound(String),

    /// Client supplied a string that is not a well-formed identifier.
    /// Surfaced to clients exactly like a missing entity, but kept as its
    /// own variant so logs can tell the two cases apart.
    #[error("{entity} not found")]
    InvalidIdentifier { entity: &'static str },

    /// Document store operation errors
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// BSON serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] mongodb::bson::ser::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal server errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();

        let message = if status_code == StatusCode::INTERNAL_SERVER_ERROR {
            // Log the cause server-side, never leak it to the client
            tracing::error!(error = %self, "request failed");
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        HttpResponse::build(status_code).json(MessageResponse::new(message))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) | AppError::InvalidIdentifier { .. } => StatusCode::NOT_FOUND,
            AppError::Database(_)
            | AppError::Serialization(_)
            | AppError::Configuration(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn unprocessable(msg: impl Into<String>) -> Self {
        AppError::UnprocessableEntity(msg.into())
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        AppError::NotFound(resource.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
