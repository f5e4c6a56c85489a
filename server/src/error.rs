use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid date format")]
    InvalidDate,

    #[error("Unknown expert or token")]
    UnknownSubmission,

    #[error("No feedback was provided")]
    EmptyFeedback,

    #[error("Feedback ledger is not configured")]
    LedgerUnavailable,

    #[error("Database error: {0}")]
    Database(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Ledger error: {0}")]
    Ledger(#[from] ledger::LedgerError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::InvalidDate | AppError::UnknownSubmission | AppError::EmptyFeedback => {
                StatusCode::BAD_REQUEST
            }
            AppError::LedgerUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Ledger { .. } => StatusCode::BAD_GATEWAY,
            AppError::Database { .. } | AppError::Serialization { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        if status.is_server_error() {
            error!("{self}");
        }

        (status, self.to_string()).into_response()
    }
}
