use crate::response::ApiResponse;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use database::DbError;
use thiserror::Error;
use validation::ValidationError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error(transparent)]
    Database(#[from] DbError),
}

/// Converts our custom `AppError` into an HTTP response.
///
/// The taxonomy: validation failures are 400 and never reached the store;
/// absent keys are 404; duplicate natural keys are 409 with a message
/// pointing the caller at the update endpoint; anything else from the store
/// is logged and masked into a generic 500.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            AppError::Conflict(message) => (StatusCode::CONFLICT, message),
            AppError::Database(DbError::Duplicate(code)) => (
                StatusCode::CONFLICT,
                format!(
                    "A record with code {code} already exists. Please use the update endpoint instead."
                ),
            ),
            AppError::Database(DbError::MissingReference(message)) => {
                (StatusCode::NOT_FOUND, message)
            }
            AppError::Database(db_err) => {
                tracing::error!(error = ?db_err, "Database error.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal database error occurred".to_string(),
                )
            }
        };

        (status, Json(ApiResponse::failure(message))).into_response()
    }
}
