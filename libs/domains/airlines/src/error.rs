use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AirlineError {
    #[error("Airline not found: {0}")]
    NotFound(String),

    #[error("Airline '{0}' already exists")]
    AlreadyExists(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type AirlineResult<T> = Result<T, AirlineError>;

impl From<AirlineError> for AppError {
    fn from(err: AirlineError) -> Self {
        match err {
            AirlineError::NotFound(id) => AppError::NotFound(format!("Airline {} not found", id)),
            AirlineError::AlreadyExists(id) => {
                AppError::Conflict(format!("Airline '{}' already exists", id))
            }
            AirlineError::Validation(msg) => AppError::BadRequest(msg),
            AirlineError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl IntoResponse for AirlineError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for AirlineError {
    fn from(err: mongodb::error::Error) -> Self {
        AirlineError::Database(err.to_string())
    }
}
