use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AirportError {
    #[error("Airport not found: {0}")]
    NotFound(String),

    #[error("Airport '{0}' already exists")]
    AlreadyExists(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type AirportResult<T> = Result<T, AirportError>;

impl From<AirportError> for AppError {
    fn from(err: AirportError) -> Self {
        match err {
            AirportError::NotFound(id) => AppError::NotFound(format!("Airport {} not found", id)),
            AirportError::AlreadyExists(id) => {
                AppError::Conflict(format!("Airport '{}' already exists", id))
            }
            AirportError::Validation(msg) => AppError::BadRequest(msg),
            AirportError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl IntoResponse for AirportError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for AirportError {
    fn from(err: mongodb::error::Error) -> Self {
        AirportError::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_validation_error_is_bad_request() {
        let response = AirportError::Validation("faa: regex".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_already_exists_is_conflict() {
        let err: AppError = AirportError::AlreadyExists("airport_1254".into()).into();
        assert_eq!(err.status(), StatusCode::CONFLICT);
    }
}
