use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("Route not found: {0}")]
    NotFound(String),

    #[error("Route '{0}' already exists")]
    AlreadyExists(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type RouteResult<T> = Result<T, RouteError>;

impl From<RouteError> for AppError {
    fn from(err: RouteError) -> Self {
        match err {
            RouteError::NotFound(id) => AppError::NotFound(format!("Route {} not found", id)),
            RouteError::AlreadyExists(id) => {
                AppError::Conflict(format!("Route '{}' already exists", id))
            }
            RouteError::Validation(msg) => AppError::BadRequest(msg),
            RouteError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl IntoResponse for RouteError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

impl From<mongodb::error::Error> for RouteError {
    fn from(err: mongodb::error::Error) -> Self {
        RouteError::Database(err.to_string())
    }
}
