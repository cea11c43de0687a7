use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Profile not found: {0}")]
    NotFound(Uuid),

    #[error("Profile {0} already exists")]
    AlreadyExists(Uuid),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type ProfileResult<T> = Result<T, ProfileError>;

impl From<ProfileError> for AppError {
    fn from(err: ProfileError) -> Self {
        match err {
            ProfileError::NotFound(id) => AppError::NotFound(format!("Profile {} not found", id)),
            ProfileError::AlreadyExists(id) => {
                AppError::Conflict(format!("Profile {} already exists", id))
            }
            ProfileError::Validation(msg) => AppError::BadRequest(msg),
            ProfileError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl IntoResponse for ProfileError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for ProfileError {
    fn from(err: mongodb::error::Error) -> Self {
        ProfileError::Database(err.to_string())
    }
}
