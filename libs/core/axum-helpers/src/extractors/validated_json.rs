//! JSON body extractor that runs `validator` checks before the handler.

use crate::errors::AppError;
use axum::{
    extract::{FromRequest, Json, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON body that has passed [`Validate::validate`].
///
/// Any failure (wrong content type, malformed JSON, missing field, failed
/// validation rule) is rejected with a bare 400 before the handler runs, so
/// nothing invalid reaches the repository.
///
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct Airline {
///     #[validate(length(min = 1))]
///     name: String,
/// }
///
/// async fn create(ValidatedJson(airline): ValidatedJson<Airline>) -> String {
///     airline.name
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        data.validate()
            .map_err(|e| AppError::from(e).into_response())?;

        Ok(ValidatedJson(data))
    }
}
