//! HTTP routes of the travel API.
//!
//! Entity routes live under `/api/v1`; profiles under `/profile`.

pub mod airlines;
pub mod airports;
pub mod health;
pub mod profiles;
pub mod routes;

use axum::Router;

use crate::state::AppState;

pub fn routes(state: &AppState) -> Router {
    let v1 = Router::new()
        .nest("/airline", airlines::router(state))
        .nest("/airport", airports::router(state))
        .nest("/route", routes::router(state));

    Router::new()
        .nest("/api/v1", v1)
        .nest("/profile", profiles::router(state))
        .merge(health::router(state.clone()))
}
