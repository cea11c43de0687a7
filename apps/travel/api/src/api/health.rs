//! Readiness endpoint backed by a MongoDB ping

use axum::{Router, extract::State, response::Response, routing::get};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(state)
}

/// 200 when MongoDB answers a ping, 503 otherwise
async fn readiness_check(State(state): State<AppState>) -> Response {
    let client = &state.mongo_client;
    let checks: Vec<(&str, HealthCheckFuture)> = vec![(
        "mongodb",
        Box::pin(async move {
            database::mongodb::ping(client)
                .await
                .map(|latency| tracing::debug!(?latency, "MongoDB ping"))
                .map_err(|e| e.to_string())
        }),
    )];

    run_health_checks(checks).await
}
