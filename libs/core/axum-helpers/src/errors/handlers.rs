use axum::{http::StatusCode, response::IntoResponse};

/// Router fallback: bare 404 for unknown paths
pub async fn not_found() -> impl IntoResponse {
    StatusCode::NOT_FOUND
}
