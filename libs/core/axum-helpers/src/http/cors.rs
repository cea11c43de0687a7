use axum::http::{HeaderValue, Method, header};
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::info;

const CORS_ENV: &str = "CORS_ALLOWED_ORIGIN";

/// CORS layer driven by `CORS_ALLOWED_ORIGIN`.
///
/// - unset: any origin, no credentials
/// - comma-separated list (e.g. `http://localhost:3000,https://app.example.com`):
///   only those origins
///
/// # Errors
/// The variable is set but empty, or contains a value that is not a valid
/// header value.
pub fn cors_layer_from_env() -> io::Result<CorsLayer> {
    let base = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600));

    let Ok(raw) = std::env::var(CORS_ENV) else {
        info!("{} not set, allowing any origin", CORS_ENV);
        return Ok(base.allow_origin(Any));
    };

    let origins = parse_origins(&raw)?;
    info!(origins = %raw, "CORS restricted to configured origins");
    Ok(base.allow_origin(AllowOrigin::list(origins)))
}

fn parse_origins(raw: &str) -> io::Result<Vec<HeaderValue>> {
    let origins = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(HeaderValue::from_str)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid {} value: {}", CORS_ENV, e),
            )
        })?;

    if origins.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} cannot be empty", CORS_ENV),
        ));
    }

    Ok(origins)
}
