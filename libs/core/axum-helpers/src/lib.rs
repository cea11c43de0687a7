//! # Axum Helpers
//!
//! Shared web plumbing for the travel API crates.
//!
//! - **[`errors`]**: [`AppError`] and its status-only responses
//! - **[`extractors`]**: [`ValidatedJson`], [`QueryParams`], [`UuidPath`]
//! - **[`http`]**: CORS and security-header middleware
//! - **[`server`]**: router assembly with OpenAPI docs, health/readiness
//!   endpoints, graceful shutdown
//! - **[`validation`]**: shared `validator` rules

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;
pub mod validation;

pub use errors::{AppError, ErrorCode};
pub use extractors::{QueryParams, UuidPath, ValidatedJson};
pub use http::{cors_layer_from_env, security_headers};
pub use server::{
    HealthCheckFuture, HealthResponse, ReadyResponse, ShutdownCoordinator, create_production_app,
    create_router, health_router, run_health_checks, shutdown_signal,
};
