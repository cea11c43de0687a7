//! Shared application state.

use mongodb::{Client, Database};

/// Handed to route builders and the readiness check.
///
/// `Client` and `Database` are cheap handles over one connection pool.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub mongo_client: Client,
    /// Database holding the travel collections
    pub db: Database,
}
