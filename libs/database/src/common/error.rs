/// Errors raised while connecting to or probing the document store
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Error reported by the MongoDB driver
    #[cfg(feature = "mongodb")]
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    /// Connection could not be established (after retries, if any)
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Server reachable but did not answer the health probe
    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),
}

pub type DatabaseResult<T> = Result<T, DatabaseError>;
