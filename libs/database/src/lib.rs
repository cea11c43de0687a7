//! Document-store connectivity shared by the API binary and the domain crates.
//!
//! # Features
//!
//! - `mongodb` - MongoDB connector, health checks and error helpers
//! - `config` - `core_config::FromEnv` support for [`mongodb::MongoConfig`]
//! - `all` - everything above
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb::{MongoConfig, connect_from_config_with_retry};
//!
//! let config = MongoConfig::with_database("mongodb://localhost:27017", "travel-sample");
//! let client = connect_from_config_with_retry(&config, None).await?;
//! let db = client.database(config.database());
//! ```

pub mod common;

#[cfg(feature = "mongodb")]
pub mod mongodb;

pub use common::{DatabaseError, DatabaseResult};
