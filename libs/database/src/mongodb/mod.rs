//! MongoDB connector, health probe and error classification

mod config;
mod connector;
mod errors;
mod health;

pub use config::MongoConfig;
pub use connector::{connect_from_config, connect_from_config_with_retry};
pub use errors::{DUPLICATE_KEY_CODE, is_duplicate_key};
pub use health::ping;

pub use mongodb::{Client, Collection, Database};
