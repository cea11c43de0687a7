//! Airports Domain
//!
//! Airport documents from the `airport` collection, plus the
//! direct-connection lookup over the `route` collection.
//!
//! ```rust,no_run
//! use domain_airports::{handlers, AirportService, MongoAirportRepository};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("travel-sample");
//!
//! let router = handlers::router(AirportService::new(MongoAirportRepository::new(&db)));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{AirportError, AirportResult};
pub use handlers::ApiDoc;
pub use models::{Airport, DirectConnectionsQuery, Geo};
pub use mongodb::MongoAirportRepository;
pub use repository::AirportRepository;
pub use service::AirportService;
