//! Airlines Domain
//!
//! CRUD and lookup endpoints for airline documents stored in the `airline`
//! collection of the travel-sample database.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints under /api/v1/airline
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, id handling
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Trait + MongoDB implementation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Airline, query filters
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_airlines::{handlers, MongoAirlineRepository, AirlineService};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("travel-sample");
//!
//! let service = AirlineService::new(MongoAirlineRepository::new(&db));
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{AirlineError, AirlineResult};
pub use handlers::ApiDoc;
pub use models::{Airline, CountryQuery, DestinationQuery};
pub use mongodb::MongoAirlineRepository;
pub use repository::AirlineRepository;
pub use service::AirlineService;
