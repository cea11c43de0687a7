//! Routes Domain
//!
//! Route documents from the `route` collection: which airline flies between
//! two airports, with equipment, distance and the weekly schedule.

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{RouteError, RouteResult};
pub use handlers::ApiDoc;
pub use models::{Route, Schedule};
pub use mongodb::MongoRouteRepository;
pub use repository::RouteRepository;
pub use service::RouteService;
