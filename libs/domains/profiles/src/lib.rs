//! Profiles Domain
//!
//! Traveller profiles keyed by server-generated UUIDs, stored in the
//! `profile` collection and served under `/profile`.
//!
//! Unlike the travel-sample entities, the list endpoint returns a bare JSON
//! array (or `204 No Content` when nothing matches) and supports a free-text
//! `query` over first name, last name and address.

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{ProfileError, ProfileResult};
pub use handlers::ApiDoc;
pub use models::{Profile, ProfileInput, ProfileQuery};
pub use mongodb::MongoProfileRepository;
pub use repository::ProfileRepository;
pub use service::ProfileService;
