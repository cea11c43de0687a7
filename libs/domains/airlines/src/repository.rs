use async_trait::async_trait;
use pagination::{Page, PageRequest};

use crate::error::AirlineResult;
use crate::models::Airline;

/// Persistence interface for airlines
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AirlineRepository: Send + Sync {
    async fn get_by_id(&self, id: &str) -> AirlineResult<Option<Airline>>;

    /// All airlines ordered by id
    async fn list(&self, page: PageRequest) -> AirlineResult<Page<Airline>>;

    /// Airlines whose `country` equals `country` exactly
    async fn find_by_country(&self, country: &str, page: PageRequest)
    -> AirlineResult<Page<Airline>>;

    /// Airlines operating at least one route into `airport`
    async fn find_by_destination_airport(
        &self,
        airport: &str,
        page: PageRequest,
    ) -> AirlineResult<Page<Airline>>;

    /// Insert; `AlreadyExists` when the id is taken
    async fn create(&self, airline: Airline) -> AirlineResult<Airline>;

    /// Replace; `NotFound` when the id is absent
    async fn update(&self, airline: Airline) -> AirlineResult<Airline>;

    async fn delete(&self, id: &str) -> AirlineResult<()>;
}
