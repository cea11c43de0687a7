use async_trait::async_trait;
use pagination::{Page, PageRequest, Slice};

use crate::error::AirportResult;
use crate::models::Airport;

/// Persistence interface for airports
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AirportRepository: Send + Sync {
    async fn get_by_id(&self, id: &str) -> AirportResult<Option<Airport>>;

    /// All airports ordered by id
    async fn list(&self, page: PageRequest) -> AirportResult<Page<Airport>>;

    /// Destination codes reachable from `airport` without stops, in code order
    async fn direct_connections(
        &self,
        airport: &str,
        page: PageRequest,
    ) -> AirportResult<Slice<String>>;

    async fn create(&self, airport: Airport) -> AirportResult<Airport>;

    async fn update(&self, airport: Airport) -> AirportResult<Airport>;

    async fn delete(&self, id: &str) -> AirportResult<()>;
}
