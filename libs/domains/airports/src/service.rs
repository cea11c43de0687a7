//! Airport Service

use pagination::{Page, PageRequest, Slice};
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{AirportError, AirportResult};
use crate::models::Airport;
use crate::repository::AirportRepository;

pub struct AirportService<R: AirportRepository> {
    repository: Arc<R>,
}

impl<R: AirportRepository> AirportService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn get_airport(&self, id: &str) -> AirportResult<Option<Airport>> {
        self.repository.get_by_id(id).await
    }

    #[instrument(skip(self))]
    pub async fn list_airports(&self, page: PageRequest) -> AirportResult<Page<Airport>> {
        self.repository.list(page.normalize()).await
    }

    /// Airports reachable from `airport` on a non-stop route
    #[instrument(skip(self))]
    pub async fn direct_connections(
        &self,
        airport: &str,
        page: PageRequest,
    ) -> AirportResult<Slice<String>> {
        self.repository
            .direct_connections(airport, page.normalize())
            .await
    }

    #[instrument(skip(self, airport))]
    pub async fn create_airport(&self, id: &str, mut airport: Airport) -> AirportResult<Airport> {
        airport.id = id.to_string();
        Self::validate(&airport)?;
        self.repository.create(airport).await
    }

    #[instrument(skip(self, airport))]
    pub async fn update_airport(&self, id: &str, mut airport: Airport) -> AirportResult<Airport> {
        airport.id = id.to_string();
        Self::validate(&airport)?;
        self.repository.update(airport).await
    }

    #[instrument(skip(self))]
    pub async fn delete_airport(&self, id: &str) -> AirportResult<()> {
        self.repository.delete(id).await
    }

    fn validate(airport: &Airport) -> AirportResult<()> {
        airport
            .validate()
            .map_err(|e| AirportError::Validation(e.to_string()))
    }
}

impl<R: AirportRepository> Clone for AirportService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
