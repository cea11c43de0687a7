//! Airline Service - validation and id handling on top of the repository

use pagination::{Page, PageRequest};
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{AirlineError, AirlineResult};
use crate::models::Airline;
use crate::repository::AirlineRepository;

pub struct AirlineService<R: AirlineRepository> {
    repository: Arc<R>,
}

impl<R: AirlineRepository> AirlineService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn get_airline(&self, id: &str) -> AirlineResult<Option<Airline>> {
        self.repository.get_by_id(id).await
    }

    #[instrument(skip(self))]
    pub async fn list_airlines(&self, page: PageRequest) -> AirlineResult<Page<Airline>> {
        self.repository.list(page.normalize()).await
    }

    #[instrument(skip(self))]
    pub async fn list_by_country(
        &self,
        country: &str,
        page: PageRequest,
    ) -> AirlineResult<Page<Airline>> {
        self.repository
            .find_by_country(country, page.normalize())
            .await
    }

    #[instrument(skip(self))]
    pub async fn list_by_destination_airport(
        &self,
        airport: &str,
        page: PageRequest,
    ) -> AirlineResult<Page<Airline>> {
        self.repository
            .find_by_destination_airport(airport, page.normalize())
            .await
    }

    /// Store `airline` under `id`; any id in the body is replaced
    #[instrument(skip(self, airline))]
    pub async fn create_airline(&self, id: &str, mut airline: Airline) -> AirlineResult<Airline> {
        airline.id = id.to_string();
        airline
            .validate()
            .map_err(|e| AirlineError::Validation(e.to_string()))?;

        self.repository.create(airline).await
    }

    /// Replace the airline stored under `id`
    #[instrument(skip(self, airline))]
    pub async fn update_airline(&self, id: &str, mut airline: Airline) -> AirlineResult<Airline> {
        airline.id = id.to_string();
        airline
            .validate()
            .map_err(|e| AirlineError::Validation(e.to_string()))?;

        self.repository.update(airline).await
    }

    #[instrument(skip(self))]
    pub async fn delete_airline(&self, id: &str) -> AirlineResult<()> {
        self.repository.delete(id).await
    }
}

impl<R: AirlineRepository> Clone for AirlineService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
