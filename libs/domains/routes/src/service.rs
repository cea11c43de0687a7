//! Route Service

use pagination::{Page, PageRequest};
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{RouteError, RouteResult};
use crate::models::Route;
use crate::repository::RouteRepository;

pub struct RouteService<R: RouteRepository> {
    repository: Arc<R>,
}

impl<R: RouteRepository> RouteService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn get_route(&self, id: &str) -> RouteResult<Option<Route>> {
        self.repository.get_by_id(id).await
    }

    #[instrument(skip(self))]
    pub async fn list_routes(&self, page: PageRequest) -> RouteResult<Page<Route>> {
        self.repository.list(page.normalize()).await
    }

    #[instrument(skip(self, route))]
    pub async fn create_route(&self, id: &str, mut route: Route) -> RouteResult<Route> {
        route.id = id.to_string();
        route
            .validate()
            .map_err(|e| RouteError::Validation(e.to_string()))?;
        self.repository.create(route).await
    }

    #[instrument(skip(self, route))]
    pub async fn update_route(&self, id: &str, mut route: Route) -> RouteResult<Route> {
        route.id = id.to_string();
        route
            .validate()
            .map_err(|e| RouteError::Validation(e.to_string()))?;
        self.repository.update(route).await
    }

    #[instrument(skip(self))]
    pub async fn delete_route(&self, id: &str) -> RouteResult<()> {
        self.repository.delete(id).await
    }
}

impl<R: RouteRepository> Clone for RouteService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Schedule;
    use crate::repository::MockRouteRepository;

    fn route(id: &str) -> Route {
        Route {
            id: id.to_string(),
            kind: "route".into(),
            airline: "AF".into(),
            airline_id: "airline_137".into(),
            source_airport: "TLV".into(),
            destination_airport: "MRS".into(),
            stops: 0,
            equipment: "320".into(),
            schedule: vec![Schedule {
                day: 0,
                flight: "AF198".into(),
                utc: "10:13:00".into(),
            }],
            distance: 2881.6,
        }
    }

    #[tokio::test]
    async fn test_update_uses_path_id() {
        let mut mock = MockRouteRepository::new();
        mock.expect_update()
            .withf(|r| r.id == "route_10000")
            .returning(Ok);

        let service = RouteService::new(mock);
        let updated = service
            .update_route("route_10000", route("route_1"))
            .await
            .unwrap();
        assert_eq!(updated.id, "route_10000");
    }

    #[tokio::test]
    async fn test_create_with_blank_schedule_entry_fails() {
        let mut mock = MockRouteRepository::new();
        mock.expect_create().never();

        let mut invalid = route("");
        invalid.schedule[0].utc = String::new();

        let service = RouteService::new(mock);
        assert!(matches!(
            service.create_route("route_1", invalid).await,
            Err(RouteError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_get_missing_is_none() {
        let mut mock = MockRouteRepository::new();
        mock.expect_get_by_id().returning(|_| Ok(None));

        let service = RouteService::new(mock);
        assert!(service.get_route("route_404").await.unwrap().is_none());
    }
}
