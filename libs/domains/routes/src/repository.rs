use async_trait::async_trait;
use pagination::{Page, PageRequest};

use crate::error::RouteResult;
use crate::models::Route;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RouteRepository: Send + Sync {
    async fn get_by_id(&self, id: &str) -> RouteResult<Option<Route>>;

    async fn list(&self, page: PageRequest) -> RouteResult<Page<Route>>;

    async fn create(&self, route: Route) -> RouteResult<Route>;

    async fn update(&self, route: Route) -> RouteResult<Route>;

    async fn delete(&self, id: &str) -> RouteResult<()>;
}
