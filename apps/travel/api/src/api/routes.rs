use axum::Router;
use domain_routes::{MongoRouteRepository, RouteService, handlers};

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let repository = MongoRouteRepository::new(&state.db);
    handlers::router(RouteService::new(repository))
}
