use axum::Router;
use domain_airlines::{AirlineService, MongoAirlineRepository, handlers};

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let repository = MongoAirlineRepository::new(&state.db);
    handlers::router(AirlineService::new(repository))
}
