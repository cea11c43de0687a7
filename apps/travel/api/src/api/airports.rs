use axum::Router;
use domain_airports::{AirportService, MongoAirportRepository, handlers};

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let repository = MongoAirportRepository::new(&state.db);
    handlers::router(AirportService::new(repository))
}
