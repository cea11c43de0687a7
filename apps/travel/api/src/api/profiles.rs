use axum::Router;
use domain_profiles::{MongoProfileRepository, ProfileService, handlers};

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let repository = MongoProfileRepository::new(&state.db);
    handlers::router(ProfileService::new(repository))
}
