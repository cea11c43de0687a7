//! OpenAPI document for the whole service

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Travel Sample API",
        version = "0.1.0",
        description = "Airlines, airports, routes and traveller profiles on MongoDB"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/v1/airline", api = domain_airlines::ApiDoc),
        (path = "/api/v1/airport", api = domain_airports::ApiDoc),
        (path = "/api/v1/route", api = domain_routes::ApiDoc),
        (path = "/profile", api = domain_profiles::ApiDoc)
    )
)]
pub struct ApiDoc;
