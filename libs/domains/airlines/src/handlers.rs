use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{QueryParams, ValidatedJson};
use pagination::{Page, PageRequest};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{AirlineError, AirlineResult};
use crate::models::{Airline, CountryQuery, DestinationQuery};
use crate::repository::AirlineRepository;
use crate::service::AirlineService;

#[derive(OpenApi)]
#[openapi(
    paths(
        list_airlines,
        list_by_country,
        list_by_country_path,
        list_by_destination,
        list_by_destination_path,
        get_airline,
        create_airline,
        update_airline,
        delete_airline,
    ),
    components(schemas(Airline)),
    tags(
        (name = "Airlines", description = "Airline documents")
    )
)]
pub struct ApiDoc;

/// Airline routes, to be nested under `/api/v1/airline`
pub fn router<R: AirlineRepository + 'static>(service: AirlineService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/list", get(list_airlines))
        .route("/country", get(list_by_country))
        .route("/country/{country}", get(list_by_country_path))
        .route("/destination", get(list_by_destination))
        .route(
            "/destination/{destinationAirport}",
            get(list_by_destination_path),
        )
        .route(
            "/{id}",
            get(get_airline)
                .post(create_airline)
                .put(update_airline)
                .delete(delete_airline),
        )
        .with_state(shared_service)
}

/// List all airlines
#[utoipa::path(
    get,
    path = "/list",
    tag = "Airlines",
    params(PageRequest),
    responses(
        (status = 200, description = "Page of airlines", body = Page<Airline>),
        (status = 400, description = "Malformed paging parameters"),
        (status = 500, description = "Database failure")
    )
)]
async fn list_airlines<R: AirlineRepository>(
    State(service): State<Arc<AirlineService<R>>>,
    QueryParams(page): QueryParams<PageRequest>,
) -> AirlineResult<Json<Page<Airline>>> {
    Ok(Json(service.list_airlines(page).await?))
}

/// Airlines registered in a country
#[utoipa::path(
    get,
    path = "/country",
    tag = "Airlines",
    params(CountryQuery, PageRequest),
    responses(
        (status = 200, description = "Page of airlines", body = Page<Airline>),
        (status = 400, description = "Missing country"),
        (status = 500, description = "Database failure")
    )
)]
async fn list_by_country<R: AirlineRepository>(
    State(service): State<Arc<AirlineService<R>>>,
    QueryParams(query): QueryParams<CountryQuery>,
    QueryParams(page): QueryParams<PageRequest>,
) -> AirlineResult<Json<Page<Airline>>> {
    Ok(Json(service.list_by_country(&query.country, page).await?))
}

/// Airlines registered in a country, country given in the path
#[utoipa::path(
    get,
    path = "/country/{country}",
    tag = "Airlines",
    params(
        ("country" = String, Path, description = "Country name", example = "United States"),
        PageRequest
    ),
    responses(
        (status = 200, description = "Page of airlines", body = Page<Airline>),
        (status = 500, description = "Database failure")
    )
)]
async fn list_by_country_path<R: AirlineRepository>(
    State(service): State<Arc<AirlineService<R>>>,
    Path(country): Path<String>,
    QueryParams(page): QueryParams<PageRequest>,
) -> AirlineResult<Json<Page<Airline>>> {
    Ok(Json(service.list_by_country(&country, page).await?))
}

/// Airlines flying into an airport
#[utoipa::path(
    get,
    path = "/destination",
    tag = "Airlines",
    params(DestinationQuery, PageRequest),
    responses(
        (status = 200, description = "Page of airlines", body = Page<Airline>),
        (status = 400, description = "Missing destinationAirport"),
        (status = 500, description = "Database failure")
    )
)]
async fn list_by_destination<R: AirlineRepository>(
    State(service): State<Arc<AirlineService<R>>>,
    QueryParams(query): QueryParams<DestinationQuery>,
    QueryParams(page): QueryParams<PageRequest>,
) -> AirlineResult<Json<Page<Airline>>> {
    let airlines = service
        .list_by_destination_airport(&query.destination_airport, page)
        .await?;
    Ok(Json(airlines))
}

/// Airlines flying into an airport, airport given in the path
#[utoipa::path(
    get,
    path = "/destination/{destinationAirport}",
    tag = "Airlines",
    params(
        ("destinationAirport" = String, Path, description = "Airport FAA code", example = "SFO"),
        PageRequest
    ),
    responses(
        (status = 200, description = "Page of airlines", body = Page<Airline>),
        (status = 500, description = "Database failure")
    )
)]
async fn list_by_destination_path<R: AirlineRepository>(
    State(service): State<Arc<AirlineService<R>>>,
    Path(airport): Path<String>,
    QueryParams(page): QueryParams<PageRequest>,
) -> AirlineResult<Json<Page<Airline>>> {
    Ok(Json(
        service.list_by_destination_airport(&airport, page).await?,
    ))
}

/// Get an airline by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Airlines",
    params(
        ("id" = String, Path, description = "Airline id", example = "airline_10")
    ),
    responses(
        (status = 200, description = "Airline found", body = Airline),
        (status = 404, description = "No airline with this id"),
        (status = 500, description = "Database failure")
    )
)]
async fn get_airline<R: AirlineRepository>(
    State(service): State<Arc<AirlineService<R>>>,
    Path(id): Path<String>,
) -> AirlineResult<Json<Airline>> {
    service
        .get_airline(&id)
        .await?
        .map(Json)
        .ok_or(AirlineError::NotFound(id))
}

/// Create an airline under the given id
#[utoipa::path(
    post,
    path = "/{id}",
    tag = "Airlines",
    params(
        ("id" = String, Path, description = "Airline id", example = "airline_10")
    ),
    request_body = Airline,
    responses(
        (status = 201, description = "Airline created", body = Airline),
        (status = 400, description = "Invalid airline"),
        (status = 409, description = "Id already taken"),
        (status = 500, description = "Database failure")
    )
)]
async fn create_airline<R: AirlineRepository>(
    State(service): State<Arc<AirlineService<R>>>,
    Path(id): Path<String>,
    ValidatedJson(airline): ValidatedJson<Airline>,
) -> AirlineResult<impl IntoResponse> {
    let airline = service.create_airline(&id, airline).await?;
    Ok((StatusCode::CREATED, Json(airline)))
}

/// Replace an airline
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Airlines",
    params(
        ("id" = String, Path, description = "Airline id", example = "airline_10")
    ),
    request_body = Airline,
    responses(
        (status = 200, description = "Airline replaced", body = Airline),
        (status = 400, description = "Invalid airline"),
        (status = 404, description = "No airline with this id"),
        (status = 500, description = "Database failure")
    )
)]
async fn update_airline<R: AirlineRepository>(
    State(service): State<Arc<AirlineService<R>>>,
    Path(id): Path<String>,
    ValidatedJson(airline): ValidatedJson<Airline>,
) -> AirlineResult<Json<Airline>> {
    Ok(Json(service.update_airline(&id, airline).await?))
}

/// Delete an airline
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Airlines",
    params(
        ("id" = String, Path, description = "Airline id", example = "airline_10")
    ),
    responses(
        (status = 204, description = "Airline deleted"),
        (status = 404, description = "No airline with this id"),
        (status = 500, description = "Database failure")
    )
)]
async fn delete_airline<R: AirlineRepository>(
    State(service): State<Arc<AirlineService<R>>>,
    Path(id): Path<String>,
) -> AirlineResult<impl IntoResponse> {
    service.delete_airline(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
