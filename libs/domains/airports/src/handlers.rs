use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{QueryParams, ValidatedJson};
use pagination::{Page, PageRequest, Slice};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{AirportError, AirportResult};
use crate::models::{Airport, DirectConnectionsQuery, Geo};
use crate::repository::AirportRepository;
use crate::service::AirportService;

#[derive(OpenApi)]
#[openapi(
    paths(
        list_airports,
        direct_connections,
        direct_connections_path,
        get_airport,
        create_airport,
        update_airport,
        delete_airport,
    ),
    components(schemas(Airport, Geo)),
    tags(
        (name = "Airports", description = "Airport documents and non-stop connections")
    )
)]
pub struct ApiDoc;

/// Airport routes, to be nested under `/api/v1/airport`
pub fn router<R: AirportRepository + 'static>(service: AirportService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/list", get(list_airports))
        .route("/direct-connections", get(direct_connections))
        .route(
            "/direct-connections/{airportCode}",
            get(direct_connections_path),
        )
        .route(
            "/{id}",
            get(get_airport)
                .post(create_airport)
                .put(update_airport)
                .delete(delete_airport),
        )
        .with_state(shared_service)
}

/// List all airports
#[utoipa::path(
    get,
    path = "/list",
    tag = "Airports",
    params(PageRequest),
    responses(
        (status = 200, description = "Page of airports", body = Page<Airport>),
        (status = 400, description = "Malformed paging parameters"),
        (status = 500, description = "Database failure")
    )
)]
async fn list_airports<R: AirportRepository>(
    State(service): State<Arc<AirportService<R>>>,
    QueryParams(page): QueryParams<PageRequest>,
) -> AirportResult<Json<Page<Airport>>> {
    Ok(Json(service.list_airports(page).await?))
}

/// Destination codes reachable without stops
#[utoipa::path(
    get,
    path = "/direct-connections",
    tag = "Airports",
    params(DirectConnectionsQuery, PageRequest),
    responses(
        (status = 200, description = "Slice of destination airport codes", body = Slice<String>),
        (status = 400, description = "Missing airportCode"),
        (status = 500, description = "Database failure")
    )
)]
async fn direct_connections<R: AirportRepository>(
    State(service): State<Arc<AirportService<R>>>,
    QueryParams(query): QueryParams<DirectConnectionsQuery>,
    QueryParams(page): QueryParams<PageRequest>,
) -> AirportResult<Json<Slice<String>>> {
    Ok(Json(
        service.direct_connections(&query.airport_code, page).await?,
    ))
}

/// Destination codes reachable without stops, airport given in the path
#[utoipa::path(
    get,
    path = "/direct-connections/{airportCode}",
    tag = "Airports",
    params(
        ("airportCode" = String, Path, description = "FAA code of the departure airport", example = "LAX"),
        PageRequest
    ),
    responses(
        (status = 200, description = "Slice of destination airport codes", body = Slice<String>),
        (status = 500, description = "Database failure")
    )
)]
async fn direct_connections_path<R: AirportRepository>(
    State(service): State<Arc<AirportService<R>>>,
    Path(airport_code): Path<String>,
    QueryParams(page): QueryParams<PageRequest>,
) -> AirportResult<Json<Slice<String>>> {
    Ok(Json(service.direct_connections(&airport_code, page).await?))
}

/// Get an airport by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Airports",
    params(("id" = String, Path, description = "Airport id", example = "airport_1254")),
    responses(
        (status = 200, description = "Airport found", body = Airport),
        (status = 404, description = "No airport with this id"),
        (status = 500, description = "Database failure")
    )
)]
async fn get_airport<R: AirportRepository>(
    State(service): State<Arc<AirportService<R>>>,
    Path(id): Path<String>,
) -> AirportResult<Json<Airport>> {
    match service.get_airport(&id).await? {
        Some(airport) => Ok(Json(airport)),
        None => Err(AirportError::NotFound(id)),
    }
}

/// Create an airport under the given id
#[utoipa::path(
    post,
    path = "/{id}",
    tag = "Airports",
    params(("id" = String, Path, description = "Airport id", example = "airport_1254")),
    request_body = Airport,
    responses(
        (status = 201, description = "Airport created", body = Airport),
        (status = 400, description = "Invalid airport"),
        (status = 409, description = "Id already taken"),
        (status = 500, description = "Database failure")
    )
)]
async fn create_airport<R: AirportRepository>(
    State(service): State<Arc<AirportService<R>>>,
    Path(id): Path<String>,
    ValidatedJson(airport): ValidatedJson<Airport>,
) -> AirportResult<impl IntoResponse> {
    let airport = service.create_airport(&id, airport).await?;
    Ok((StatusCode::CREATED, Json(airport)))
}

/// Replace an airport
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Airports",
    params(("id" = String, Path, description = "Airport id", example = "airport_1254")),
    request_body = Airport,
    responses(
        (status = 200, description = "Airport replaced", body = Airport),
        (status = 400, description = "Invalid airport"),
        (status = 404, description = "No airport with this id"),
        (status = 500, description = "Database failure")
    )
)]
async fn update_airport<R: AirportRepository>(
    State(service): State<Arc<AirportService<R>>>,
    Path(id): Path<String>,
    ValidatedJson(airport): ValidatedJson<Airport>,
) -> AirportResult<Json<Airport>> {
    Ok(Json(service.update_airport(&id, airport).await?))
}

/// Delete an airport
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Airports",
    params(("id" = String, Path, description = "Airport id", example = "airport_1254")),
    responses(
        (status = 204, description = "Airport deleted"),
        (status = 404, description = "No airport with this id"),
        (status = 500, description = "Database failure")
    )
)]
async fn delete_airport<R: AirportRepository>(
    State(service): State<Arc<AirportService<R>>>,
    Path(id): Path<String>,
) -> AirportResult<impl IntoResponse> {
    service.delete_airport(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
