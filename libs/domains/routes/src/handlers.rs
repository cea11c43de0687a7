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

use crate::error::{RouteError, RouteResult};
use crate::models::{Route, Schedule};
use crate::repository::RouteRepository;
use crate::service::RouteService;

#[derive(OpenApi)]
#[openapi(
    paths(list_routes, get_route, create_route, update_route, delete_route),
    components(schemas(Route, Schedule)),
    tags(
        (name = "Routes", description = "Route documents")
    )
)]
pub struct ApiDoc;

/// Route endpoints, to be nested under `/api/v1/route`
pub fn router<R: RouteRepository + 'static>(service: RouteService<R>) -> Router {
    Router::new()
        .route("/list", get(list_routes))
        .route(
            "/{id}",
            get(get_route)
                .post(create_route)
                .put(update_route)
                .delete(delete_route),
        )
        .with_state(Arc::new(service))
}

/// List all routes
#[utoipa::path(
    get,
    path = "/list",
    tag = "Routes",
    params(PageRequest),
    responses(
        (status = 200, description = "Page of routes", body = Page<Route>),
        (status = 400, description = "Malformed paging parameters"),
        (status = 500, description = "Database failure")
    )
)]
async fn list_routes<R: RouteRepository>(
    State(service): State<Arc<RouteService<R>>>,
    QueryParams(page): QueryParams<PageRequest>,
) -> RouteResult<Json<Page<Route>>> {
    Ok(Json(service.list_routes(page).await?))
}

/// Get a route by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Routes",
    params(("id" = String, Path, description = "Route id", example = "route_10000")),
    responses(
        (status = 200, description = "Route found", body = Route),
        (status = 404, description = "No route with this id"),
        (status = 500, description = "Database failure")
    )
)]
async fn get_route<R: RouteRepository>(
    State(service): State<Arc<RouteService<R>>>,
    Path(id): Path<String>,
) -> RouteResult<Json<Route>> {
    service
        .get_route(&id)
        .await?
        .map(Json)
        .ok_or(RouteError::NotFound(id))
}

/// Create a route under the given id
#[utoipa::path(
    post,
    path = "/{id}",
    tag = "Routes",
    params(("id" = String, Path, description = "Route id", example = "route_10000")),
    request_body = Route,
    responses(
        (status = 201, description = "Route created", body = Route),
        (status = 400, description = "Invalid route"),
        (status = 409, description = "Id already taken"),
        (status = 500, description = "Database failure")
    )
)]
async fn create_route<R: RouteRepository>(
    State(service): State<Arc<RouteService<R>>>,
    Path(id): Path<String>,
    ValidatedJson(route): ValidatedJson<Route>,
) -> RouteResult<impl IntoResponse> {
    let route = service.create_route(&id, route).await?;
    Ok((StatusCode::CREATED, Json(route)))
}

/// Replace a route
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Routes",
    params(("id" = String, Path, description = "Route id", example = "route_10000")),
    request_body = Route,
    responses(
        (status = 200, description = "Route replaced", body = Route),
        (status = 400, description = "Invalid route"),
        (status = 404, description = "No route with this id"),
        (status = 500, description = "Database failure")
    )
)]
async fn update_route<R: RouteRepository>(
    State(service): State<Arc<RouteService<R>>>,
    Path(id): Path<String>,
    ValidatedJson(route): ValidatedJson<Route>,
) -> RouteResult<Json<Route>> {
    Ok(Json(service.update_route(&id, route).await?))
}

/// Delete a route
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Routes",
    params(("id" = String, Path, description = "Route id", example = "route_10000")),
    responses(
        (status = 204, description = "Route deleted"),
        (status = 404, description = "No route with this id"),
        (status = 500, description = "Database failure")
    )
)]
async fn delete_route<R: RouteRepository>(
    State(service): State<Arc<RouteService<R>>>,
    Path(id): Path<String>,
) -> RouteResult<impl IntoResponse> {
    service.delete_route(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
