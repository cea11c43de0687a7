use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use axum_helpers::{QueryParams, UuidPath, ValidatedJson};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{ProfileError, ProfileResult};
use crate::models::{Profile, ProfileInput, ProfileQuery};
use crate::repository::ProfileRepository;
use crate::service::ProfileService;

#[derive(OpenApi)]
#[openapi(
    paths(list_profiles, create_profile, get_profile, update_profile, delete_profile),
    components(schemas(Profile, ProfileInput)),
    tags(
        (name = "Profiles", description = "Traveller profiles")
    )
)]
pub struct ApiDoc;

/// Profile endpoints, to be nested under `/profile`
pub fn router<R: ProfileRepository + 'static>(service: ProfileService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_profiles).post(create_profile))
        .route(
            "/{id}",
            get(get_profile).put(update_profile).delete(delete_profile),
        )
        .with_state(shared_service)
}

/// List or search profiles
#[utoipa::path(
    get,
    path = "",
    tag = "Profiles",
    params(ProfileQuery),
    responses(
        (status = 200, description = "Matching profiles", body = Vec<Profile>),
        (status = 204, description = "Nothing matched"),
        (status = 500, description = "Database failure")
    )
)]
async fn list_profiles<R: ProfileRepository>(
    State(service): State<Arc<ProfileService<R>>>,
    QueryParams(query): QueryParams<ProfileQuery>,
) -> ProfileResult<Response> {
    let profiles = service.search_profiles(&query).await?;

    if profiles.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }
    Ok(Json(profiles).into_response())
}

/// Create a profile with a generated id
#[utoipa::path(
    post,
    path = "",
    tag = "Profiles",
    request_body = ProfileInput,
    responses(
        (status = 201, description = "Profile created", body = Profile),
        (status = 400, description = "Invalid profile"),
        (status = 500, description = "Database failure")
    )
)]
async fn create_profile<R: ProfileRepository>(
    State(service): State<Arc<ProfileService<R>>>,
    ValidatedJson(input): ValidatedJson<ProfileInput>,
) -> ProfileResult<impl IntoResponse> {
    let profile = service.create_profile(input).await?;
    Ok((StatusCode::CREATED, Json(profile)))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Profiles",
    params(("id" = Uuid, Path, description = "Profile id")),
    responses(
        (status = 200, description = "Profile found", body = Profile),
        (status = 400, description = "Id is not a UUID"),
        (status = 404, description = "No profile with this id"),
        (status = 500, description = "Database failure")
    )
)]
async fn get_profile<R: ProfileRepository>(
    State(service): State<Arc<ProfileService<R>>>,
    UuidPath(id): UuidPath,
) -> ProfileResult<Json<Profile>> {
    service
        .get_profile(id)
        .await?
        .map(Json)
        .ok_or(ProfileError::NotFound(id))
}

/// Replace a profile
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Profiles",
    params(("id" = Uuid, Path, description = "Profile id")),
    request_body = ProfileInput,
    responses(
        (status = 200, description = "Profile replaced", body = Profile),
        (status = 400, description = "Invalid profile or id"),
        (status = 404, description = "No profile with this id"),
        (status = 500, description = "Database failure")
    )
)]
async fn update_profile<R: ProfileRepository>(
    State(service): State<Arc<ProfileService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<ProfileInput>,
) -> ProfileResult<Json<Profile>> {
    Ok(Json(service.update_profile(id, input).await?))
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Profiles",
    params(("id" = Uuid, Path, description = "Profile id")),
    responses(
        (status = 204, description = "Profile deleted"),
        (status = 400, description = "Id is not a UUID"),
        (status = 404, description = "No profile with this id"),
        (status = 500, description = "Database failure")
    )
)]
async fn delete_profile<R: ProfileRepository>(
    State(service): State<Arc<ProfileService<R>>>,
    UuidPath(id): UuidPath,
) -> ProfileResult<impl IntoResponse> {
    service.delete_profile(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProfileRepository;
    use axum::{
        body::Body,
        http::{Request, header},
    };
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;
    use uuid::Uuid;

    fn profile(id: Uuid) -> Profile {
        Profile {
            id,
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            age: 34,
            address: "12 Harbour Road".into(),
        }
    }

    fn app(mock: MockProfileRepository) -> Router {
        Router::new().nest("/profile", router(ProfileService::new(mock)))
    }

    async fn read_body(response: Response) -> Vec<u8> {
        response
            .into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec()
    }

    #[tokio::test]
    async fn test_list_empty_is_204() {
        let mut mock = MockProfileRepository::new();
        mock.expect_search().returning(|_, _| Ok(Vec::new()));

        let response = app(mock)
            .oneshot(Request::get("/profile").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(read_body(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_list_with_query() {
        let mut mock = MockProfileRepository::new();
        mock.expect_search()
            .withf(|text, page| text.as_deref() == Some("Jane") && page.size == 10)
            .returning(|_, _| Ok(vec![profile(Uuid::new_v4())]));

        let response = app(mock)
            .oneshot(
                Request::get("/profile?query=Jane&pageSize=0")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_slice(&read_body(response).await).unwrap();
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["firstName"], "Jane");
    }

    #[tokio::test]
    async fn test_get_malformed_uuid_is_400() {
        let mock = MockProfileRepository::new();

        let response = app(mock)
            .oneshot(Request::get("/profile/not-a-uuid").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_missing_is_404() {
        let mut mock = MockProfileRepository::new();
        mock.expect_get_by_id().returning(|_| Ok(None));

        let uri = format!("/profile/{}", Uuid::new_v4());
        let response = app(mock)
            .oneshot(Request::get(uri.as_str()).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_post_returns_201_with_generated_id() {
        let mut mock = MockProfileRepository::new();
        mock.expect_create().returning(Ok);

        let response = app(mock)
            .oneshot(
                Request::post("/profile")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        json!({ "firstName": "Jane", "lastName": "Doe", "age": 34 }).to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body: Value = serde_json::from_slice(&read_body(response).await).unwrap();
        let id = body["id"].as_str().unwrap();
        assert!(Uuid::parse_str(id).is_ok());
    }

    fn put_json(uri: &str, body: Value) -> Request<Body> {
        Request::put(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_put_replaces_profile_under_path_id() {
        let id = Uuid::new_v4();
        let mut mock = MockProfileRepository::new();
        mock.expect_update()
            .withf(move |p| p.id == id && p.first_name == "Janet" && p.address.is_empty())
            .returning(Ok);

        let response = app(mock)
            .oneshot(put_json(
                &format!("/profile/{id}"),
                json!({ "firstName": "Janet", "lastName": "Doe", "age": 35 }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_slice(&read_body(response).await).unwrap();
        assert_eq!(body["id"], id.to_string());
        assert_eq!(body["age"], 35);
    }

    #[tokio::test]
    async fn test_put_missing_is_404() {
        let id = Uuid::new_v4();
        let mut mock = MockProfileRepository::new();
        mock.expect_update()
            .returning(|p| Err(ProfileError::NotFound(p.id)));

        let response = app(mock)
            .oneshot(put_json(
                &format!("/profile/{id}"),
                json!({ "firstName": "Jane", "lastName": "Doe", "age": 34 }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(read_body(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_put_malformed_uuid_is_400() {
        let mut mock = MockProfileRepository::new();
        mock.expect_update().never();

        let response = app(mock)
            .oneshot(put_json(
                "/profile/not-a-uuid",
                json!({ "firstName": "Jane", "lastName": "Doe", "age": 34 }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_put_invalid_body_is_400() {
        let mut mock = MockProfileRepository::new();
        mock.expect_update().never();

        let response = app(mock)
            .oneshot(put_json(
                &format!("/profile/{}", Uuid::new_v4()),
                json!({ "firstName": "", "lastName": "Doe", "age": 34 }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_delete_returns_204() {
        let id = Uuid::new_v4();
        let mut mock = MockProfileRepository::new();
        mock.expect_delete().returning(|_| Ok(()));

        let response = app(mock)
            .oneshot(
                Request::delete(format!("/profile/{id}").as_str())
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }
}
