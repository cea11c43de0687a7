use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::not_found;
use crate::http::{cors_layer_from_env, security_headers};
use axum::{
    Router,
    http::{StatusCode, header},
    middleware,
    response::IntoResponse,
    routing::get,
};
use core_config::server::ServerConfig;
use std::future::Future;
use std::io;
use std::time::Duration;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};
use utoipa::OpenApi;

/// Where `GET /` sends browsers
pub const DOCS_PATH: &str = "/swagger-ui/";

async fn redirect_to_docs() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, DOCS_PATH)])
}

/// Wrap the application routes with documentation and cross-cutting layers.
///
/// Adds:
/// - `GET /` redirecting to the Swagger UI
/// - OpenAPI docs for `T` at `/swagger-ui`, `/redoc`, `/rapidoc`, `/scalar`
///   and the raw document at `/api-docs/openapi.json`
/// - a bare-404 fallback
/// - request tracing, security headers, CORS and response compression
///
/// `routes` is merged at the root, so it carries its own prefixes
/// (e.g. `/api/v1/airline`). State must already be applied.
///
/// # Errors
/// `CORS_ALLOWED_ORIGIN` is set but invalid.
pub fn create_router<T>(routes: Router) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    use utoipa_rapidoc::RapiDoc;
    use utoipa_redoc::{Redoc, Servable as RedocServable};
    use utoipa_scalar::{Scalar, Servable as ScalarServable};
    use utoipa_swagger_ui::SwaggerUi;

    let cors_layer = cors_layer_from_env()?;

    let router = Router::new()
        .route("/", get(redirect_to_docs))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .merge(Redoc::with_url("/redoc", T::openapi()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .merge(Scalar::with_url("/scalar", T::openapi()))
        .merge(routes)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(cors_layer)
        .layer(CompressionLayer::new());

    Ok(router)
}

/// Serve `router` until SIGINT/SIGTERM, then run `cleanup`.
///
/// In-flight requests drain before `cleanup` (closing the database client and
/// similar) starts. `cleanup` gets at most `shutdown_timeout`; after that the
/// process moves on with a warning.
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let coordinator = ShutdownCoordinator::default();

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    serve_then_cleanup(
        listener,
        router,
        async move { coordinator.wait_for_shutdown().await },
        shutdown_timeout,
        cleanup,
    )
    .await
}

async fn serve_then_cleanup<S, F>(
    listener: tokio::net::TcpListener,
    router: Router,
    shutdown: S,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    S: Future<Output = ()> + Send + 'static,
    F: Future<Output = ()> + Send + 'static,
{
    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown)
        .await
        .inspect_err(|e| tracing::error!("Server encountered an error: {:?}", e));

    info!("Running cleanup (timeout: {:?})", shutdown_timeout);
    match tokio::time::timeout(shutdown_timeout, cleanup).await {
        Ok(()) => info!("Cleanup completed"),
        Err(_) => warn!("Cleanup exceeded {:?}, continuing shutdown", shutdown_timeout),
    }

    serve_result
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    #[derive(OpenApi)]
    #[openapi(info(title = "test"))]
    struct EmptyDoc;

    fn router() -> Router {
        let routes = Router::new().route("/api/v1/ping", get(|| async { "pong" }));
        temp_env::with_var_unset("CORS_ALLOWED_ORIGIN", || {
            create_router::<EmptyDoc>(routes).unwrap()
        })
    }

    async fn get_status(app: Router, uri: &str) -> axum::response::Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_root_redirects_to_swagger_ui() {
        let response = get_status(router(), "/").await;
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.headers()[header::LOCATION], DOCS_PATH);
    }

    #[tokio::test]
    async fn test_routes_are_merged_at_root() {
        let response = get_status(router(), "/api/v1/ping").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_openapi_document_served() {
        let response = get_status(router(), "/api-docs/openapi.json").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_path_is_bare_404() {
        let response = get_status(router(), "/nope").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_cleanup_waits_for_in_flight_requests() {
        use std::sync::{Arc, Mutex};
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let events = Arc::new(Mutex::new(Vec::new()));

        let handler_events = events.clone();
        let app = Router::new().route(
            "/slow",
            get(move || async move {
                tokio::time::sleep(Duration::from_millis(200)).await;
                handler_events.lock().unwrap().push("request");
                "done"
            }),
        );

        let cleanup_events = events.clone();
        let cleanup = async move { cleanup_events.lock().unwrap().push("cleanup") };

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (stop_tx, stop_rx) = tokio::sync::oneshot::channel::<()>();
        let server = tokio::spawn(serve_then_cleanup(
            listener,
            app,
            async move {
                stop_rx.await.ok();
            },
            Duration::from_secs(5),
            cleanup,
        ));

        let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
        stream
            .write_all(b"GET /slow HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;
        stop_tx.send(()).unwrap();

        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();
        server.await.unwrap().unwrap();

        assert!(response.starts_with("HTTP/1.1 200"));
        assert_eq!(*events.lock().unwrap(), vec!["request", "cleanup"]);
    }
}
