use std::net::SocketAddr;

use axum::extract::{Path, RawQuery};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use idolbase_app::{App, AppConfig};

pub const MEDIA_BASE: &str = "https://media.test";

/// Serve `app` on an ephemeral local port and return its base URL.
pub async fn spawn_backend(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr: SocketAddr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test backend");
    });

    format!("http://{addr}")
}

/// A backend answering the idol detail and search endpoints.
pub fn mock_api() -> Router {
    Router::new()
        .route(
            "/api/idols/{slug}",
            get(|Path(slug): Path<String>| async move {
                Json(json!({ "slug": slug, "events": [] }))
            }),
        )
        .route(
            "/api/search",
            get(|RawQuery(query): RawQuery| async move {
                Json(json!({ "echo": query.unwrap_or_default() }))
            }),
        )
}

/// A backend failing every request.
pub fn failing_api() -> Router {
    Router::new().fallback(|| async { StatusCode::SERVICE_UNAVAILABLE })
}

/// Configuration pointing the API at `backend_base`.
pub fn test_config(backend_base: &str) -> AppConfig {
    AppConfig {
        api_base: format!("{backend_base}/api"),
        media_base: MEDIA_BASE.to_string(),
    }
}

/// An app whose API lives on a port nothing listens on. Any request it
/// issues fails with a transport error.
pub async fn offline_app() -> App {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    App::new(test_config(&format!("http://{addr}"))).expect("app")
}

/// An app backed by [`mock_api`].
pub async fn online_app() -> App {
    let base = spawn_backend(mock_api()).await;
    App::new(test_config(&base)).expect("app")
}
