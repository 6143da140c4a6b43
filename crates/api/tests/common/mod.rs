use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use catalog_api::app::build_app;
use catalog_api::config::ServerConfig;
use catalog_api::state::AppState;
use catalog_db::DbPool;
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        request_timeout_secs: 30,
    }
}

/// Fresh in-memory catalog holding the demonstration dataset.
pub async fn seeded_pool() -> DbPool {
    let pool = catalog_db::create_memory_pool().await.unwrap();
    catalog_db::init_schema(&pool).await.unwrap();
    catalog_db::seed_if_empty(&pool).await.unwrap();
    pool
}

/// Build the full application router, with the same middleware stack
/// production uses, over the given pool.
pub fn build_test_app(pool: DbPool) -> Router {
    build_app(AppState {
        pool,
        config: Arc::new(test_config()),
    })
}

/// Send a GET request through the router.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
