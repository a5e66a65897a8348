use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

use super::*;
use crate::config::ServerConfig;

#[tokio::test]
async fn healthz_returns_ok() {
    let app = api_routes(AppState::new(ServerConfig::default()).unwrap());
    let resp = app.oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap()).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn non_api_paths_are_not_proxied() {
    let app = api_routes(AppState::new(ServerConfig::default()).unwrap());
    let resp = app.oneshot(Request::builder().uri("/products").body(Body::empty()).unwrap()).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
