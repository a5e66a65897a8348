use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{HeaderValue, Request, header};
use axum::routing::{delete, get, post};
use tower::ServiceExt;

use super::*;
use crate::config::ServerConfig;
use crate::routes::api_routes;

#[test]
fn upstream_url_appends_path_and_query() {
    assert_eq!(
        upstream_url("http://backend:5000", "products", Some("category=oils&search=lav")),
        "http://backend:5000/api/products?category=oils&search=lav"
    );
}

#[test]
fn upstream_url_drops_empty_query_and_duplicate_slashes() {
    assert_eq!(upstream_url("http://backend/", "/admin/users/7", Some("")), "http://backend/api/admin/users/7");
    assert_eq!(upstream_url("http://backend", "cart", None), "http://backend/api/cart");
}

#[test]
fn forwarded_headers_keeps_only_auth_and_content_negotiation() {
    let mut incoming = HeaderMap::new();
    incoming.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer t"));
    incoming.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    incoming.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
    incoming.insert(header::COOKIE, HeaderValue::from_static("sid=1"));
    incoming.insert(header::HOST, HeaderValue::from_static("shop.example"));

    let out = forwarded_headers(&incoming);
    assert_eq!(out.len(), 3);
    assert_eq!(out.get(header::AUTHORIZATION).unwrap(), "Bearer t");
    assert!(out.get(header::COOKIE).is_none());
    assert!(out.get(header::HOST).is_none());
}

#[test]
fn api_path_keeps_percent_escapes() {
    let uri: Uri = "/api/admin/users/a%2Fb%3Fx%3D1?page=2".parse().unwrap();
    assert_eq!(api_path(&uri), "admin/users/a%2Fb%3Fx%3D1");
}

#[tokio::test]
async fn bad_gateway_body_decodes_as_http_error() {
    let resp = bad_gateway("down");
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();
    let err = market::error::decode_response::<serde_json::Value>(502, &text).unwrap_err();
    assert_eq!(err, market::ApiError::Http { status: 502, message: "down".to_owned() });
}

/// Spawn a stand-in backend on an ephemeral port and return its origin.
async fn spawn_backend() -> String {
    async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: String) -> Json<serde_json::Value> {
        Json(serde_json::json!({
            "method": method.as_str(),
            "uri": uri.to_string(),
            "authorization": headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()),
            "cookie": headers.get(header::COOKIE).and_then(|v| v.to_str().ok()),
            "body": body,
        }))
    }

    let backend = Router::new()
        .route("/api/products", get(echo))
        .route("/api/cart", post(echo))
        .route("/api/admin/users/{id}", delete(|| async { StatusCode::UNAUTHORIZED }).get(echo))
        .route("/api/orders", post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, backend).await.unwrap();
    });
    format!("http://{addr}")
}

fn app_for(base: String) -> Router {
    let config = ServerConfig { api_base_url: base, ..ServerConfig::default() };
    api_routes(AppState::new(config).unwrap())
}

async fn json_body(resp: Response) -> serde_json::Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn get_forwards_query_and_authorization() {
    let app = app_for(spawn_backend().await);
    let req = Request::builder()
        .uri("/api/products?category=oils")
        .header(header::AUTHORIZATION, "Bearer abc")
        .header(header::COOKIE, "sid=1")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get(header::CONTENT_TYPE).unwrap(), "application/json");
    let body = json_body(resp).await;
    assert_eq!(body["method"], "GET");
    assert_eq!(body["uri"], "/api/products?category=oils");
    assert_eq!(body["authorization"], "Bearer abc");
    assert_eq!(body["cookie"], serde_json::Value::Null);
}

#[tokio::test]
async fn post_forwards_body() {
    let app = app_for(spawn_backend().await);
    let req = Request::builder()
        .method("POST")
        .uri("/api/cart")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"kind":"product","itemId":"p1","quantity":2}"#))
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["method"], "POST");
    assert_eq!(body["body"], r#"{"kind":"product","itemId":"p1","quantity":2}"#);
}

#[tokio::test]
async fn upstream_status_passes_through() {
    let app = app_for(spawn_backend().await);
    let req = Request::builder().method("DELETE").uri("/api/admin/users/7").body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn upstream_plain_text_error_keeps_its_content_type() {
    let app = app_for(spawn_backend().await);
    let req = Request::builder().method("POST").uri("/api/orders").body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let content_type = resp.headers().get(header::CONTENT_TYPE).unwrap().to_str().unwrap().to_owned();
    assert!(content_type.starts_with("text/plain"));
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"boom");
}

#[tokio::test]
async fn unreachable_backend_maps_to_502() {
    // Bind then drop a listener so the port is known to be closed.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let app = app_for(format!("http://{addr}"));
    let req = Request::builder().uri("/api/products").body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body = json_body(resp).await;
    assert_eq!(body["message"], UNREACHABLE_MESSAGE);
}

#[tokio::test]
async fn escaped_id_reaches_backend_unchanged() {
    let app = app_for(spawn_backend().await);
    let path = market::endpoints::admin_item(market::endpoints::AdminResource::Users, "a/b?x=1");
    assert_eq!(path, "/api/admin/users/a%2Fb%3Fx%3D1");

    let req = Request::builder().uri(path.as_str()).body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["uri"], "/api/admin/users/a%2Fb%3Fx%3D1");
}
