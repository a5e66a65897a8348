//! `/api/*` forwarder.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only ever talks to this host. Every `/api/...` request is
//! replayed against `API_BASE_URL` with the same method, query and body,
//! carrying only the headers the backend needs. The backend's status,
//! content type and body come back untouched.
//!
//! ERROR HANDLING
//! ==============
//! A backend that cannot be reached (refused, timed out, truncated body)
//! becomes `502` with `{"message": ...}` so the client reports it like any
//! other HTTP failure instead of a network error.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Request headers copied to the backend. Cookies, `Host` and hop-by-hop
/// headers stay behind.
const FORWARDED_HEADERS: [axum::http::HeaderName; 3] = [AUTHORIZATION, CONTENT_TYPE, ACCEPT];

pub const UNREACHABLE_MESSAGE: &str = "The marketplace service is unavailable. Please try again shortly.";

/// `{base}/api/{path}` plus the original query string, if any.
#[must_use]
pub fn upstream_url(base: &str, path: &str, query: Option<&str>) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    match query.filter(|q| !q.is_empty()) {
        Some(query) => format!("{base}/api/{path}?{query}"),
        None => format!("{base}/api/{path}"),
    }
}

#[must_use]
pub fn forwarded_headers(incoming: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in &FORWARDED_HEADERS {
        for value in incoming.get_all(name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

#[must_use]
pub fn bad_gateway(message: &str) -> Response {
    (StatusCode::BAD_GATEWAY, Json(serde_json::json!({ "message": message }))).into_response()
}

/// The part of the request path after `/api/`, still percent-encoded so
/// escaped ids reach the backend exactly as the client built them.
#[must_use]
pub fn api_path(uri: &Uri) -> &str {
    uri.path().strip_prefix("/api/").unwrap_or_default()
}

/// `ANY /api/{*path}`.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let url = upstream_url(&state.config.api_base_url, api_path(&uri), uri.query());

    let sent = state
        .http
        .request(method.clone(), &url)
        .headers(forwarded_headers(&headers))
        .body(body)
        .send()
        .await;
    let upstream = match sent {
        Ok(upstream) => upstream,
        Err(e) => {
            tracing::warn!(%method, %url, error = %e, timeout = e.is_timeout(), "backend unreachable");
            return bad_gateway(UNREACHABLE_MESSAGE);
        }
    };

    let status = upstream.status();
    let content_type = upstream.headers().get(CONTENT_TYPE).cloned();
    let bytes = match upstream.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(%method, %url, error = %e, "backend response truncated");
            return bad_gateway(UNREACHABLE_MESSAGE);
        }
    };
    if status.is_server_error() {
        tracing::warn!(%method, %url, status = status.as_u16(), "backend error");
    } else {
        tracing::debug!(%method, %url, status = status.as_u16(), "proxied");
    }

    let mut response = (status, bytes).into_response();
    match content_type {
        Some(value) => {
            response.headers_mut().insert(CONTENT_TYPE, value);
        }
        None => {
            response.headers_mut().remove(CONTENT_TYPE);
        }
    }
    response
}
