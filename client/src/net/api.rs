//! REST API helpers for communicating with the backend through the host.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the stored
//! bearer token attached to every request.
//! Server-side (SSR): every call fails with [`ApiError::Network`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, ApiError>` instead of panics so fetch failures
//! degrade to notices (or a login redirect on 401) without breaking
//! hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use market::ApiError;
use market::cart::{AddToCart, Cart, LineKind, QuantityUpdate};
use market::endpoints::{self, AdminResource, ConsultantQuery, ProductQuery};
use market::models::{
    AuthSession, Consultant, DashboardStats, ListBody, LoginRequest, Order, OrderStatusUpdate, Product,
    RegisterRequest, Review, ReviewDraft, Settings, Taxonomy, TaxonomyKind, User,
};

#[cfg(any(test, not(feature = "hydrate")))]
const UNAVAILABLE_ON_SERVER: &str = "not available on server";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

fn to_body<B: Serialize + ?Sized>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Issue one request and decode the response.
async fn request<T: DeserializeOwned>(method: Method, path: &str, body: Option<Value>) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;

        use crate::util::storage::{BrowserStorage, TokenStore};

        let mut builder = match method {
            Method::Get => Request::get(path),
            Method::Post => Request::post(path),
            Method::Put => Request::put(path),
            Method::Patch => Request::patch(path),
            Method::Delete => Request::delete(path),
        }
        .header("Accept", "application/json");
        if let Some(token) = BrowserStorage.load_token() {
            builder = builder.header("Authorization", &bearer(&token));
        }

        let sent = match body {
            Some(body) => builder.json(&body).map_err(|e| ApiError::Network(e.to_string()))?.send().await,
            None => builder.send().await,
        };
        let resp = sent.map_err(|e| {
            log::warn!("{} {path} unreachable: {e}", method.as_str());
            ApiError::Network(e.to_string())
        })?;
        let status = resp.status();
        let text = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let result = market::error::decode_response(status, &text);
        if let Err(err) = &result {
            log::warn!("{} {path} failed: {err}", method.as_str());
        }
        result
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, path, body);
        Err(ApiError::Network(UNAVAILABLE_ON_SERVER.to_owned()))
    }
}

async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    request(Method::Get, path, None).await
}

async fn get_list<T: DeserializeOwned>(path: &str) -> Result<Vec<T>, ApiError> {
    get::<ListBody<T>>(path).await.map(ListBody::into_vec)
}

async fn send_json<T: DeserializeOwned, B: Serialize + ?Sized>(method: Method, path: &str, body: &B) -> Result<T, ApiError> {
    request(method, path, Some(to_body(body)?)).await
}

// =============================================================================
// AUTH
// =============================================================================

/// `POST /api/auth/login`.
///
/// # Errors
///
/// Returns the classified failure; bad credentials usually arrive as
/// [`ApiError::Http`] or [`ApiError::Unauthorized`].
pub async fn login(credentials: &LoginRequest) -> Result<AuthSession, ApiError> {
    send_json(Method::Post, endpoints::AUTH_LOGIN, credentials).await
}

/// `POST /api/auth/register`.
///
/// # Errors
///
/// Returns the classified failure (e.g. email already taken).
pub async fn register(details: &RegisterRequest) -> Result<AuthSession, ApiError> {
    send_json(Method::Post, endpoints::AUTH_REGISTER, details).await
}

/// `GET /api/auth/me` for the stored token.
///
/// # Errors
///
/// Returns [`ApiError::Unauthorized`] when the token is no longer valid.
pub async fn fetch_current_user() -> Result<User, ApiError> {
    get(endpoints::AUTH_ME).await
}

/// `POST /api/auth/logout`. Failure is irrelevant; the token is dropped locally.
pub async fn logout() {
    let _ = request::<Value>(Method::Post, endpoints::AUTH_LOGOUT, None).await;
}

// =============================================================================
// CATALOG
// =============================================================================

/// # Errors
///
/// Returns the classified request failure.
pub async fn fetch_products(query: &ProductQuery) -> Result<Vec<Product>, ApiError> {
    get_list(&endpoints::products(query)).await
}

/// # Errors
///
/// Returns the classified request failure.
pub async fn fetch_product(id: &str) -> Result<Product, ApiError> {
    get(&endpoints::product(id)).await
}

/// Approved consultants for the public listing.
///
/// # Errors
///
/// Returns the classified request failure.
pub async fn fetch_consultants(query: &ConsultantQuery) -> Result<Vec<Consultant>, ApiError> {
    get_list(&endpoints::consultants(query)).await
}

/// # Errors
///
/// Returns the classified request failure.
pub async fn fetch_consultant(id: &str) -> Result<Consultant, ApiError> {
    get(&endpoints::consultant(id)).await
}

/// # Errors
///
/// Returns the classified request failure.
pub async fn fetch_consultant_reviews(id: &str) -> Result<Vec<Review>, ApiError> {
    get_list(&endpoints::consultant_reviews(id)).await
}

/// # Errors
///
/// Returns the classified request failure.
pub async fn submit_consultant_review(id: &str, draft: &ReviewDraft) -> Result<Review, ApiError> {
    send_json(Method::Post, &endpoints::consultant_reviews(id), draft).await
}

/// # Errors
///
/// Returns the classified request failure.
pub async fn fetch_taxonomy(kind: TaxonomyKind) -> Result<Vec<Taxonomy>, ApiError> {
    get_list(endpoints::taxonomy(kind)).await
}

/// Public store settings (shipping fee, tax rate).
///
/// # Errors
///
/// Returns the classified request failure.
pub async fn fetch_settings() -> Result<Settings, ApiError> {
    get(endpoints::SETTINGS).await
}

// =============================================================================
// CART & ORDERS
// =============================================================================

/// # Errors
///
/// Returns the classified request failure.
pub async fn fetch_cart() -> Result<Cart, ApiError> {
    get(endpoints::CART).await
}

/// Add (or merge) a line; returns the updated cart.
///
/// # Errors
///
/// Returns the classified request failure.
pub async fn add_to_cart(line: &AddToCart) -> Result<Cart, ApiError> {
    send_json(Method::Post, endpoints::CART, line).await
}

/// # Errors
///
/// Returns the classified request failure.
pub async fn update_cart_line(kind: LineKind, item_id: &str, quantity: u32) -> Result<Cart, ApiError> {
    send_json(Method::Put, &endpoints::cart_line(kind, item_id), &QuantityUpdate { quantity }).await
}

/// # Errors
///
/// Returns the classified request failure.
pub async fn remove_cart_line(kind: LineKind, item_id: &str) -> Result<Cart, ApiError> {
    request(Method::Delete, &endpoints::cart_line(kind, item_id), None).await
}

/// Empty the server cart; returns the (empty) cart.
///
/// # Errors
///
/// Returns the classified request failure.
pub async fn clear_cart() -> Result<Cart, ApiError> {
    request(Method::Delete, endpoints::CART, None).await
}

/// Turn the server cart into an order. The backend computes the totals.
///
/// # Errors
///
/// Returns the classified request failure.
pub async fn place_order() -> Result<Order, ApiError> {
    send_json(Method::Post, endpoints::ORDERS, &serde_json::json!({})).await
}

/// # Errors
///
/// Returns the classified request failure.
pub async fn fetch_my_orders() -> Result<Vec<Order>, ApiError> {
    get_list(endpoints::MY_ORDERS).await
}

// =============================================================================
// ADMIN
// =============================================================================

/// # Errors
///
/// Returns the classified request failure.
pub async fn fetch_admin_stats() -> Result<DashboardStats, ApiError> {
    get(endpoints::ADMIN_STATS).await
}

/// `GET /api/admin/{resource}`.
///
/// # Errors
///
/// Returns the classified request failure.
pub async fn admin_list<T: DeserializeOwned>(resource: AdminResource) -> Result<Vec<T>, ApiError> {
    get_list(&endpoints::admin_collection(resource)).await
}

/// `POST /api/admin/{resource}`.
///
/// # Errors
///
/// Returns the classified request failure.
pub async fn admin_create<T: DeserializeOwned, D: Serialize>(resource: AdminResource, draft: &D) -> Result<T, ApiError> {
    send_json(Method::Post, &endpoints::admin_collection(resource), draft).await
}

/// `PUT /api/admin/{resource}/{id}`.
///
/// # Errors
///
/// Returns the classified request failure.
pub async fn admin_update<T: DeserializeOwned, D: Serialize>(
    resource: AdminResource,
    id: &str,
    draft: &D,
) -> Result<T, ApiError> {
    send_json(Method::Put, &endpoints::admin_item(resource, id), draft).await
}

/// `DELETE /api/admin/{resource}/{id}`.
///
/// # Errors
///
/// Returns the classified request failure.
pub async fn admin_delete(resource: AdminResource, id: &str) -> Result<(), ApiError> {
    request::<Value>(Method::Delete, &endpoints::admin_item(resource, id), None).await.map(drop)
}

/// # Errors
///
/// Returns the classified request failure.
pub async fn approve_consultant(id: &str) -> Result<Consultant, ApiError> {
    request(Method::Patch, &endpoints::admin_consultant_approve(id), None).await
}

/// # Errors
///
/// Returns the classified request failure.
pub async fn reject_consultant(id: &str) -> Result<Consultant, ApiError> {
    request(Method::Patch, &endpoints::admin_consultant_reject(id), None).await
}

/// # Errors
///
/// Returns the classified request failure.
pub async fn update_order_status(id: &str, update: &OrderStatusUpdate) -> Result<Order, ApiError> {
    send_json(Method::Patch, &endpoints::admin_order_status(id), update).await
}

/// # Errors
///
/// Returns the classified request failure.
pub async fn fetch_admin_settings() -> Result<Settings, ApiError> {
    get(endpoints::ADMIN_SETTINGS).await
}

/// # Errors
///
/// Returns the classified request failure.
pub async fn save_admin_settings(settings: &Settings) -> Result<Settings, ApiError> {
    send_json(Method::Put, endpoints::ADMIN_SETTINGS, settings).await
}
