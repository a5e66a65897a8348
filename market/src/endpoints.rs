//! REST endpoint paths.
//!
//! Paths are relative (`/api/...`) because the browser always talks to the
//! host process, which forwards `/api/*` to the backend.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

use crate::cart::LineKind;
use crate::models::TaxonomyKind;

pub const AUTH_LOGIN: &str = "/api/auth/login";
pub const AUTH_REGISTER: &str = "/api/auth/register";
pub const AUTH_ME: &str = "/api/auth/me";
pub const AUTH_LOGOUT: &str = "/api/auth/logout";
pub const CART: &str = "/api/cart";
pub const ORDERS: &str = "/api/orders";
pub const MY_ORDERS: &str = "/api/orders/mine";
pub const SETTINGS: &str = "/api/settings";
pub const ADMIN_STATS: &str = "/api/admin/stats";
pub const ADMIN_SETTINGS: &str = "/api/admin/settings";

/// Collections managed from the admin panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdminResource {
    Users,
    Customers,
    Products,
    Consultants,
    Categories,
    Ailments,
    Specializations,
    Orders,
    Reviews,
}

impl AdminResource {
    #[must_use]
    pub fn segment(self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Customers => "customers",
            Self::Products => "products",
            Self::Consultants => "consultants",
            Self::Categories => "categories",
            Self::Ailments => "ailments",
            Self::Specializations => "specializations",
            Self::Orders => "orders",
            Self::Reviews => "reviews",
        }
    }

    #[must_use]
    pub fn taxonomy(kind: TaxonomyKind) -> Self {
        match kind {
            TaxonomyKind::Category => Self::Categories,
            TaxonomyKind::Ailment => Self::Ailments,
            TaxonomyKind::Specialization => Self::Specializations,
        }
    }
}

/// `GET /api/admin/{resource}`, `POST` to create.
#[must_use]
pub fn admin_collection(resource: AdminResource) -> String {
    format!("/api/admin/{}", resource.segment())
}

/// `GET`/`PUT`/`DELETE /api/admin/{resource}/{id}`.
#[must_use]
pub fn admin_item(resource: AdminResource, id: &str) -> String {
    format!("/api/admin/{}/{}", resource.segment(), urlencoding::encode(id))
}

#[must_use]
pub fn admin_consultant_approve(id: &str) -> String {
    format!("{}/approve", admin_item(AdminResource::Consultants, id))
}

#[must_use]
pub fn admin_consultant_reject(id: &str) -> String {
    format!("{}/reject", admin_item(AdminResource::Consultants, id))
}

#[must_use]
pub fn admin_order_status(id: &str) -> String {
    format!("{}/status", admin_item(AdminResource::Orders, id))
}

/// Filters for the public product listing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductQuery {
    pub category: Option<String>,
    pub search: Option<String>,
}

/// Filters for the public consultant listing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConsultantQuery {
    pub category: Option<String>,
    pub ailment: Option<String>,
    pub search: Option<String>,
}

#[must_use]
pub fn products(query: &ProductQuery) -> String {
    with_query("/api/products", &[("category", query.category.as_deref()), ("search", query.search.as_deref())])
}

#[must_use]
pub fn product(id: &str) -> String {
    format!("/api/products/{}", urlencoding::encode(id))
}

#[must_use]
pub fn consultants(query: &ConsultantQuery) -> String {
    with_query(
        "/api/consultants",
        &[
            ("category", query.category.as_deref()),
            ("ailment", query.ailment.as_deref()),
            ("search", query.search.as_deref()),
        ],
    )
}

#[must_use]
pub fn consultant(id: &str) -> String {
    format!("/api/consultants/{}", urlencoding::encode(id))
}

#[must_use]
pub fn consultant_reviews(id: &str) -> String {
    format!("{}/reviews", consultant(id))
}

/// Public taxonomy listing used by browse filters.
#[must_use]
pub fn taxonomy(kind: TaxonomyKind) -> &'static str {
    match kind {
        TaxonomyKind::Category => "/api/categories",
        TaxonomyKind::Ailment => "/api/ailments",
        TaxonomyKind::Specialization => "/api/specializations",
    }
}

/// `PUT`/`DELETE /api/cart/{kind}/{id}`.
#[must_use]
pub fn cart_line(kind: LineKind, item_id: &str) -> String {
    format!("{CART}/{}/{}", kind.as_str(), urlencoding::encode(item_id))
}

/// Append non-empty parameters as an encoded query string.
fn with_query(base: &str, params: &[(&str, Option<&str>)]) -> String {
    let pairs: Vec<String> = params
        .iter()
        .filter_map(|(key, value)| {
            let value = value.map(str::trim).filter(|v| !v.is_empty())?;
            Some(format!("{key}={}", urlencoding::encode(value)))
        })
        .collect();
    if pairs.is_empty() { base.to_owned() } else { format!("{base}?{}", pairs.join("&")) }
}
