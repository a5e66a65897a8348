//! REST entity DTOs shared by every page and admin screen.
//!
//! DESIGN
//! ======
//! The backend speaks camelCase JSON and may emit Mongo-style `_id` keys, so
//! every identifier accepts both spellings. Relations (a consultant's
//! categories, a product's category) arrive either populated or as bare ids;
//! [`TaxonomyRef`] absorbs both shapes so pages never branch on it.

#[cfg(test)]
#[path = "models_test.rs"]
mod models_test;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Anything addressable by a backend identifier.
pub trait Identified {
    fn id(&self) -> &str;
}

// =============================================================================
// LIST ENVELOPE
// =============================================================================

/// List response body: a bare array or `{ "data": [...] }`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ListBody<T> {
    Bare(Vec<T>),
    Wrapped { data: Vec<T> },
}

impl<T> ListBody<T> {
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Bare(items) | Self::Wrapped { data: items } => items,
        }
    }
}

// =============================================================================
// USERS & AUTH
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Customer,
    Consultant,
    Admin,
}

impl Role {
    pub const ALL: [Self; 3] = [Self::Customer, Self::Consultant, Self::Admin];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Consultant => "consultant",
            Self::Admin => "admin",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == raw)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub is_admin: bool,
}

impl User {
    /// Admin panel access: explicit flag or the admin role.
    #[must_use]
    pub fn has_admin_access(&self) -> bool {
        self.is_admin || self.role == Role::Admin
    }
}

impl Identified for User {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Response of `/api/auth/login` and `/api/auth/register`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub user: User,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub password: String,
}

/// Admin create/update payload for a user account.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub role: Role,
    pub is_admin: bool,
    /// Only sent when creating or resetting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl From<&User> for UserDraft {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            role: user.role,
            is_admin: user.is_admin,
            password: None,
        }
    }
}

// =============================================================================
// TAXONOMY
// =============================================================================

/// The three tag vocabularies share one record shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TaxonomyKind {
    Category,
    Ailment,
    Specialization,
}

impl TaxonomyKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Category => "Category",
            Self::Ailment => "Ailment",
            Self::Specialization => "Specialization",
        }
    }

    #[must_use]
    pub fn plural(self) -> &'static str {
        match self {
            Self::Category => "Categories",
            Self::Ailment => "Ailments",
            Self::Specialization => "Specializations",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    #[default]
    Active,
    Inactive,
}

impl RecordStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Taxonomy {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: String,
    /// Parent category (categories) or owning category (ailments).
    #[serde(default)]
    pub parent: Option<TaxonomyRef>,
    #[serde(default)]
    pub status: RecordStatus,
}

impl Identified for Taxonomy {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxonomyDraft {
    pub name: String,
    pub slug: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    pub status: RecordStatus,
}

impl From<&Taxonomy> for TaxonomyDraft {
    fn from(record: &Taxonomy) -> Self {
        Self {
            name: record.name.clone(),
            slug: record.slug.clone(),
            description: record.description.clone(),
            parent: record.parent.as_ref().map(|p| p.id.clone()),
            status: record.status,
        }
    }
}

/// Lowercase, hyphen-separated slug derived from a display name.
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for ch in name.chars() {
        if ch.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(ch.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// A relation that may arrive populated (`{ "_id", "name" }`) or as an id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawTaxonomyRef")]
pub struct TaxonomyRef {
    pub id: String,
    pub name: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTaxonomyRef {
    Id(String),
    Populated {
        #[serde(alias = "_id")]
        id: String,
        #[serde(default)]
        name: String,
    },
}

impl From<RawTaxonomyRef> for TaxonomyRef {
    fn from(raw: RawTaxonomyRef) -> Self {
        match raw {
            RawTaxonomyRef::Id(id) => Self { id, name: String::new() },
            RawTaxonomyRef::Populated { id, name } => Self { id, name },
        }
    }
}

impl fmt::Display for TaxonomyRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() { f.write_str(&self.id) } else { f.write_str(&self.name) }
    }
}

// =============================================================================
// CONSULTANTS
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

/// User fields embedded in consultant and review payloads.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    #[serde(alias = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultantService {
    #[serde(alias = "_id", default)]
    pub id: String,
    pub name: String,
    pub price: f64,
    /// Session length in minutes.
    #[serde(default)]
    pub duration: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Consultant {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub user: Option<UserSummary>,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub categories: Vec<TaxonomyRef>,
    #[serde(default)]
    pub ailments: Vec<TaxonomyRef>,
    #[serde(default)]
    pub specializations: Vec<TaxonomyRef>,
    #[serde(default)]
    pub services: Vec<ConsultantService>,
    #[serde(default)]
    pub status: ApprovalStatus,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub total_ratings: u32,
}

impl Consultant {
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.user.as_ref().map_or("Unnamed consultant", |u| u.name.as_str())
    }

    /// Lowest service price, used for "from $X" labels.
    #[must_use]
    pub fn starting_price(&self) -> Option<f64> {
        self.services.iter().map(|s| s.price).reduce(f64::min)
    }

    #[must_use]
    pub fn service(&self, service_id: &str) -> Option<&ConsultantService> {
        self.services.iter().find(|s| s.id == service_id)
    }
}

impl Identified for Consultant {
    fn id(&self) -> &str {
        &self.id
    }
}

// =============================================================================
// PRODUCTS
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub category: Option<TaxonomyRef>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub specifications: BTreeMap<String, String>,
}

impl Product {
    #[must_use]
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    #[must_use]
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

impl Identified for Product {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub images: Vec<String>,
    pub features: Vec<String>,
    pub specifications: BTreeMap<String, String>,
}

impl From<&Product> for ProductDraft {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            stock: product.stock,
            category: product.category.as_ref().map(|c| c.id.clone()),
            images: product.images.clone(),
            features: product.features.clone(),
            specifications: product.specifications.clone(),
        }
    }
}

/// Parse `key: value` lines into a specification map, skipping blanks and
/// lines without a colon.
#[must_use]
pub fn parse_specifications(raw: &str) -> BTreeMap<String, String> {
    raw.lines()
        .filter_map(|line| {
            let (key, value) = line.split_once(':')?;
            let key = key.trim();
            if key.is_empty() {
                return None;
            }
            Some((key.to_owned(), value.trim().to_owned()))
        })
        .collect()
}

/// Inverse of [`parse_specifications`] for pre-filling edit forms.
#[must_use]
pub fn format_specifications(specs: &BTreeMap<String, String>) -> String {
    specs
        .iter()
        .map(|(k, v)| format!("{k}: {v}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Split a newline-separated text area into trimmed non-empty entries.
#[must_use]
pub fn parse_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

// =============================================================================
// ORDERS
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [Self; 5] = [Self::Pending, Self::Processing, Self::Shipped, Self::Delivered, Self::Cancelled];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Failed,
    Refunded,
}

impl PaymentStatus {
    pub const ALL: [Self; 4] = [Self::Pending, Self::Paid, Self::Failed, Self::Refunded];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Failed => "failed",
            Self::Refunded => "refunded",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(alias = "product")]
    pub product_id: String,
    #[serde(default)]
    pub name: String,
    pub quantity: u32,
    pub price: f64,
}

impl OrderItem {
    #[must_use]
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub customer: Option<UserSummary>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub subtotal: f64,
    #[serde(default)]
    pub shipping: f64,
    #[serde(default)]
    pub tax: f64,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Order {
    #[must_use]
    pub fn items_subtotal(&self) -> f64 {
        self.items.iter().map(OrderItem::subtotal).sum()
    }

    /// Whether the reported total matches items + shipping + tax to the cent.
    #[must_use]
    pub fn totals_consistent(&self) -> bool {
        let expected = crate::cart::round_cents(self.items_subtotal() + self.shipping + self.tax);
        (expected - crate::cart::round_cents(self.total)).abs() < 0.005
    }
}

impl Identified for Order {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
}

// =============================================================================
// REVIEWS
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewTargetKind {
    #[default]
    Consultant,
    Product,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub user: Option<UserSummary>,
    #[serde(default)]
    pub target_type: ReviewTargetKind,
    #[serde(default)]
    pub target_id: String,
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Review {
    #[must_use]
    pub fn author(&self) -> &str {
        self.user.as_ref().map_or("Anonymous", |u| u.name.as_str())
    }
}

impl Identified for Review {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReviewDraft {
    pub rating: u8,
    pub comment: String,
}

impl ReviewDraft {
    /// Validate the rating range and require a comment.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message when the draft cannot be submitted.
    pub fn validate(rating: u8, comment: &str) -> Result<Self, &'static str> {
        if !(1..=5).contains(&rating) {
            return Err("Choose a rating between 1 and 5.");
        }
        let comment = comment.trim();
        if comment.is_empty() {
            return Err("Write a short comment.");
        }
        Ok(Self { rating, comment: comment.to_owned() })
    }
}

// =============================================================================
// SETTINGS & STATS
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub site_name: String,
    pub contact_email: String,
    pub shipping_fee: f64,
    /// Fraction, e.g. `0.08` for 8%.
    pub tax_rate: f64,
    /// Subtotal at which shipping becomes free; `None` disables the rule.
    pub free_shipping_threshold: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    pub users: u64,
    pub consultants: u64,
    pub pending_consultants: u64,
    pub products: u64,
    pub orders: u64,
    pub revenue: f64,
}
