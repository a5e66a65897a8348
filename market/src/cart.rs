//! Cart lines and checkout arithmetic.
//!
//! The backend is authoritative for a signed-in cart; these operations are
//! what the client applies to a guest cart and what it uses to preview
//! totals before an order is placed.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use serde::{Deserialize, Serialize};

use crate::models::Settings;

/// What a cart line refers to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    #[default]
    Product,
    /// A consultant service (session booking).
    Service,
}

impl LineKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Product => "product",
            Self::Service => "service",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub item_id: String,
    #[serde(default)]
    pub kind: LineKind,
    #[serde(default)]
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
}

impl CartLine {
    #[must_use]
    pub fn subtotal(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }

    fn matches(&self, kind: LineKind, item_id: &str) -> bool {
        self.kind == kind && self.item_id == item_id
    }
}

/// Body of `POST /api/cart`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCart {
    pub item_id: String,
    pub kind: LineKind,
    pub quantity: u32,
}

impl From<&CartLine> for AddToCart {
    fn from(line: &CartLine) -> Self {
        Self { item_id: line.item_id.clone(), kind: line.kind, quantity: line.quantity }
    }
}

/// Body of `PUT /api/cart/{kind}/{id}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityUpdate {
    pub quantity: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    #[serde(default)]
    pub items: Vec<CartLine>,
}

impl Cart {
    /// Add a line, merging quantities with an existing line for the same item.
    /// Zero-quantity lines are ignored.
    pub fn add(&mut self, line: CartLine) {
        if line.quantity == 0 {
            return;
        }
        match self.items.iter_mut().find(|l| l.matches(line.kind, &line.item_id)) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(line.quantity);
                existing.unit_price = line.unit_price;
            }
            None => self.items.push(line),
        }
    }

    /// Set a line's quantity; zero removes the line. Returns whether a line matched.
    pub fn set_quantity(&mut self, kind: LineKind, item_id: &str, quantity: u32) -> bool {
        if quantity == 0 {
            return self.remove(kind, item_id);
        }
        match self.items.iter_mut().find(|l| l.matches(kind, item_id)) {
            Some(line) => {
                line.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Remove a line. Returns whether a line was removed.
    pub fn remove(&mut self, kind: LineKind, item_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|l| !l.matches(kind, item_id));
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines (the badge count in the header).
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of quantities across lines.
    #[must_use]
    pub fn unit_count(&self) -> u32 {
        self.items.iter().map(|l| l.quantity).sum()
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.items.iter().map(CartLine::subtotal).sum()
    }
}

/// Round a currency amount to whole cents.
#[must_use]
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Totals preview shown before placing an order.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CheckoutSummary {
    pub subtotal: f64,
    pub shipping: f64,
    pub tax: f64,
    pub total: f64,
}

impl CheckoutSummary {
    /// total = subtotal + shipping + tax, each rounded to cents. Shipping is
    /// waived once the subtotal reaches the free-shipping threshold, and an
    /// empty cart costs nothing.
    #[must_use]
    pub fn from_cart(cart: &Cart, settings: &Settings) -> Self {
        if cart.is_empty() {
            return Self::default();
        }
        let subtotal = round_cents(cart.total());
        let free = settings.free_shipping_threshold.is_some_and(|threshold| subtotal >= threshold);
        let shipping = if free { 0.0 } else { round_cents(settings.shipping_fee.max(0.0)) };
        let tax = round_cents(subtotal * settings.tax_rate.max(0.0));
        Self { subtotal, shipping, tax, total: round_cents(subtotal + shipping + tax) }
    }
}

/// Format an amount as dollars with two decimals, e.g. `$1,234.50`.
#[must_use]
pub fn format_price(amount: f64) -> String {
    let cents = (amount * 100.0).round();
    let negative = cents < 0.0;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let cents = cents.abs() as u64;
    let dollars = (cents / 100).to_string();
    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, ch) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}${grouped}.{:02}", if negative { "-" } else { "" }, cents % 100)
}
