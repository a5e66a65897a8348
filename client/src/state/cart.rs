//! Cart state shared by the header badge, product pages and the cart page.
//!
//! DESIGN
//! ======
//! A signed-in cart lives on the backend: every mutation is a request and
//! the returned cart replaces local state wholesale. A guest cart is
//! mutated locally and persisted by the caller; on login its lines are
//! handed over with [`CartState::take_guest_lines`].

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use market::cart::{Cart, CartLine, LineKind};
use market::ApiError;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CartState {
    pub cart: Cart,
    pub loading: bool,
    pub error: Option<String>,
    /// Whether `cart` is the local guest cart rather than the server's.
    pub guest: bool,
}

impl CartState {
    #[must_use]
    pub fn guest(cart: Cart) -> Self {
        Self { cart, guest: true, ..Self::default() }
    }

    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Adopt the cart returned by the backend.
    pub fn replaced(&mut self, cart: Cart) {
        self.cart = cart;
        self.guest = false;
        self.loading = false;
        self.error = None;
    }

    pub fn failed(&mut self, err: &ApiError) {
        self.loading = false;
        self.error = Some(err.to_string());
    }

    pub fn add_guest_line(&mut self, line: CartLine) {
        self.cart.add(line);
    }

    pub fn set_guest_quantity(&mut self, kind: LineKind, item_id: &str, quantity: u32) -> bool {
        self.cart.set_quantity(kind, item_id, quantity)
    }

    pub fn remove_guest_line(&mut self, kind: LineKind, item_id: &str) -> bool {
        self.cart.remove(kind, item_id)
    }

    /// Drain the guest lines for upload after sign-in. Empty for server carts.
    pub fn take_guest_lines(&mut self) -> Vec<CartLine> {
        if !self.guest {
            return Vec::new();
        }
        self.guest = false;
        std::mem::take(&mut self.cart.items)
    }

    /// Signing out leaves an empty guest cart behind.
    pub fn signed_out(&mut self) {
        *self = Self::guest(Cart::default());
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.cart.item_count()
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.cart.total()
    }
}
