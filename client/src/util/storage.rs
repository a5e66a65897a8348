//! Browser localStorage helpers for the session token and the guest cart.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers centralize hydrate-only read/write behavior so state
//! containers can persist the bearer token without repeating web-sys glue.
//! On the server every read is empty and every write is a no-op.

use serde::Serialize;
use serde::de::DeserializeOwned;

use market::Cart;

/// Local-storage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Local-storage key holding a signed-out visitor's cart.
pub const GUEST_CART_KEY: &str = "cart";

/// Persistence for the bearer token.
pub trait TokenStore {
    fn load_token(&self) -> Option<String>;
    fn save_token(&self, token: &str);
    fn clear_token(&self);
}

/// `TokenStore` backed by `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl TokenStore for BrowserStorage {
    fn load_token(&self) -> Option<String> {
        load_raw(TOKEN_KEY).filter(|t| !t.trim().is_empty())
    }

    fn save_token(&self, token: &str) {
        save_raw(TOKEN_KEY, token);
    }

    fn clear_token(&self) {
        remove(TOKEN_KEY);
    }
}

/// Load the guest cart, or an empty cart when nothing valid is stored.
pub fn load_guest_cart() -> Cart {
    load_json(GUEST_CART_KEY).unwrap_or_default()
}

pub fn save_guest_cart(cart: &Cart) {
    save_json(GUEST_CART_KEY, cart);
}

pub fn clear_guest_cart() {
    remove(GUEST_CART_KEY);
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn load_raw(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local_storage()?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

fn save_raw(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}

/// Load a JSON value from `localStorage` for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = load_raw(key)?;
    serde_json::from_str(&raw).ok()
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    if let Ok(raw) = serde_json::to_string(value) {
        save_raw(key, &raw);
    }
}

/// In-memory `TokenStore` for state-transition tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct MemoryStorage {
    token: std::cell::RefCell<Option<String>>,
}

#[cfg(test)]
impl MemoryStorage {
    pub(crate) fn with_token(token: &str) -> Self {
        Self { token: std::cell::RefCell::new(Some(token.to_owned())) }
    }
}

#[cfg(test)]
impl TokenStore for MemoryStorage {
    fn load_token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn save_token(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_owned());
    }

    fn clear_token(&self) {
        *self.token.borrow_mut() = None;
    }
}
