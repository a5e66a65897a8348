//! Cart mutations shared by product pages, consultant pages and the cart page.
//!
//! SYSTEM CONTEXT
//! ==============
//! With a session every mutation is a backend request and the returned cart
//! replaces local state. Without one the guest cart is edited in place and
//! written back to local storage after each change. While a stored session
//! is still being restored the cart is neither, so mutations wait.

#[cfg(test)]
#[path = "cart_actions_test.rs"]
mod cart_actions_test;

use std::future::Future;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use market::ApiError;
use market::cart::{AddToCart, Cart, CartLine, LineKind};

use crate::net::api;
use crate::state::Stores;
use crate::state::auth::AuthState;
use crate::state::cart::CartState;
use crate::state::notice::NoticeLevel;
use crate::util::auth::{Area, report_error};
use crate::util::notify::notify;
use crate::util::storage::{clear_guest_cart, load_guest_cart, save_guest_cart};

/// Which cart a mutation should go to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CartTarget {
    Guest,
    Server,
    /// A stored token is still being checked.
    NotReady,
}

#[must_use]
pub fn cart_target(auth: &AuthState) -> CartTarget {
    if auth.loading {
        CartTarget::NotReady
    } else if auth.is_authenticated() {
        CartTarget::Server
    } else {
        CartTarget::Guest
    }
}

pub const SESSION_LOADING_MESSAGE: &str = "Still restoring your session. Try again in a moment.";

/// Resolve the target, telling the user when the cart is not ready yet.
fn target(stores: Stores) -> Option<CartTarget> {
    match stores.auth.with_untracked(cart_target) {
        CartTarget::NotReady => {
            notify(stores.notices, NoticeLevel::Info, SESSION_LOADING_MESSAGE);
            None
        }
        ready => Some(ready),
    }
}

fn persist_guest(stores: Stores) {
    stores.cart.with_untracked(|c| save_guest_cart(&c.cart));
}

fn apply_result<F>(stores: Stores, result: Result<Cart, ApiError>, navigate: &F) -> bool
where
    F: Fn(&str, NavigateOptions),
{
    match result {
        Ok(cart) => {
            stores.cart.update(|c| c.replaced(cart));
            true
        }
        Err(err) => {
            stores.cart.update(|c| c.failed(&err));
            report_error(&err, Area::Store, stores, navigate);
            false
        }
    }
}

/// Show the locally stored guest cart.
pub fn load_guest(stores: Stores) {
    stores.cart.set(CartState::guest(load_guest_cart()));
}

/// Upload guest lines in order, stopping at the first failure. After each
/// accepted line `persist` receives the lines still pending, so a later
/// retry never sends the backend a line it already merged.
///
/// # Errors
///
/// Returns the first failed upload; the failed line and the rest stay
/// pending.
pub async fn upload_guest_lines<U, Fut, P>(lines: Vec<CartLine>, mut upload: U, mut persist: P) -> Result<(), ApiError>
where
    U: FnMut(AddToCart) -> Fut,
    Fut: Future<Output = Result<Cart, ApiError>>,
    P: FnMut(&Cart),
{
    let mut pending = Cart { items: lines };
    while let Some(line) = pending.items.first() {
        upload(AddToCart::from(line)).await?;
        pending.items.remove(0);
        persist(&pending);
    }
    Ok(())
}

fn store_pending(pending: &Cart) {
    if pending.is_empty() {
        clear_guest_cart();
    } else {
        save_guest_cart(pending);
    }
}

/// After sign-in: push any guest lines to the backend, then adopt the
/// server cart. The server cart is fetched even when an upload failed, and
/// local storage keeps only the lines that never reached the backend.
///
/// # Errors
///
/// Returns the failed cart fetch, otherwise the first failed upload.
pub async fn adopt_server_cart(stores: Stores) -> Result<(), ApiError> {
    let pending = stores.cart.try_update(CartState::take_guest_lines).unwrap_or_default();
    stores.cart.update(CartState::begin);
    let uploaded =
        upload_guest_lines(pending, |body| async move { api::add_to_cart(&body).await }, store_pending).await;
    let cart = api::fetch_cart().await?;
    stores.cart.update(|c| c.replaced(cart));
    uploaded
}

/// Add a line, merging with an existing line for the same item.
pub fn add_line<F>(stores: Stores, line: CartLine, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    let Some(target) = target(stores) else {
        return;
    };
    let name = line.name.clone();
    if target == CartTarget::Guest {
        stores.cart.update(|c| c.add_guest_line(line));
        persist_guest(stores);
        notify(stores.notices, NoticeLevel::Success, format!("Added {name} to your cart."));
        return;
    }
    stores.cart.update(CartState::begin);
    leptos::task::spawn_local(async move {
        let result = api::add_to_cart(&AddToCart::from(&line)).await;
        if apply_result(stores, result, &navigate) {
            notify(stores.notices, NoticeLevel::Success, format!("Added {name} to your cart."));
        }
    });
}

/// Change a line's quantity; zero removes it.
pub fn set_quantity<F>(stores: Stores, kind: LineKind, item_id: String, quantity: u32, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    let Some(target) = target(stores) else {
        return;
    };
    if target == CartTarget::Guest {
        stores.cart.update(|c| {
            c.set_guest_quantity(kind, &item_id, quantity);
        });
        persist_guest(stores);
        return;
    }
    stores.cart.update(CartState::begin);
    leptos::task::spawn_local(async move {
        let result = if quantity == 0 {
            api::remove_cart_line(kind, &item_id).await
        } else {
            api::update_cart_line(kind, &item_id, quantity).await
        };
        apply_result(stores, result, &navigate);
    });
}

pub fn remove_line<F>(stores: Stores, kind: LineKind, item_id: String, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    set_quantity(stores, kind, item_id, 0, navigate);
}

/// Empty the cart entirely.
pub fn clear<F>(stores: Stores, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    let Some(target) = target(stores) else {
        return;
    };
    if target == CartTarget::Guest {
        stores.cart.update(|c| c.cart.clear());
        clear_guest_cart();
        return;
    }
    stores.cart.update(CartState::begin);
    leptos::task::spawn_local(async move {
        let result = api::clear_cart().await;
        apply_result(stores, result, &navigate);
    });
}
