//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `cart`, `notice`, admin lists) so
//! individual components can depend on small focused models. The app root
//! provides `auth`, `cart` and `notice` as `RwSignal` contexts; admin lists
//! are page-local.

pub mod admin;
pub mod auth;
pub mod cart;
pub mod notice;

use leptos::prelude::*;

use self::auth::AuthState;
use self::cart::CartState;
use self::notice::NoticeState;

/// The app-wide signals, gathered once per component so async handlers can
/// carry them by value.
#[derive(Clone, Copy)]
pub struct Stores {
    pub auth: RwSignal<AuthState>,
    pub cart: RwSignal<CartState>,
    pub notices: RwSignal<NoticeState>,
}

impl Stores {
    /// Create the signals and register each one as a context.
    pub fn provide() -> Self {
        let stores = Self {
            auth: RwSignal::new(AuthState::pending()),
            cart: RwSignal::new(CartState::default()),
            notices: RwSignal::new(NoticeState::default()),
        };
        provide_context(stores.auth);
        provide_context(stores.cart);
        provide_context(stores.notices);
        stores
    }

    #[must_use]
    pub fn expect() -> Self {
        Self {
            auth: expect_context::<RwSignal<AuthState>>(),
            cart: expect_context::<RwSignal<CartState>>(),
            notices: expect_context::<RwSignal<NoticeState>>(),
        }
    }
}
