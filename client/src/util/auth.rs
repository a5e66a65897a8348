//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical guard and 401 behavior: the storefront
//! bounces to `/login`, the admin panel to `/admin/login`, and any request
//! that comes back 401 drops the stored token first.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use market::ApiError;

use crate::state::auth::AuthState;
use crate::state::cart::CartState;
use crate::state::Stores;
use crate::state::notice::NoticeLevel;
use crate::util::notify::notify;
use crate::util::storage::BrowserStorage;

/// Which part of the site a page belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Area {
    Store,
    Admin,
}

impl Area {
    #[must_use]
    pub fn login_path(self) -> &'static str {
        match self {
            Self::Store => "/login",
            Self::Admin => "/admin/login",
        }
    }
}

/// What the UI should do with a failed request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorAction {
    /// Clear the session and go to this login page.
    Redirect(&'static str),
    /// Show the message in a notice.
    Notify(String),
}

#[must_use]
pub fn resolve_error(err: &ApiError, area: Area) -> ErrorAction {
    if err.is_unauthorized() {
        ErrorAction::Redirect(area.login_path())
    } else {
        ErrorAction::Notify(err.to_string())
    }
}

/// Redirect once auth has loaded and nobody is signed in.
#[must_use]
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Redirect once auth has loaded and the user is not an admin.
#[must_use]
pub fn should_redirect_non_admin(state: &AuthState) -> bool {
    !state.loading && !state.is_admin()
}

/// Redirect to the area's login page whenever the guard for that area fails.
pub fn install_auth_guard<F>(auth: RwSignal<AuthState>, area: Area, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = auth.get();
        let redirect = match area {
            Area::Store => should_redirect_unauth(&state),
            Area::Admin => should_redirect_non_admin(&state),
        };
        if redirect {
            navigate(area.login_path(), NavigateOptions::default());
        }
    });
}

/// Surface a request failure: a 401 clears the session and redirects, every
/// other error becomes an error notice.
pub fn report_error<F>(err: &ApiError, area: Area, stores: Stores, navigate: &F)
where
    F: Fn(&str, NavigateOptions),
{
    match resolve_error(err, area) {
        ErrorAction::Redirect(path) => {
            stores.auth.update(|a| a.session_expired(&BrowserStorage));
            stores.cart.update(CartState::signed_out);
            notify(stores.notices, NoticeLevel::Error, err.to_string());
            navigate(path, NavigateOptions::default());
        }
        ErrorAction::Notify(message) => notify(stores.notices, NoticeLevel::Error, message),
    }
}
