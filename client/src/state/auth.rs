//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login
//! redirects and identity-dependent rendering. Every transition that changes
//! the session also writes through to a [`TokenStore`], so the stored token
//! and the in-memory session never disagree.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use market::ApiError;
use market::models::{AuthSession, User};

use crate::util::storage::TokenStore;

pub const ADMIN_ONLY_MESSAGE: &str = "This account does not have admin access.";
pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please sign in again.";

/// Authentication state tracking the current user, token and request status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
    /// Session restore (token lookup + profile fetch) still in progress.
    pub loading: bool,
    /// A login/register request is in flight.
    pub busy: bool,
    pub error: Option<String>,
}

impl AuthState {
    /// Initial state before the browser has been consulted. Server renders
    /// and the first client render agree on this.
    #[must_use]
    pub fn pending() -> Self {
        Self { loading: true, ..Self::default() }
    }

    /// Pick up a stored token. Returns it when a profile fetch should follow;
    /// otherwise the session resolves as signed out.
    pub fn restore(&mut self, store: &impl TokenStore) -> Option<String> {
        self.token = store.load_token();
        self.loading = self.token.is_some();
        self.token.clone()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(User::has_admin_access)
    }

    pub fn begin_request(&mut self) {
        self.busy = true;
        self.error = None;
    }

    pub fn login_succeeded(&mut self, store: &impl TokenStore, session: AuthSession) {
        store.save_token(&session.token);
        self.token = Some(session.token);
        self.user = Some(session.user);
        self.loading = false;
        self.busy = false;
        self.error = None;
    }

    /// Admin-panel login: a valid session for a non-admin account is refused
    /// and nothing is persisted. Returns whether the session was accepted.
    pub fn admin_login_succeeded(&mut self, store: &impl TokenStore, session: AuthSession) -> bool {
        if session.user.has_admin_access() {
            self.login_succeeded(store, session);
            return true;
        }
        self.reject(store, ADMIN_ONLY_MESSAGE.to_owned());
        false
    }

    pub fn login_failed(&mut self, store: &impl TokenStore, err: &ApiError) {
        let message = match err {
            ApiError::Unauthorized => "Invalid email or password.".to_owned(),
            other => other.to_string(),
        };
        self.reject(store, message);
    }

    pub fn profile_loaded(&mut self, user: User) {
        self.user = Some(user);
        self.loading = false;
    }

    pub fn logout(&mut self, store: &impl TokenStore) {
        store.clear_token();
        *self = Self::default();
    }

    /// A request came back 401: drop the session and explain why.
    pub fn session_expired(&mut self, store: &impl TokenStore) {
        self.logout(store);
        self.error = Some(SESSION_EXPIRED_MESSAGE.to_owned());
    }

    fn reject(&mut self, store: &impl TokenStore, message: String) {
        store.clear_token();
        self.token = None;
        self.user = None;
        self.loading = false;
        self.busy = false;
        self.error = Some(message);
    }
}
