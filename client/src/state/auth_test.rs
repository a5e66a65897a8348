use super::*;
use crate::util::storage::MemoryStorage;
use market::models::Role;

fn session(role: Role) -> AuthSession {
    AuthSession {
        token: "tok-123".to_owned(),
        user: User {
            id: "u1".to_owned(),
            name: "Alice".to_owned(),
            email: "alice@example.com".to_owned(),
            phone: None,
            role,
            is_admin: false,
        },
    }
}

#[test]
fn pending_state_is_loading_and_signed_out() {
    let state = AuthState::pending();
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn restore_without_token_resolves_signed_out() {
    let store = MemoryStorage::default();
    let mut state = AuthState::pending();
    assert_eq!(state.restore(&store), None);
    assert!(!state.loading);
}

#[test]
fn restore_with_token_waits_for_profile() {
    let store = MemoryStorage::with_token("tok-9");
    let mut state = AuthState::pending();
    assert_eq!(state.restore(&store), Some("tok-9".to_owned()));
    assert!(state.loading);
    state.profile_loaded(session(Role::Customer).user);
    assert!(!state.loading);
    assert!(state.is_authenticated());
}

#[test]
fn valid_login_stores_token_and_authenticates() {
    let store = MemoryStorage::default();
    let mut state = AuthState::default();
    state.begin_request();
    assert!(state.busy);

    state.login_succeeded(&store, session(Role::Customer));

    assert_eq!(store.load_token(), Some("tok-123".to_owned()));
    assert!(state.is_authenticated());
    assert!(!state.busy);
    assert_eq!(state.error, None);
}

#[test]
fn invalid_login_records_error_and_stores_nothing() {
    let store = MemoryStorage::default();
    let mut state = AuthState::default();
    state.begin_request();

    let err = ApiError::Http { status: 400, message: "Invalid credentials".to_owned() };
    state.login_failed(&store, &err);

    assert_eq!(store.load_token(), None);
    assert!(!state.is_authenticated());
    assert_eq!(state.error.as_deref(), Some("Invalid credentials"));
}

#[test]
fn login_401_reads_as_bad_credentials() {
    let store = MemoryStorage::with_token("stale");
    let mut state = AuthState::default();
    state.login_failed(&store, &ApiError::Unauthorized);
    assert_eq!(store.load_token(), None);
    assert_eq!(state.error.as_deref(), Some("Invalid email or password."));
}

#[test]
fn admin_login_rejects_non_admin_accounts() {
    let store = MemoryStorage::default();
    let mut state = AuthState::default();
    assert!(!state.admin_login_succeeded(&store, session(Role::Customer)));
    assert_eq!(store.load_token(), None);
    assert_eq!(state.error.as_deref(), Some(ADMIN_ONLY_MESSAGE));

    assert!(state.admin_login_succeeded(&store, session(Role::Admin)));
    assert!(state.is_admin());
    assert_eq!(store.load_token(), Some("tok-123".to_owned()));
}

#[test]
fn session_expiry_clears_token_and_explains() {
    let store = MemoryStorage::default();
    let mut state = AuthState::default();
    state.login_succeeded(&store, session(Role::Admin));

    state.session_expired(&store);

    assert_eq!(store.load_token(), None);
    assert_eq!(state.user, None);
    assert_eq!(state.error.as_deref(), Some(SESSION_EXPIRED_MESSAGE));
}

#[test]
fn logout_resets_everything() {
    let store = MemoryStorage::default();
    let mut state = AuthState::default();
    state.login_succeeded(&store, session(Role::Customer));
    state.logout(&store);
    assert_eq!(state, AuthState::default());
    assert_eq!(store.load_token(), None);
}
