use super::*;
use market::models::{Role, User};

fn admin_user() -> User {
    User { id: "u1".to_owned(), name: "Root".to_owned(), role: Role::Admin, ..User::default() }
}

#[test]
fn unauthorized_admin_request_redirects_to_admin_login() {
    assert_eq!(resolve_error(&ApiError::Unauthorized, Area::Admin), ErrorAction::Redirect("/admin/login"));
}

#[test]
fn unauthorized_store_request_redirects_to_login() {
    assert_eq!(resolve_error(&ApiError::Unauthorized, Area::Store), ErrorAction::Redirect("/login"));
}

#[test]
fn other_errors_become_notices() {
    let err = ApiError::Http { status: 404, message: "Category not found".to_owned() };
    assert_eq!(resolve_error(&err, Area::Admin), ErrorAction::Notify("Category not found".to_owned()));
    assert_eq!(
        resolve_error(&ApiError::Network("offline".to_owned()), Area::Store),
        ErrorAction::Notify("network error: offline".to_owned())
    );
}

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    let state = AuthState { loading: false, ..AuthState::default() };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = AuthState::pending();
    assert!(!should_redirect_unauth(&state));
    assert!(!should_redirect_non_admin(&state));
}

#[test]
fn non_admin_user_is_redirected_from_admin_area() {
    let state = AuthState { user: Some(User { role: Role::Customer, ..admin_user() }), ..AuthState::default() };
    assert!(!should_redirect_unauth(&state));
    assert!(should_redirect_non_admin(&state));
}

#[test]
fn admin_user_passes_both_guards() {
    let state = AuthState { user: Some(admin_user()), ..AuthState::default() };
    assert!(!should_redirect_unauth(&state));
    assert!(!should_redirect_non_admin(&state));
}
