use std::cell::RefCell;
use std::pin::pin;
use std::task::{Context, Poll, Waker};

use super::*;
use crate::util::storage::MemoryStorage;
use market::models::{AuthSession, Role, User};

/// Drive a future whose awaits all complete immediately.
fn run_ready<F: Future>(fut: F) -> F::Output {
    let mut fut = pin!(fut);
    match fut.as_mut().poll(&mut Context::from_waker(Waker::noop())) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("future was not immediately ready"),
    }
}

fn line(id: &str, quantity: u32) -> CartLine {
    CartLine { item_id: id.to_owned(), kind: LineKind::Product, name: id.to_owned(), unit_price: 5.0, quantity }
}

fn ids(cart: &Cart) -> Vec<String> {
    cart.items.iter().map(|l| l.item_id.clone()).collect()
}

#[test]
fn every_line_uploaded_leaves_nothing_pending() {
    let sent = RefCell::new(Vec::new());
    let stored = RefCell::new(Vec::new());

    let result = run_ready(upload_guest_lines(
        vec![line("a", 1), line("b", 2)],
        |body: AddToCart| {
            sent.borrow_mut().push((body.item_id.clone(), body.quantity));
            std::future::ready(Ok(Cart::default()))
        },
        |pending: &Cart| stored.borrow_mut().push(ids(pending)),
    ));

    assert!(result.is_ok());
    assert_eq!(sent.into_inner(), vec![("a".to_owned(), 1), ("b".to_owned(), 2)]);
    assert_eq!(stored.into_inner(), vec![vec!["b".to_owned()], Vec::<String>::new()]);
}

#[test]
fn failed_upload_keeps_only_unsent_lines_pending() {
    let sent = RefCell::new(Vec::new());
    let stored = RefCell::new(Vec::new());

    let result = run_ready(upload_guest_lines(
        vec![line("a", 1), line("b", 1), line("c", 3)],
        |body: AddToCart| {
            sent.borrow_mut().push(body.item_id.clone());
            let outcome = if body.item_id == "b" {
                Err(ApiError::Http { status: 409, message: "Out of stock".to_owned() })
            } else {
                Ok(Cart::default())
            };
            std::future::ready(outcome)
        },
        |pending: &Cart| stored.borrow_mut().push(ids(pending)),
    ));

    assert_eq!(result, Err(ApiError::Http { status: 409, message: "Out of stock".to_owned() }));
    // "c" is never attempted once "b" fails.
    assert_eq!(sent.into_inner(), vec!["a".to_owned(), "b".to_owned()]);
    // "a" reached the backend, so the stored cart drops it and a retry cannot
    // send it twice.
    assert_eq!(stored.into_inner(), vec![vec!["b".to_owned(), "c".to_owned()]]);
}

#[test]
fn first_line_failing_leaves_storage_untouched() {
    let stored = RefCell::new(Vec::new());
    let result = run_ready(upload_guest_lines(
        vec![line("a", 1)],
        |_: AddToCart| std::future::ready(Err(ApiError::Network("offline".to_owned()))),
        |pending: &Cart| stored.borrow_mut().push(ids(pending)),
    ));
    assert!(result.is_err());
    assert!(stored.into_inner().is_empty());
}

#[test]
fn restoring_session_is_not_ready_for_cart_changes() {
    let mut auth = AuthState::pending();
    auth.restore(&MemoryStorage::with_token("tok"));
    assert!(auth.loading);
    assert_eq!(cart_target(&auth), CartTarget::NotReady);
}

#[test]
fn visitor_without_token_uses_guest_cart() {
    let mut auth = AuthState::pending();
    auth.restore(&MemoryStorage::default());
    assert_eq!(cart_target(&auth), CartTarget::Guest);
}

#[test]
fn signed_in_user_uses_server_cart() {
    let mut auth = AuthState::pending();
    auth.login_succeeded(
        &MemoryStorage::default(),
        AuthSession {
            token: "tok".to_owned(),
            user: User {
                id: "u1".to_owned(),
                name: "Alice".to_owned(),
                email: "alice@example.com".to_owned(),
                phone: None,
                role: Role::Customer,
                is_admin: false,
            },
        },
    );
    assert_eq!(cart_target(&auth), CartTarget::Server);
}
