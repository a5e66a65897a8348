use super::*;

fn line(id: &str, price: f64, quantity: u32) -> CartLine {
    CartLine { item_id: id.to_owned(), kind: LineKind::Product, name: id.to_owned(), unit_price: price, quantity }
}

#[test]
fn adding_a_product_increments_count_and_total() {
    let mut state = CartState::guest(Cart { items: vec![line("p1", 9.5, 1)] });
    let count = state.item_count();
    let total = state.total();

    state.add_guest_line(line("p2", 14.0, 2));

    assert_eq!(state.item_count(), count + 1);
    assert!((state.total() - (total + 28.0)).abs() < 1e-9);
}

#[test]
fn server_cart_replaces_local_state() {
    let mut state = CartState::guest(Cart { items: vec![line("p1", 1.0, 1)] });
    state.begin();
    assert!(state.loading);

    state.replaced(Cart { items: vec![line("p7", 3.0, 4)] });

    assert!(!state.guest);
    assert!(!state.loading);
    assert_eq!(state.cart.items[0].item_id, "p7");
}

#[test]
fn failure_keeps_cart_and_records_message() {
    let mut state = CartState::guest(Cart { items: vec![line("p1", 1.0, 1)] });
    state.begin();
    state.failed(&ApiError::Http { status: 409, message: "Out of stock".to_owned() });
    assert_eq!(state.item_count(), 1);
    assert_eq!(state.error.as_deref(), Some("Out of stock"));
}

#[test]
fn guest_lines_are_taken_once() {
    let mut state = CartState::guest(Cart { items: vec![line("p1", 1.0, 2)] });
    let lines = state.take_guest_lines();
    assert_eq!(lines.len(), 1);
    assert!(state.cart.is_empty());
    assert!(state.take_guest_lines().is_empty());
}

#[test]
fn server_cart_has_no_guest_lines() {
    let mut state = CartState::default();
    state.replaced(Cart { items: vec![line("p1", 1.0, 1)] });
    assert!(state.take_guest_lines().is_empty());
    assert_eq!(state.item_count(), 1);
}

#[test]
fn guest_quantity_updates_and_removal() {
    let mut state = CartState::guest(Cart { items: vec![line("p1", 2.0, 1)] });
    assert!(state.set_guest_quantity(LineKind::Product, "p1", 3));
    assert!((state.total() - 6.0).abs() < 1e-9);
    assert!(state.remove_guest_line(LineKind::Product, "p1"));
    assert_eq!(state.item_count(), 0);
}

#[test]
fn sign_out_resets_to_empty_guest_cart() {
    let mut state = CartState::default();
    state.replaced(Cart { items: vec![line("p1", 1.0, 1)] });
    state.signed_out();
    assert!(state.guest);
    assert!(state.cart.is_empty());
}
