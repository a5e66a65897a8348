use super::*;

fn product(id: &str, price: f64, quantity: u32) -> CartLine {
    CartLine { item_id: id.to_owned(), kind: LineKind::Product, name: format!("Product {id}"), unit_price: price, quantity }
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn adding_new_product_grows_count_and_total() {
    let mut cart = Cart { items: vec![product("p1", 10.0, 1)] };
    let (count, total) = (cart.item_count(), cart.total());

    cart.add(product("p2", 12.5, 3));

    assert_eq!(cart.item_count(), count + 1);
    assert!(approx(cart.total(), total + 12.5 * 3.0));
}

#[test]
fn adding_existing_product_merges_quantity() {
    let mut cart = Cart::default();
    cart.add(product("p1", 10.0, 1));
    cart.add(product("p1", 10.0, 2));
    assert_eq!(cart.item_count(), 1);
    assert_eq!(cart.unit_count(), 3);
}

#[test]
fn product_and_service_with_same_id_are_distinct_lines() {
    let mut cart = Cart::default();
    cart.add(product("x", 10.0, 1));
    cart.add(CartLine { kind: LineKind::Service, ..product("x", 60.0, 1) });
    assert_eq!(cart.item_count(), 2);
    assert!(cart.remove(LineKind::Service, "x"));
    assert_eq!(cart.item_count(), 1);
}

#[test]
fn zero_quantity_add_is_ignored() {
    let mut cart = Cart::default();
    cart.add(product("p1", 10.0, 0));
    assert!(cart.is_empty());
}

#[test]
fn set_quantity_updates_or_removes() {
    let mut cart = Cart { items: vec![product("p1", 4.0, 1), product("p2", 1.0, 1)] };
    assert!(cart.set_quantity(LineKind::Product, "p1", 5));
    assert!(approx(cart.total(), 21.0));
    assert!(cart.set_quantity(LineKind::Product, "p2", 0));
    assert_eq!(cart.item_count(), 1);
    assert!(!cart.set_quantity(LineKind::Product, "missing", 2));
}

#[test]
fn checkout_summary_adds_shipping_and_tax() {
    let cart = Cart { items: vec![product("p1", 19.99, 2)] };
    let settings = Settings { shipping_fee: 5.0, tax_rate: 0.1, ..Settings::default() };
    let summary = CheckoutSummary::from_cart(&cart, &settings);
    assert!(approx(summary.subtotal, 39.98));
    assert!(approx(summary.shipping, 5.0));
    assert!(approx(summary.tax, 4.0));
    assert!(approx(summary.total, 48.98));
}

#[test]
fn checkout_summary_waives_shipping_over_threshold() {
    let cart = Cart { items: vec![product("p1", 60.0, 1)] };
    let settings = Settings { shipping_fee: 5.0, free_shipping_threshold: Some(50.0), ..Settings::default() };
    let summary = CheckoutSummary::from_cart(&cart, &settings);
    assert!(approx(summary.shipping, 0.0));
    assert!(approx(summary.total, 60.0));
}

#[test]
fn checkout_summary_of_empty_cart_is_zero() {
    let settings = Settings { shipping_fee: 5.0, ..Settings::default() };
    assert_eq!(CheckoutSummary::from_cart(&Cart::default(), &settings), CheckoutSummary::default());
}

#[test]
fn cart_deserializes_camel_case_lines() {
    let cart: Cart = serde_json::from_str(
        r#"{"items":[{"itemId":"s1","kind":"service","name":"Assessment","unitPrice":90,"quantity":1}]}"#,
    )
    .unwrap();
    assert_eq!(cart.items[0].kind, LineKind::Service);
    assert!(approx(cart.total(), 90.0));
}

#[test]
fn format_price_groups_thousands() {
    assert_eq!(format_price(0.0), "$0.00");
    assert_eq!(format_price(5.5), "$5.50");
    assert_eq!(format_price(1234.567), "$1,234.57");
    assert_eq!(format_price(1_000_000.0), "$1,000,000.00");
    assert_eq!(format_price(-12.0), "-$12.00");
}
