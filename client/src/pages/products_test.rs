use super::*;

fn lamp() -> Product {
    Product { id: "p1".to_owned(), name: "Salt lamp".to_owned(), price: 24.5, stock: 3, ..Product::default() }
}

#[test]
fn product_line_uses_current_price_and_one_unit() {
    let line = product_line(&lamp());
    assert_eq!(line.item_id, "p1");
    assert_eq!(line.kind, LineKind::Product);
    assert_eq!(line.quantity, 1);
    assert!((line.unit_price - 24.5).abs() < f64::EPSILON);
}

#[test]
fn clamp_quantity_stays_within_stock() {
    assert_eq!(clamp_quantity("2", 3), 2);
    assert_eq!(clamp_quantity("9", 3), 3);
    assert_eq!(clamp_quantity("0", 3), 1);
    assert_eq!(clamp_quantity("abc", 3), 1);
    assert_eq!(clamp_quantity("4", 0), 1);
}

#[test]
fn product_query_drops_blank_filters() {
    assert_eq!(product_query("  ", ""), ProductQuery::default());
    assert_eq!(
        product_query("c1", " oil "),
        ProductQuery { category: Some("c1".to_owned()), search: Some("oil".to_owned()) }
    );
}
