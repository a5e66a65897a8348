use super::*;
use serde_json::json;

#[test]
fn list_body_accepts_bare_array_and_envelope() {
    let bare: ListBody<Taxonomy> = serde_json::from_value(json!([{ "_id": "c1", "name": "Speech" }])).unwrap();
    let wrapped: ListBody<Taxonomy> =
        serde_json::from_value(json!({ "data": [{ "_id": "c1", "name": "Speech" }] })).unwrap();
    assert_eq!(bare.into_vec(), wrapped.into_vec());
}

#[test]
fn user_accepts_mongo_id_and_defaults_role() {
    let user: User = serde_json::from_value(json!({
        "_id": "u1",
        "name": "Ada",
        "email": "ada@example.com"
    }))
    .unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.role, Role::Customer);
    assert!(!user.has_admin_access());
}

#[test]
fn admin_access_from_flag_or_role() {
    let flagged = User { is_admin: true, ..User::default() };
    let by_role = User { role: Role::Admin, ..User::default() };
    assert!(flagged.has_admin_access());
    assert!(by_role.has_admin_access());
}

#[test]
fn taxonomy_ref_accepts_id_or_populated_object() {
    let consultant: Consultant = serde_json::from_value(json!({
        "_id": "k1",
        "categories": ["c1", { "_id": "c2", "name": "Autism" }],
        "totalRatings": 4,
        "rating": 4.5
    }))
    .unwrap();
    assert_eq!(consultant.categories[0], TaxonomyRef { id: "c1".to_owned(), name: String::new() });
    assert_eq!(consultant.categories[1].to_string(), "Autism");
    assert_eq!(consultant.total_ratings, 4);
    assert_eq!(consultant.status, ApprovalStatus::Pending);
}

#[test]
fn consultant_starting_price_is_cheapest_service() {
    let consultant = Consultant {
        services: vec![
            ConsultantService { id: "s1".to_owned(), name: "Intro".to_owned(), price: 80.0, duration: 60 },
            ConsultantService { id: "s2".to_owned(), name: "Follow-up".to_owned(), price: 45.0, duration: 30 },
        ],
        ..Consultant::default()
    };
    assert_eq!(consultant.starting_price(), Some(45.0));
    assert_eq!(consultant.service("s1").map(|s| s.duration), Some(60));
    assert_eq!(Consultant::default().starting_price(), None);
}

#[test]
fn slugify_collapses_separators() {
    assert_eq!(slugify("Speech & Language  Therapy"), "speech-language-therapy");
    assert_eq!(slugify("  ADHD "), "adhd");
    assert_eq!(slugify("--"), "");
}

#[test]
fn specifications_parse_and_format() {
    let specs = parse_specifications("Weight: 2kg\n\nno colon here\n : empty key\nColor:Blue");
    assert_eq!(specs.len(), 2);
    assert_eq!(specs.get("Color").map(String::as_str), Some("Blue"));
    assert_eq!(format_specifications(&specs), "Color: Blue\nWeight: 2kg");
}

#[test]
fn parse_lines_drops_blank_entries() {
    assert_eq!(parse_lines(" one \n\n two\n   "), vec!["one".to_owned(), "two".to_owned()]);
}

#[test]
fn order_totals_consistency_check() {
    let mut order = Order {
        items: vec![
            OrderItem { product_id: "p1".to_owned(), name: String::new(), quantity: 2, price: 10.0 },
            OrderItem { product_id: "p2".to_owned(), name: String::new(), quantity: 1, price: 5.5 },
        ],
        shipping: 4.0,
        tax: 2.04,
        total: 31.54,
        ..Order::default()
    };
    assert!(order.totals_consistent());
    order.total = 30.0;
    assert!(!order.totals_consistent());
}

#[test]
fn order_status_parse_round_trips_names() {
    for status in OrderStatus::ALL {
        assert_eq!(OrderStatus::parse(status.as_str()), Some(status));
    }
    assert_eq!(PaymentStatus::parse("paid"), Some(PaymentStatus::Paid));
    assert_eq!(PaymentStatus::parse("unknown"), None);
}

#[test]
fn review_draft_validation() {
    assert_eq!(ReviewDraft::validate(0, "fine"), Err("Choose a rating between 1 and 5."));
    assert_eq!(ReviewDraft::validate(4, "   "), Err("Write a short comment."));
    assert_eq!(
        ReviewDraft::validate(5, " Great session "),
        Ok(ReviewDraft { rating: 5, comment: "Great session".to_owned() })
    );
}

#[test]
fn settings_tolerate_missing_fields() {
    let settings: Settings = serde_json::from_value(json!({ "shippingFee": 4.5 })).unwrap();
    assert!((settings.shipping_fee - 4.5).abs() < f64::EPSILON);
    assert_eq!(settings.free_shipping_threshold, None);
}

#[test]
fn product_draft_serializes_camel_case_and_skips_missing_category() {
    let draft = ProductDraft { name: "Kit".to_owned(), price: 12.0, ..ProductDraft::default() };
    let value = serde_json::to_value(&draft).unwrap();
    assert!(value.get("category").is_none());
    assert_eq!(value["name"], "Kit");
}
