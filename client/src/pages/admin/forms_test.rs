use super::*;
use std::collections::BTreeMap;

use market::models::TaxonomyRef;

fn user_form() -> UserForm {
    UserForm {
        name: " Ada ".to_owned(),
        email: "ada@example.com".to_owned(),
        phone: String::new(),
        role: "admin".to_owned(),
        is_admin: false,
        password: "secret1".to_owned(),
    }
}

#[test]
fn user_form_builds_draft() {
    let draft = user_form().to_draft(true).unwrap();
    assert_eq!(draft.name, "Ada");
    assert_eq!(draft.role, Role::Admin);
    assert_eq!(draft.phone, None);
    assert_eq!(draft.password.as_deref(), Some("secret1"));
}

#[test]
fn user_form_requires_password_only_when_creating() {
    let form = UserForm { password: String::new(), ..user_form() };
    assert_eq!(form.to_draft(true), Err("Password must be at least 6 characters."));
    assert_eq!(form.to_draft(false).unwrap().password, None);
}

#[test]
fn user_form_rejects_short_password_and_bad_email() {
    let short = UserForm { password: "abc".to_owned(), ..user_form() };
    assert_eq!(short.to_draft(false), Err("Password must be at least 6 characters."));
    let bad = UserForm { email: "nope".to_owned(), ..user_form() };
    assert_eq!(bad.to_draft(true), Err(INVALID_EMAIL));
}

#[test]
fn user_form_round_trips_from_user() {
    let user = User {
        id: "u1".to_owned(),
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        phone: Some("555".to_owned()),
        role: Role::Consultant,
        is_admin: true,
    };
    let form = UserForm::from(&user);
    assert_eq!(form.role, "consultant");
    assert!(form.is_admin);
    assert!(form.password.is_empty());
}

#[test]
fn product_form_parses_numbers_and_lists() {
    let form = ProductForm {
        name: "Lamp".to_owned(),
        price: "19.99".to_owned(),
        stock: "7".to_owned(),
        category: "  ".to_owned(),
        images: "a.jpg\n\n b.jpg ".to_owned(),
        specifications: "Weight: 2kg\nnonsense".to_owned(),
        ..ProductForm::default()
    };
    let draft = form.to_draft().unwrap();
    assert!((draft.price - 19.99).abs() < f64::EPSILON);
    assert_eq!(draft.stock, 7);
    assert_eq!(draft.category, None);
    assert_eq!(draft.images, vec!["a.jpg".to_owned(), "b.jpg".to_owned()]);
    assert_eq!(draft.specifications.get("Weight").map(String::as_str), Some("2kg"));
    assert_eq!(draft.specifications.len(), 1);
}

#[test]
fn product_form_rejects_bad_price_and_stock() {
    let base = ProductForm { name: "Lamp".to_owned(), price: "10".to_owned(), ..ProductForm::default() };
    assert_eq!(ProductForm { price: "-1".to_owned(), ..base.clone() }.to_draft(), Err("Enter a valid price."));
    assert_eq!(ProductForm { price: "abc".to_owned(), ..base.clone() }.to_draft(), Err("Enter a valid price."));
    assert_eq!(
        ProductForm { stock: "2.5".to_owned(), ..base.clone() }.to_draft(),
        Err("Stock must be a whole number.")
    );
    assert_eq!(base.to_draft().unwrap().stock, 0);
}

#[test]
fn product_form_prefills_from_product() {
    let mut specs = BTreeMap::new();
    specs.insert("Size".to_owned(), "L".to_owned());
    let product = Product {
        id: "p1".to_owned(),
        name: "Lamp".to_owned(),
        price: 12.5,
        stock: 4,
        category: Some(TaxonomyRef { id: "c1".to_owned(), name: "Home".to_owned() }),
        features: vec!["Warm".to_owned(), "Quiet".to_owned()],
        specifications: specs,
        ..Product::default()
    };
    let form = ProductForm::from(&product);
    assert_eq!(form.price, "12.5");
    assert_eq!(form.category, "c1");
    assert_eq!(form.features, "Warm\nQuiet");
    assert_eq!(form.specifications, "Size: L");
}

#[test]
fn taxonomy_form_derives_slug_and_status() {
    let form = TaxonomyForm { name: "Sleep & Rest".to_owned(), active: false, ..TaxonomyForm::default() };
    let draft = form.to_draft().unwrap();
    assert_eq!(draft.slug, "sleep-rest");
    assert_eq!(draft.status, RecordStatus::Inactive);
    assert_eq!(draft.parent, None);
}

#[test]
fn taxonomy_form_normalizes_given_slug() {
    let form = TaxonomyForm { name: "Anxiety".to_owned(), slug: "Stress Relief".to_owned(), ..TaxonomyForm::default() };
    assert_eq!(form.to_draft().unwrap().slug, "stress-relief");
    assert_eq!(TaxonomyForm::default().to_draft(), Err("Name is required."));
}

#[test]
fn settings_form_converts_percent_to_fraction() {
    let form = SettingsForm {
        site_name: "Wellspring".to_owned(),
        contact_email: "hi@wellspring.test".to_owned(),
        shipping_fee: "5".to_owned(),
        tax_percent: "8.25".to_owned(),
        free_shipping_threshold: String::new(),
    };
    let settings = form.to_settings().unwrap();
    assert!((settings.tax_rate - 0.0825).abs() < 1e-9);
    assert_eq!(settings.free_shipping_threshold, None);
}

#[test]
fn settings_form_validates_ranges() {
    let form = SettingsForm {
        site_name: "Wellspring".to_owned(),
        contact_email: "hi@wellspring.test".to_owned(),
        shipping_fee: "5".to_owned(),
        tax_percent: "120".to_owned(),
        free_shipping_threshold: "50".to_owned(),
    };
    assert_eq!(form.to_settings(), Err("Tax rate must be between 0 and 100."));
    let ok = SettingsForm { tax_percent: "0".to_owned(), ..form };
    assert_eq!(ok.to_settings().unwrap().free_shipping_threshold, Some(50.0));
}

#[test]
fn settings_form_prefills_percent() {
    let settings = Settings { tax_rate: 0.08, free_shipping_threshold: Some(75.0), ..Settings::default() };
    let form = SettingsForm::from(&settings);
    assert_eq!(form.tax_percent, "8");
    assert_eq!(form.free_shipping_threshold, "75");
}
