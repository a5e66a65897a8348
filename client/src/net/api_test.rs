use super::*;
use market::models::Role;

#[test]
fn bearer_prefixes_token() {
    assert_eq!(bearer("abc.def"), "Bearer abc.def");
}

#[test]
fn method_names_match_http_verbs() {
    assert_eq!(Method::Get.as_str(), "GET");
    assert_eq!(Method::Patch.as_str(), "PATCH");
    assert_eq!(Method::Delete.as_str(), "DELETE");
}

#[test]
fn to_body_serializes_login_request() {
    let body = to_body(&LoginRequest { email: "a@b.co".to_owned(), password: "pw".to_owned() }).unwrap();
    assert_eq!(body, serde_json::json!({ "email": "a@b.co", "password": "pw" }));
}

#[test]
fn to_body_serializes_user_draft_in_camel_case() {
    let draft = market::models::UserDraft {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        role: Role::Admin,
        is_admin: true,
        ..Default::default()
    };
    let body = to_body(&draft).unwrap();
    assert_eq!(body["isAdmin"], serde_json::json!(true));
    assert_eq!(body["role"], serde_json::json!("admin"));
    assert!(body.get("password").is_none());
}

#[test]
fn quantity_update_body_is_flat() {
    let body = to_body(&QuantityUpdate { quantity: 3 }).unwrap();
    assert_eq!(body, serde_json::json!({ "quantity": 3 }));
}

#[test]
fn server_side_placeholder_is_descriptive() {
    assert_eq!(UNAVAILABLE_ON_SERVER, "not available on server");
}
