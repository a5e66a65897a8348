use super::*;

#[test]
fn admin_paths_use_resource_segment() {
    assert_eq!(admin_collection(AdminResource::Specializations), "/api/admin/specializations");
    assert_eq!(admin_item(AdminResource::Categories, "c1"), "/api/admin/categories/c1");
    assert_eq!(admin_consultant_approve("k9"), "/api/admin/consultants/k9/approve");
    assert_eq!(admin_consultant_reject("k9"), "/api/admin/consultants/k9/reject");
    assert_eq!(admin_order_status("o1"), "/api/admin/orders/o1/status");
}

#[test]
fn taxonomy_kinds_map_to_admin_resources() {
    assert_eq!(AdminResource::taxonomy(TaxonomyKind::Ailment), AdminResource::Ailments);
    assert_eq!(taxonomy(TaxonomyKind::Category), "/api/categories");
}

#[test]
fn ids_are_percent_encoded() {
    assert_eq!(product("a/b c"), "/api/products/a%2Fb%20c");
}

#[test]
fn product_query_skips_empty_filters() {
    assert_eq!(products(&ProductQuery::default()), "/api/products");
    let query = ProductQuery { category: Some("  ".to_owned()), search: Some("sensory toys".to_owned()) };
    assert_eq!(products(&query), "/api/products?search=sensory%20toys");
}

#[test]
fn consultant_query_keeps_parameter_order() {
    let query = ConsultantQuery {
        category: Some("c1".to_owned()),
        ailment: Some("a&b".to_owned()),
        search: None,
    };
    assert_eq!(consultants(&query), "/api/consultants?category=c1&ailment=a%26b");
    assert_eq!(consultant_reviews("k1"), "/api/consultants/k1/reviews");
}

#[test]
fn cart_line_path_includes_kind() {
    assert_eq!(cart_line(LineKind::Service, "s1"), "/api/cart/service/s1");
    assert_eq!(cart_line(LineKind::Product, "p1"), "/api/cart/product/p1");
}
