use super::*;

fn user(id: &str, role: Role, is_admin: bool) -> User {
    User { id: id.to_owned(), role, is_admin, ..User::default() }
}

#[test]
fn only_customers_drops_staff_and_admins() {
    let users = vec![
        user("a", Role::Customer, false),
        user("b", Role::Consultant, false),
        user("c", Role::Admin, false),
        user("d", Role::Customer, true),
    ];
    let ids: Vec<String> = only_customers(users).into_iter().map(|u| u.id).collect();
    assert_eq!(ids, vec!["a".to_owned()]);
}
