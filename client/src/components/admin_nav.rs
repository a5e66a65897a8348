//! Side navigation for the admin panel.

use leptos::prelude::*;
use leptos_router::components::A;

const LINKS: [(&str, &str); 12] = [
    ("/admin", "Dashboard"),
    ("/admin/users", "Users"),
    ("/admin/customers", "Customers"),
    ("/admin/products", "Products"),
    ("/admin/consultants", "Consultants"),
    ("/admin/categories", "Categories"),
    ("/admin/ailments", "Ailments"),
    ("/admin/specializations", "Specializations"),
    ("/admin/orders", "Orders"),
    ("/admin/reviews", "Reviews"),
    ("/admin/settings", "Settings"),
    ("/", "Back to store"),
];

#[component]
pub fn AdminNav() -> impl IntoView {
    view! {
        <nav class="admin-nav">
            {LINKS
                .into_iter()
                .map(|(href, label)| view! { <A href=href attr:class="admin-nav__link">{label}</A> })
                .collect_view()}
        </nav>
    }
}
