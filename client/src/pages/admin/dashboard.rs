//! Admin landing page with headline counts.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use market::cart::format_price;
use market::models::DashboardStats;

use crate::components::load_status::LoadStatus;
use crate::net::api;
use crate::pages::admin::AdminLayout;
use crate::state::Stores;
use crate::util::auth::Area;
use crate::util::loader::spawn_load;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! {
        <AdminLayout title="Dashboard">
            <StatsGrid/>
        </AdminLayout>
    }
}

#[component]
fn StatsGrid() -> impl IntoView {
    let stores = Stores::expect();
    let navigate = use_navigate();
    let stats = RwSignal::new(None::<DashboardStats>);
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        spawn_load(stats, error, Area::Admin, stores, navigate.clone(), api::fetch_admin_stats());
    });

    view! {
        <LoadStatus loading=Signal::derive(move || stats.with(Option::is_none) && error.with(Option::is_none)) error=error>
            {move || {
                stats
                    .get()
                    .map(|s| {
                        view! {
                            <div class="stats">
                                <StatTile label="Users" value=s.users.to_string() href="/admin/users"/>
                                <StatTile label="Consultants" value=s.consultants.to_string() href="/admin/consultants"/>
                                <StatTile
                                    label="Pending approval"
                                    value=s.pending_consultants.to_string()
                                    href="/admin/consultants"
                                />
                                <StatTile label="Products" value=s.products.to_string() href="/admin/products"/>
                                <StatTile label="Orders" value=s.orders.to_string() href="/admin/orders"/>
                                <StatTile label="Revenue" value=format_price(s.revenue) href="/admin/orders"/>
                            </div>
                        }
                    })
            }}
        </LoadStatus>
    }
}

#[component]
fn StatTile(label: &'static str, value: String, href: &'static str) -> impl IntoView {
    view! {
        <A href=href attr:class="stat">
            <span class="stat__value">{value}</span>
            <span class="stat__label">{label}</span>
        </A>
    }
}
