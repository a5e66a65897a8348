//! Signed-in customer's profile and order history.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use market::cart::format_price;
use market::models::Order;

use crate::components::load_status::LoadStatus;
use crate::net::api;
use crate::state::Stores;
use crate::state::admin::ResourceList;
use crate::state::auth::AuthState;
use crate::util::auth::{Area, install_auth_guard};
use crate::util::loader::spawn_list_load;

#[component]
pub fn AccountPage() -> impl IntoView {
    let stores = Stores::expect();
    let navigate = use_navigate();
    let orders = RwSignal::new(ResourceList::<Order>::default());

    install_auth_guard(stores.auth, Area::Store, navigate.clone());

    Effect::new(move || {
        if !stores.auth.with(AuthState::is_authenticated) {
            return;
        }
        spawn_list_load(orders, Area::Store, stores, navigate.clone(), api::fetch_my_orders());
    });

    let profile = move || {
        stores.auth.with(|a| {
            a.user.as_ref().map(|u| {
                let phone = u.phone.clone().unwrap_or_default();
                view! {
                    <dl class="profile">
                        <dt>"Name"</dt>
                        <dd>{u.name.clone()}</dd>
                        <dt>"Email"</dt>
                        <dd>{u.email.clone()}</dd>
                        <dt>"Phone"</dt>
                        <dd>{phone}</dd>
                    </dl>
                }
            })
        })
    };

    view! {
        <section class="account">
            <h1>"My account"</h1>
            {profile}
            <h2>"Orders"</h2>
            <LoadStatus
                loading=Signal::derive(move || orders.with(|l| l.loading))
                error=Signal::derive(move || orders.with(|l| l.error.clone()))
            >
                <Show
                    when=move || orders.with(|l| !l.items.is_empty())
                    fallback=|| view! { <p class="page__empty">"No orders yet."</p> }
                >
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Order"</th>
                                <th>"Placed"</th>
                                <th>"Items"</th>
                                <th>"Status"</th>
                                <th>"Payment"</th>
                                <th>"Total"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || orders.get().items
                                key=|o| o.id.clone()
                                children=|order| {
                                    view! {
                                        <tr>
                                            <td>{order.id.clone()}</td>
                                            <td>{order.created_at.clone().unwrap_or_default()}</td>
                                            <td>{order.items.len()}</td>
                                            <td>{order.status.as_str()}</td>
                                            <td>{order.payment_status.as_str()}</td>
                                            <td>{format_price(order.total)}</td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </Show>
            </LoadStatus>
        </section>
    }
}
