//! Admin order list with status and payment-status updates.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use market::cart::format_price;
use market::endpoints::AdminResource;
use market::models::{Order, OrderStatus, OrderStatusUpdate, PaymentStatus};

use crate::components::load_status::LoadStatus;
use crate::net::api;
use crate::pages::admin::{AdminLayout, reload_trigger};
use crate::state::Stores;
use crate::state::admin::ResourceList;
use crate::state::notice::NoticeLevel;
use crate::util::auth::{Area, report_error};
use crate::util::loader::spawn_list_load;
use crate::util::notify::notify;

#[component]
pub fn AdminOrdersPage() -> impl IntoView {
    view! {
        <AdminLayout title="Orders">
            <OrdersTable/>
        </AdminLayout>
    }
}

#[component]
fn OrdersTable() -> impl IntoView {
    let stores = Stores::expect();
    let navigate = use_navigate();
    let list = RwSignal::new(ResourceList::<Order>::default());

    let reload = reload_trigger(list);
    let nav = navigate.clone();
    Effect::new(move || {
        reload.track();
        spawn_list_load(list, Area::Admin, stores, nav.clone(), api::admin_list::<Order>(AdminResource::Orders));
    });

    let on_update = Callback::new(move |(id, update): (String, OrderStatusUpdate)| {
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::update_order_status(&id, &update).await {
                Ok(order) => {
                    list.update(|l| {
                        l.upserted(order);
                        l.request_reload();
                    });
                    notify(stores.notices, NoticeLevel::Success, "Order updated.");
                }
                Err(err) => report_error(&err, Area::Admin, stores, &navigate),
            }
        });
    });

    view! {
        <LoadStatus
            loading=Signal::derive(move || list.with(|l| l.loading))
            error=Signal::derive(move || list.with(|l| l.error.clone()))
        >
            <table class="table">
                <thead>
                    <tr>
                        <th>"Order"</th>
                        <th>"Customer"</th>
                        <th>"Items"</th>
                        <th>"Total"</th>
                        <th>"Status"</th>
                        <th>"Payment"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        list.get()
                            .items
                            .into_iter()
                            .map(|order| view! { <OrderRow order=order on_update=on_update/> })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </LoadStatus>
    }
}

#[component]
fn OrderRow(order: Order, on_update: Callback<(String, OrderStatusUpdate)>) -> impl IntoView {
    let status = RwSignal::new(order.status);
    let payment = RwSignal::new(order.payment_status);
    let original = (order.status, order.payment_status);
    let id = order.id.clone();
    let customer = order.customer.as_ref().map(|c| format!("{} <{}>", c.name, c.email)).unwrap_or_default();
    let mismatch = !order.totals_consistent();
    let item_summary = order
        .items
        .iter()
        .map(|i| format!("{} × {}", i.quantity, if i.name.is_empty() { &i.product_id } else { &i.name }))
        .collect::<Vec<_>>()
        .join(", ");

    let changed = move || (status.get(), payment.get()) != original;

    view! {
        <tr>
            <td>{order.id.clone()}</td>
            <td>{customer}</td>
            <td>{item_summary}</td>
            <td>
                {format_price(order.total)}
                <Show when=move || mismatch>
                    <span class="badge badge--warn" title="Total differs from items + shipping + tax">
                        "check total"
                    </span>
                </Show>
            </td>
            <td>
                <select on:change=move |ev| {
                    if let Some(s) = OrderStatus::parse(&event_target_value(&ev)) {
                        status.set(s);
                    }
                }>
                    {OrderStatus::ALL
                        .into_iter()
                        .map(|s| view! { <option value=s.as_str() selected=move || status.get() == s>{s.as_str()}</option> })
                        .collect_view()}
                </select>
            </td>
            <td>
                <select on:change=move |ev| {
                    if let Some(p) = PaymentStatus::parse(&event_target_value(&ev)) {
                        payment.set(p);
                    }
                }>
                    {PaymentStatus::ALL
                        .into_iter()
                        .map(|p| view! { <option value=p.as_str() selected=move || payment.get() == p>{p.as_str()}</option> })
                        .collect_view()}
                </select>
            </td>
            <td class="table__actions">
                <button
                    class="btn btn--primary"
                    disabled=move || !changed()
                    on:click=move |_| {
                        on_update
                            .run((id.clone(), OrderStatusUpdate { status: status.get_untracked(), payment_status: payment.get_untracked() }))
                    }
                >
                    "Update"
                </button>
            </td>
        </tr>
    }
}
