//! Cart page: quantities, checkout preview and order placement.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use market::cart::{Cart, CartLine, CheckoutSummary, format_price};
use market::models::Settings;

use crate::net::api;
use crate::state::Stores;
use crate::state::auth::AuthState;
use crate::state::notice::NoticeLevel;
use crate::util::auth::{Area, report_error};
use crate::util::cart_actions;
use crate::util::notify::notify;

#[component]
pub fn CartPage() -> impl IntoView {
    let stores = Stores::expect();
    let navigate = use_navigate();
    let settings = RwSignal::new(Settings::default());
    let placing = RwSignal::new(false);

    Effect::new(move || {
        leptos::task::spawn_local(async move {
            // Without settings the preview shows no shipping or tax.
            if let Ok(loaded) = api::fetch_settings().await {
                settings.set(loaded);
            }
        });
    });

    let summary = move || stores.cart.with(|c| settings.with(|s| CheckoutSummary::from_cart(&c.cart, s)));
    let signed_in = move || stores.auth.with(AuthState::is_authenticated);

    let nav = navigate.clone();
    let on_clear = Callback::new(move |()| cart_actions::clear(stores, nav.clone()));

    let on_place_order = Callback::new(move |()| {
        if placing.get_untracked() {
            return;
        }
        placing.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::place_order().await {
                Ok(order) => {
                    stores.cart.update(|c| c.replaced(Cart::default()));
                    notify(
                        stores.notices,
                        NoticeLevel::Success,
                        format!("Order placed. Total charged: {}.", format_price(order.total)),
                    );
                    navigate("/account", NavigateOptions::default());
                }
                Err(err) => report_error(&err, Area::Store, stores, &navigate),
            }
            placing.set(false);
        });
    });

    view! {
        <section class="cart">
            <h1>"Your cart"</h1>
            <Show
                when=move || stores.cart.with(|c| !c.cart.is_empty())
                fallback=|| {
                    view! {
                        <p class="page__empty">
                            "Your cart is empty. "
                            <A href="/products">"Browse products"</A>
                        </p>
                    }
                }
            >
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Item"</th>
                            <th>"Price"</th>
                            <th>"Quantity"</th>
                            <th>"Subtotal"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || stores.cart.get().cart.items
                            key=|line| (line.kind, line.item_id.clone(), line.quantity)
                            children=move |line| view! { <CartRow line=line/> }
                        />
                    </tbody>
                </table>
                {move || {
                    let s = summary();
                    view! {
                        <dl class="summary">
                            <dt>"Subtotal"</dt>
                            <dd>{format_price(s.subtotal)}</dd>
                            <dt>"Shipping"</dt>
                            <dd>{format_price(s.shipping)}</dd>
                            <dt>"Tax"</dt>
                            <dd>{format_price(s.tax)}</dd>
                            <dt>"Total"</dt>
                            <dd class="summary__total">{format_price(s.total)}</dd>
                        </dl>
                    }
                }}
                <div class="cart__actions">
                    <button class="btn" on:click=move |_| on_clear.run(())>
                        "Clear cart"
                    </button>
                    <Show
                        when=signed_in
                        fallback=|| {
                            view! {
                                <A href="/login" attr:class="btn btn--primary">
                                    "Sign in to check out"
                                </A>
                            }
                        }
                    >
                        <button
                            class="btn btn--primary"
                            disabled=move || placing.get() || stores.cart.get().loading
                            on:click=move |_| on_place_order.run(())
                        >
                            {move || if placing.get() { "Placing order..." } else { "Place order" }}
                        </button>
                    </Show>
                </div>
            </Show>
        </section>
    }
}

#[component]
fn CartRow(line: CartLine) -> impl IntoView {
    let stores = Stores::expect();
    let navigate = use_navigate();
    let kind = line.kind;
    let id = line.item_id.clone();
    let subtotal = format_price(line.subtotal());

    let nav = navigate.clone();
    let remove_id = id.clone();
    let on_remove = move |_: leptos::ev::MouseEvent| {
        cart_actions::remove_line(stores, kind, remove_id.clone(), nav.clone());
    };
    let on_quantity = move |ev: leptos::ev::Event| {
        let Ok(quantity) = event_target_value(&ev).trim().parse::<u32>() else {
            return;
        };
        cart_actions::set_quantity(stores, kind, id.clone(), quantity, navigate.clone());
    };

    view! {
        <tr>
            <td>{line.name}</td>
            <td>{format_price(line.unit_price)}</td>
            <td>
                <input type="number" min="0" value=line.quantity.to_string() on:change=on_quantity/>
            </td>
            <td>{subtotal}</td>
            <td>
                <button class="btn btn--danger" on:click=on_remove>
                    "Remove"
                </button>
            </td>
        </tr>
    }
}
