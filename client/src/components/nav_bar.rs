//! Site header: primary links, cart badge and session controls.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::state::Stores;
use crate::state::auth::AuthState;
use crate::state::cart::CartState;
use crate::state::notice::NoticeLevel;
use crate::util::notify::notify;
use crate::util::storage::BrowserStorage;

#[component]
pub fn NavBar() -> impl IntoView {
    let stores = Stores::expect();
    let navigate = use_navigate();

    let cart_count = move || stores.cart.with(CartState::item_count);
    let user_name = move || stores.auth.with(|a| a.user.as_ref().map(|u| u.name.clone()));
    let is_admin = move || stores.auth.with(AuthState::is_admin);

    // The logout call needs the token, so local state is cleared after it.
    let on_logout = move |_: leptos::ev::MouseEvent| {
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            api::logout().await;
            stores.auth.update(|a| a.logout(&BrowserStorage));
            stores.cart.update(CartState::signed_out);
            notify(stores.notices, NoticeLevel::Info, "You have been signed out.");
            navigate("/", NavigateOptions::default());
        });
    };

    view! {
        <header class="nav">
            <A href="/" attr:class="nav__brand">"Wellspring"</A>
            <nav class="nav__links">
                <A href="/products">"Products"</A>
                <A href="/consultants">"Consultants"</A>
                <Show when=is_admin>
                    <A href="/admin">"Admin"</A>
                </Show>
            </nav>
            <div class="nav__session">
                <A href="/cart" attr:class="nav__cart">
                    "Cart "
                    <span class="nav__badge">{cart_count}</span>
                </A>
                {move || match user_name() {
                    Some(name) => {
                        let on_logout = on_logout.clone();
                        view! {
                            <A href="/account">{name}</A>
                            <button class="btn" on:click=on_logout>
                                "Sign out"
                            </button>
                        }
                            .into_any()
                    }
                    None => {
                        view! {
                            <A href="/login">"Sign in"</A>
                            <A href="/register" attr:class="btn btn--primary">"Register"</A>
                        }
                            .into_any()
                    }
                }}
            </div>
        </header>
    }
}
