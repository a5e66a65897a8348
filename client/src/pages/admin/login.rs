//! Admin sign-in. Valid credentials for a non-admin account are refused.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::TextField;
use crate::net::api;
use crate::pages::login::validate_login_input;
use crate::state::Stores;
use crate::state::auth::AuthState;
use crate::state::notice::NoticeLevel;
use crate::util::cart_actions;
use crate::util::notify::notify;
use crate::util::storage::BrowserStorage;

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    let stores = Stores::expect();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<&'static str>);

    // Already signed in as an admin: skip the form.
    let nav = navigate.clone();
    Effect::new(move || {
        if stores.auth.with(AuthState::is_admin) {
            nav("/admin", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if stores.auth.get_untracked().busy {
            return;
        }
        let credentials = match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(message) => {
                form_error.set(Some(message));
                return;
            }
        };
        form_error.set(None);
        stores.auth.update(AuthState::begin_request);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::login(&credentials).await {
                Ok(session) => {
                    let accepted = stores.auth.try_update(|a| a.admin_login_succeeded(&BrowserStorage, session));
                    if accepted == Some(true) {
                        password.set(String::new());
                        notify(stores.notices, NoticeLevel::Success, "Signed in to the admin panel.");
                        if let Err(err) = cart_actions::adopt_server_cart(stores).await {
                            stores.cart.update(|c| c.failed(&err));
                        }
                        navigate("/admin", NavigateOptions::default());
                    }
                }
                Err(err) => stores.auth.update(|a| a.login_failed(&BrowserStorage, &err)),
            }
        });
    };

    let error = move || form_error.get().map(ToOwned::to_owned).or_else(|| stores.auth.get().error);

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Admin sign in"</h1>
                <TextField label="Email" value=email kind="email" autocomplete="email"/>
                <TextField label="Password" value=password kind="password" autocomplete="current-password"/>
                <Show when=move || error().is_some()>
                    <p class="auth-card__error">{move || error().unwrap_or_default()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || stores.auth.get().busy>
                    {move || if stores.auth.get().busy { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}
