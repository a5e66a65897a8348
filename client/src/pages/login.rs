//! Storefront sign-in page.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use market::models::LoginRequest;

use crate::components::form_field::TextField;
use crate::net::api;
use crate::state::Stores;
use crate::state::auth::AuthState;
use crate::state::notice::NoticeLevel;
use crate::util::auth::{Area, report_error};
use crate::util::cart_actions;
use crate::util::notify::notify;
use crate::util::storage::BrowserStorage;

pub(crate) const INVALID_EMAIL: &str = "Enter a valid email address.";
pub(crate) const MISSING_PASSWORD: &str = "Enter your password.";

/// Trim the email and require an `@` in it plus a non-empty password.
///
/// # Errors
///
/// Returns the message to show next to the form.
pub fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(INVALID_EMAIL);
    }
    if password.is_empty() {
        return Err(MISSING_PASSWORD);
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let stores = Stores::expect();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<&'static str>);

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
                    let name = session.user.name.clone();
                    stores.auth.update(|a| a.login_succeeded(&BrowserStorage, session));
                    password.set(String::new());
                    notify(stores.notices, NoticeLevel::Success, format!("Welcome back, {name}."));
                    if let Err(err) = cart_actions::adopt_server_cart(stores).await {
                        report_error(&err, Area::Store, stores, &navigate);
                    }
                    navigate("/", NavigateOptions::default());
                }
                Err(err) => stores.auth.update(|a| a.login_failed(&BrowserStorage, &err)),
            }
        });
    };

    let error = move || form_error.get().map(ToOwned::to_owned).or_else(|| stores.auth.get().error);

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Sign in"</h1>
                <TextField label="Email" value=email kind="email" autocomplete="email"/>
                <TextField label="Password" value=password kind="password" autocomplete="current-password"/>
                <Show when=move || error().is_some()>
                    <p class="auth-card__error">{move || error().unwrap_or_default()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || stores.auth.get().busy>
                    {move || if stores.auth.get().busy { "Signing in..." } else { "Sign in" }}
                </button>
                <p class="auth-card__alt">
                    "New here? "
                    <A href="/register">"Create an account"</A>
                </p>
            </form>
        </div>
    }
}
