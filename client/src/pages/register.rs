//! Customer registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use market::models::RegisterRequest;

use crate::components::form_field::TextField;
use crate::net::api;
use crate::pages::login::INVALID_EMAIL;
use crate::state::Stores;
use crate::state::auth::AuthState;
use crate::state::notice::NoticeLevel;
use crate::util::auth::{Area, report_error};
use crate::util::cart_actions;
use crate::util::notify::notify;
use crate::util::storage::BrowserStorage;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Raw form values as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm: String,
}

/// Validate the form and build the request body. A blank phone is omitted.
///
/// # Errors
///
/// Returns the first problem found, in field order.
pub fn validate_register_input(form: &RegisterForm) -> Result<RegisterRequest, &'static str> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err("Enter your name.");
    }
    let email = form.email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(INVALID_EMAIL);
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    if form.password != form.confirm {
        return Err("Passwords do not match.");
    }
    let phone = form.phone.trim();
    Ok(RegisterRequest {
        name: name.to_owned(),
        email: email.to_owned(),
        phone: (!phone.is_empty()).then(|| phone.to_owned()),
        password: form.password.clone(),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let stores = Stores::expect();
    let navigate = use_navigate();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<&'static str>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if stores.auth.get_untracked().busy {
            return;
        }
        let form = RegisterForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            password: password.get_untracked(),
            confirm: confirm.get_untracked(),
        };
        let details = match validate_register_input(&form) {
            Ok(details) => details,
            Err(message) => {
                form_error.set(Some(message));
                return;
            }
        };
        form_error.set(None);
        stores.auth.update(AuthState::begin_request);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::register(&details).await {
                Ok(session) => {
                    stores.auth.update(|a| a.login_succeeded(&BrowserStorage, session));
                    password.set(String::new());
                    confirm.set(String::new());
                    notify(stores.notices, NoticeLevel::Success, "Your account is ready.");
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
                <h1>"Create an account"</h1>
                <TextField label="Name" value=name autocomplete="name"/>
                <TextField label="Email" value=email kind="email" autocomplete="email"/>
                <TextField label="Phone (optional)" value=phone kind="tel" autocomplete="tel"/>
                <TextField label="Password" value=password kind="password" autocomplete="new-password"/>
                <TextField label="Confirm password" value=confirm kind="password" autocomplete="new-password"/>
                <Show when=move || error().is_some()>
                    <p class="auth-card__error">{move || error().unwrap_or_default()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || stores.auth.get().busy>
                    {move || if stores.auth.get().busy { "Creating account..." } else { "Register" }}
                </button>
                <p class="auth-card__alt">
                    "Already registered? "
                    <A href="/login">"Sign in"</A>
                </p>
            </form>
        </div>
    }
}
