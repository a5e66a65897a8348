//! Store settings form (shipping, tax, contact details).

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::TextField;
use crate::net::api;
use crate::pages::admin::AdminLayout;
use crate::pages::admin::forms::SettingsForm;
use crate::state::Stores;
use crate::state::notice::NoticeLevel;
use crate::util::auth::{Area, report_error};
use crate::util::notify::notify;

#[derive(Clone, Copy)]
struct SettingsFields {
    site_name: RwSignal<String>,
    contact_email: RwSignal<String>,
    shipping_fee: RwSignal<String>,
    tax_percent: RwSignal<String>,
    free_shipping_threshold: RwSignal<String>,
}

impl SettingsFields {
    fn new() -> Self {
        Self {
            site_name: RwSignal::new(String::new()),
            contact_email: RwSignal::new(String::new()),
            shipping_fee: RwSignal::new(String::new()),
            tax_percent: RwSignal::new(String::new()),
            free_shipping_threshold: RwSignal::new(String::new()),
        }
    }

    fn load(self, form: SettingsForm) {
        self.site_name.set(form.site_name);
        self.contact_email.set(form.contact_email);
        self.shipping_fee.set(form.shipping_fee);
        self.tax_percent.set(form.tax_percent);
        self.free_shipping_threshold.set(form.free_shipping_threshold);
    }

    fn snapshot(self) -> SettingsForm {
        SettingsForm {
            site_name: self.site_name.get_untracked(),
            contact_email: self.contact_email.get_untracked(),
            shipping_fee: self.shipping_fee.get_untracked(),
            tax_percent: self.tax_percent.get_untracked(),
            free_shipping_threshold: self.free_shipping_threshold.get_untracked(),
        }
    }
}

#[component]
pub fn AdminSettingsPage() -> impl IntoView {
    view! {
        <AdminLayout title="Settings">
            <SettingsEditor/>
        </AdminLayout>
    }
}

#[component]
fn SettingsEditor() -> impl IntoView {
    let stores = Stores::expect();
    let navigate = use_navigate();
    let fields = SettingsFields::new();
    let loading = RwSignal::new(true);
    let saving = RwSignal::new(false);
    let form_error = RwSignal::new(None::<&'static str>);

    let nav = navigate.clone();
    Effect::new(move || {
        let navigate = nav.clone();
        leptos::task::spawn_local(async move {
            match api::fetch_admin_settings().await {
                Ok(settings) => fields.load(SettingsForm::from(&settings)),
                Err(err) => report_error(&err, Area::Admin, stores, &navigate),
            }
            loading.set(false);
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let settings = match fields.snapshot().to_settings() {
            Ok(settings) => settings,
            Err(message) => {
                form_error.set(Some(message));
                return;
            }
        };
        form_error.set(None);
        saving.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::save_admin_settings(&settings).await {
                Ok(saved) => {
                    fields.load(SettingsForm::from(&saved));
                    notify(stores.notices, NoticeLevel::Success, "Settings saved.");
                }
                Err(err) => report_error(&err, Area::Admin, stores, &navigate),
            }
            saving.set(false);
        });
    };

    view! {
        <form class="admin-form" on:submit=on_submit>
            <TextField label="Site name" value=fields.site_name/>
            <TextField label="Contact email" value=fields.contact_email kind="email"/>
            <TextField label="Shipping fee" value=fields.shipping_fee kind="number"/>
            <TextField label="Tax rate (%)" value=fields.tax_percent kind="number"/>
            <TextField label="Free shipping from (blank = never)" value=fields.free_shipping_threshold kind="number"/>
            <Show when=move || form_error.get().is_some()>
                <p class="auth-card__error">{move || form_error.get().unwrap_or_default()}</p>
            </Show>
            <button class="btn btn--primary" type="submit" disabled=move || loading.get() || saving.get()>
                {move || if saving.get() { "Saving..." } else { "Save settings" }}
            </button>
        </form>
    }
}
