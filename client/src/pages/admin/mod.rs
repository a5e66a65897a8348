//! Admin panel screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every screen renders inside [`AdminLayout`], which installs the admin
//! guard and mounts the screen only once an admin session is confirmed, so
//! no admin request is issued for a visitor. Screens share the same cycle:
//! fetch list, open form or confirmation, submit, refetch.

pub mod consultants;
pub mod dashboard;
pub mod forms;
pub mod login;
pub mod orders;
pub mod products;
pub mod reviews;
pub mod settings;
pub mod taxonomy;
pub mod users;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use market::endpoints::AdminResource;
use market::models::Identified;

use crate::components::admin_nav::AdminNav;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::net::api;
use crate::state::Stores;
use crate::state::admin::ResourceList;
use crate::state::auth::AuthState;
use crate::state::notice::NoticeLevel;
use crate::util::auth::{Area, install_auth_guard, report_error};
use crate::util::notify::notify;

#[component]
pub fn AdminLayout(title: &'static str, children: ChildrenFn) -> impl IntoView {
    let stores = Stores::expect();
    install_auth_guard(stores.auth, Area::Admin, use_navigate());

    view! {
        <div class="admin">
            <AdminNav/>
            <section class="admin__content">
                <h1>{title}</h1>
                <Show
                    when=move || stores.auth.with(AuthState::is_admin)
                    fallback=|| view! { <p class="page__loading">"Checking access..."</p> }
                >
                    {children()}
                </Show>
            </section>
        </div>
    }
}

/// Changes only when a refetch was requested, unlike the list signal itself
/// which also changes when the fetch lands.
pub(crate) fn reload_trigger<T>(list: RwSignal<ResourceList<T>>) -> Memo<u32>
where
    T: Send + Sync + 'static,
{
    Memo::new(move |_| list.with(|l| l.reload))
}

/// Delete the row awaiting confirmation, then drop it and refetch.
pub(crate) fn delete_confirmed<T, N>(list: RwSignal<ResourceList<T>>, resource: AdminResource, stores: Stores, navigate: N)
where
    T: Identified + Send + Sync + 'static,
    N: Fn(&str, NavigateOptions) + 'static,
{
    let Some(id) = list.try_update(ResourceList::confirm_delete).flatten() else {
        return;
    };
    leptos::task::spawn_local(async move {
        match api::admin_delete(resource, &id).await {
            Ok(()) => {
                list.update(|l| {
                    l.removed(&id);
                    l.request_reload();
                });
                notify(stores.notices, NoticeLevel::Success, "Deleted.");
            }
            Err(err) => report_error(&err, Area::Admin, stores, &navigate),
        }
    });
}

/// Confirmation dialog bound to a list's pending delete.
#[component]
pub(crate) fn DeleteConfirm<T>(
    list: RwSignal<ResourceList<T>>,
    noun: &'static str,
    on_confirm: Callback<()>,
) -> impl IntoView
where
    T: Identified + Send + Sync + 'static,
{
    view! {
        <Show when=move || list.with(|l| l.pending_delete.is_some())>
            <ConfirmDialog
                title=format!("Delete {noun}")
                message=format!("This {noun} will be permanently deleted.")
                on_confirm=on_confirm
                on_cancel=Callback::new(move |()| list.update(ResourceList::cancel_delete))
            />
        </Show>
    }
}
