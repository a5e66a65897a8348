//! Consultant moderation: approve or reject applications, remove profiles.

#[cfg(test)]
#[path = "consultants_test.rs"]
mod consultants_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use market::endpoints::AdminResource;
use market::models::{ApprovalStatus, Consultant};

use crate::components::load_status::LoadStatus;
use crate::net::api;
use crate::pages::admin::{AdminLayout, DeleteConfirm, delete_confirmed, reload_trigger};
use crate::state::Stores;
use crate::state::admin::ResourceList;
use crate::state::notice::NoticeLevel;
use crate::util::auth::{Area, report_error};
use crate::util::loader::spawn_list_load;
use crate::util::notify::notify;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsultantTab {
    Pending,
    All,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    fn past_tense(self) -> &'static str {
        match self {
            Self::Approve => "approved",
            Self::Reject => "rejected",
        }
    }
}

/// Rows shown for a tab.
#[must_use]
pub fn visible(items: &[Consultant], tab: ConsultantTab) -> Vec<Consultant> {
    items
        .iter()
        .filter(|c| tab == ConsultantTab::All || c.status == ApprovalStatus::Pending)
        .cloned()
        .collect()
}

/// Land an approve/reject result: the pending tab drops the row at once,
/// the full list shows the new status.
pub fn apply_decision(list: &mut ResourceList<Consultant>, tab: ConsultantTab, updated: Consultant) {
    match tab {
        ConsultantTab::Pending => {
            list.removed(&updated.id);
        }
        ConsultantTab::All => list.upserted(updated),
    }
}

#[component]
pub fn AdminConsultantsPage() -> impl IntoView {
    view! {
        <AdminLayout title="Consultants">
            <ConsultantsTable/>
        </AdminLayout>
    }
}

#[component]
fn ConsultantsTable() -> impl IntoView {
    let stores = Stores::expect();
    let navigate = use_navigate();
    let list = RwSignal::new(ResourceList::<Consultant>::default());
    let tab = RwSignal::new(ConsultantTab::Pending);

    let reload = reload_trigger(list);
    let nav = navigate.clone();
    Effect::new(move || {
        reload.track();
        spawn_list_load(list, Area::Admin, stores, nav.clone(), api::admin_list::<Consultant>(AdminResource::Consultants));
    });

    let nav = navigate.clone();
    let decide = Callback::new(move |(id, decision): (String, Decision)| {
        let navigate = nav.clone();
        leptos::task::spawn_local(async move {
            let result = match decision {
                Decision::Approve => api::approve_consultant(&id).await,
                Decision::Reject => api::reject_consultant(&id).await,
            };
            match result {
                Ok(updated) => {
                    let name = updated.display_name().to_owned();
                    list.update(|l| {
                        apply_decision(l, tab.get_untracked(), updated);
                        l.request_reload();
                    });
                    notify(stores.notices, NoticeLevel::Success, format!("{name} {}.", decision.past_tense()));
                }
                Err(err) => report_error(&err, Area::Admin, stores, &navigate),
            }
        });
    });

    let on_delete =
        Callback::new(move |()| delete_confirmed(list, AdminResource::Consultants, stores, navigate.clone()));

    let tab_button = move |value: ConsultantTab, label: &'static str| {
        view! {
            <button class="tab" class:tab--active=move || tab.get() == value on:click=move |_| tab.set(value)>
                {label}
            </button>
        }
    };

    view! {
        <div class="tabs">
            {tab_button(ConsultantTab::Pending, "Pending")}
            {tab_button(ConsultantTab::All, "All")}
        </div>
        <LoadStatus
            loading=Signal::derive(move || list.with(|l| l.loading))
            error=Signal::derive(move || list.with(|l| l.error.clone()))
        >
            <table class="table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Services"</th>
                        <th>"Rating"</th>
                        <th>"Status"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        list.with(|l| visible(&l.items, tab.get()))
                            .into_iter()
                            .map(|consultant| {
                                let pending = consultant.status == ApprovalStatus::Pending;
                                let approve_id = consultant.id.clone();
                                let reject_id = consultant.id.clone();
                                let delete_id = consultant.id.clone();
                                let email = consultant.user.as_ref().map(|u| u.email.clone()).unwrap_or_default();
                                view! {
                                    <tr>
                                        <td>{consultant.display_name().to_owned()}</td>
                                        <td>{email}</td>
                                        <td>{consultant.services.len()}</td>
                                        <td>{format!("{:.1} ({})", consultant.rating, consultant.total_ratings)}</td>
                                        <td>{consultant.status.as_str()}</td>
                                        <td class="table__actions">
                                            <Show when=move || pending>
                                                <button
                                                    class="btn btn--primary"
                                                    on:click={
                                                        let id = approve_id.clone();
                                                        move |_| decide.run((id.clone(), Decision::Approve))
                                                    }
                                                >
                                                    "Approve"
                                                </button>
                                                <button
                                                    class="btn"
                                                    on:click={
                                                        let id = reject_id.clone();
                                                        move |_| decide.run((id.clone(), Decision::Reject))
                                                    }
                                                >
                                                    "Reject"
                                                </button>
                                            </Show>
                                            <button
                                                class="btn btn--danger"
                                                on:click=move |_| list.update(|l| l.request_delete(&delete_id))
                                            >
                                                "Delete"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </LoadStatus>
        <DeleteConfirm list=list noun="consultant" on_confirm=on_delete/>
    }
}
