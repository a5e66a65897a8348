//! Review moderation: list every review and delete abusive ones.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use market::endpoints::AdminResource;
use market::models::{Review, ReviewTargetKind};

use crate::components::load_status::LoadStatus;
use crate::net::api;
use crate::pages::admin::{AdminLayout, DeleteConfirm, delete_confirmed, reload_trigger};
use crate::pages::consultants::rating_stars;
use crate::state::Stores;
use crate::state::admin::ResourceList;
use crate::util::auth::Area;
use crate::util::loader::spawn_list_load;

#[component]
pub fn AdminReviewsPage() -> impl IntoView {
    view! {
        <AdminLayout title="Reviews">
            <ReviewsTable/>
        </AdminLayout>
    }
}

#[component]
fn ReviewsTable() -> impl IntoView {
    let stores = Stores::expect();
    let navigate = use_navigate();
    let list = RwSignal::new(ResourceList::<Review>::default());

    let reload = reload_trigger(list);
    let nav = navigate.clone();
    Effect::new(move || {
        reload.track();
        spawn_list_load(list, Area::Admin, stores, nav.clone(), api::admin_list::<Review>(AdminResource::Reviews));
    });

    let on_delete = Callback::new(move |()| delete_confirmed(list, AdminResource::Reviews, stores, navigate.clone()));

    view! {
        <LoadStatus
            loading=Signal::derive(move || list.with(|l| l.loading))
            error=Signal::derive(move || list.with(|l| l.error.clone()))
        >
            <table class="table">
                <thead>
                    <tr>
                        <th>"Author"</th>
                        <th>"Target"</th>
                        <th>"Rating"</th>
                        <th>"Comment"</th>
                        <th>"Posted"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || list.get().items
                        key=|r| r.id.clone()
                        children=move |review| {
                            let delete_id = review.id.clone();
                            let target = match review.target_type {
                                ReviewTargetKind::Consultant => format!("consultant {}", review.target_id),
                                ReviewTargetKind::Product => format!("product {}", review.target_id),
                            };
                            view! {
                                <tr>
                                    <td>{review.author().to_owned()}</td>
                                    <td>{target}</td>
                                    <td>{rating_stars(f64::from(review.rating))}</td>
                                    <td>{review.comment.clone()}</td>
                                    <td>{review.created_at.clone().unwrap_or_default()}</td>
                                    <td class="table__actions">
                                        <button
                                            class="btn btn--danger"
                                            on:click=move |_| list.update(|l| l.request_delete(&delete_id))
                                        >
                                            "Delete"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </LoadStatus>
        <DeleteConfirm list=list noun="review" on_confirm=on_delete/>
    }
}
