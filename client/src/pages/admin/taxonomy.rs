//! One admin screen per tag vocabulary: categories, ailments and
//! specializations share the record shape and the page.

#[cfg(test)]
#[path = "taxonomy_test.rs"]
mod taxonomy_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use market::endpoints::AdminResource;
use market::models::{RecordStatus, Taxonomy, TaxonomyKind};

use crate::components::form_field::{CheckField, TextAreaField, TextField};
use crate::components::load_status::LoadStatus;
use crate::net::api;
use crate::pages::admin::forms::TaxonomyForm;
use crate::pages::admin::{AdminLayout, DeleteConfirm, delete_confirmed, reload_trigger};
use crate::state::Stores;
use crate::state::admin::{EditorMode, ResourceList};
use crate::state::notice::NoticeLevel;
use crate::util::auth::{Area, report_error};
use crate::util::loader::spawn_list_load;
use crate::util::notify::notify;

/// Label for the parent link, or `None` when the kind has no parent.
#[must_use]
pub fn parent_label(kind: TaxonomyKind) -> Option<&'static str> {
    match kind {
        TaxonomyKind::Category => Some("Parent category"),
        TaxonomyKind::Ailment => Some("Category"),
        TaxonomyKind::Specialization => None,
    }
}

/// Parent choices, excluding the record being edited.
#[must_use]
pub fn parent_options(categories: &[Taxonomy], editing: Option<&str>) -> Vec<(String, String)> {
    categories
        .iter()
        .filter(|c| Some(c.id.as_str()) != editing)
        .map(|c| (c.id.clone(), c.name.clone()))
        .collect()
}

#[derive(Clone, Copy)]
struct TaxonomyFields {
    name: RwSignal<String>,
    slug: RwSignal<String>,
    description: RwSignal<String>,
    parent: RwSignal<String>,
    active: RwSignal<bool>,
}

impl TaxonomyFields {
    fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            slug: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            parent: RwSignal::new(String::new()),
            active: RwSignal::new(true),
        }
    }

    fn load(self, form: TaxonomyForm) {
        self.name.set(form.name);
        self.slug.set(form.slug);
        self.description.set(form.description);
        self.parent.set(form.parent);
        self.active.set(form.active);
    }

    fn snapshot(self) -> TaxonomyForm {
        TaxonomyForm {
            name: self.name.get_untracked(),
            slug: self.slug.get_untracked(),
            description: self.description.get_untracked(),
            parent: self.parent.get_untracked(),
            active: self.active.get_untracked(),
        }
    }
}

#[component]
pub fn AdminTaxonomyPage(kind: TaxonomyKind) -> impl IntoView {
    view! {
        <AdminLayout title=kind.plural()>
            <TaxonomyTable kind=kind/>
        </AdminLayout>
    }
}

#[component]
fn TaxonomyTable(kind: TaxonomyKind) -> impl IntoView {
    let stores = Stores::expect();
    let navigate = use_navigate();
    let resource = AdminResource::taxonomy(kind);
    let noun = kind.label();
    let list = RwSignal::new(ResourceList::<Taxonomy>::default());
    let categories = RwSignal::new(Vec::<Taxonomy>::new());
    let editor = RwSignal::new(EditorMode::Closed);
    let fields = TaxonomyFields::new();
    let form_error = RwSignal::new(None::<&'static str>);
    let saving = RwSignal::new(false);

    if parent_label(kind).is_some() {
        Effect::new(move || {
            leptos::task::spawn_local(async move {
                if let Ok(items) = api::fetch_taxonomy(TaxonomyKind::Category).await {
                    categories.set(items);
                }
            });
        });
    }

    let reload = reload_trigger(list);
    let nav = navigate.clone();
    Effect::new(move || {
        reload.track();
        spawn_list_load(list, Area::Admin, stores, nav.clone(), api::admin_list::<Taxonomy>(resource));
    });

    let open_create = move |_: leptos::ev::MouseEvent| {
        fields.load(TaxonomyForm::default());
        form_error.set(None);
        editor.set(EditorMode::Create);
    };
    let open_edit = Callback::new(move |id: String| {
        let Some(form) = list.with_untracked(|l| l.find(&id).map(TaxonomyForm::from)) else {
            return;
        };
        fields.load(form);
        form_error.set(None);
        editor.set(EditorMode::Edit(id));
    });

    let nav = navigate.clone();
    let on_save = Callback::new(move |()| {
        if saving.get_untracked() {
            return;
        }
        let mut draft = match fields.snapshot().to_draft() {
            Ok(draft) => draft,
            Err(message) => {
                form_error.set(Some(message));
                return;
            }
        };
        if parent_label(kind).is_none() {
            draft.parent = None;
        }
        saving.set(true);
        let mode = editor.get_untracked();
        let navigate = nav.clone();
        leptos::task::spawn_local(async move {
            let result = match &mode {
                EditorMode::Edit(id) => api::admin_update::<Taxonomy, _>(resource, id, &draft).await,
                _ => api::admin_create::<Taxonomy, _>(resource, &draft).await,
            };
            match result {
                Ok(record) => {
                    list.update(|l| {
                        l.upserted(record);
                        l.request_reload();
                    });
                    editor.set(EditorMode::Closed);
                    notify(stores.notices, NoticeLevel::Success, format!("{noun} saved."));
                }
                Err(err) => report_error(&err, Area::Admin, stores, &navigate),
            }
            saving.set(false);
        });
    });

    let on_delete = Callback::new(move |()| delete_confirmed(list, resource, stores, navigate.clone()));

    let parent_field = move || {
        parent_label(kind).map(|label| {
            let editing = editor.with(|e| match e {
                EditorMode::Edit(id) => Some(id.clone()),
                _ => None,
            });
            let options = categories.with(|c| parent_options(c, editing.as_deref()));
            view! {
                <label class="field">
                    {label}
                    <select on:change=move |ev| fields.parent.set(event_target_value(&ev))>
                        <option value="">"None"</option>
                        {options
                            .into_iter()
                            .map(|(id, name)| {
                                let selected_id = id.clone();
                                view! {
                                    <option value=id selected=move || fields.parent.get() == selected_id>
                                        {name}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>
            }
        })
    };

    view! {
        <div class="admin__toolbar">
            <button class="btn btn--primary" on:click=open_create>
                {format!("New {}", noun.to_lowercase())}
            </button>
        </div>
        <Show when=move || editor.with(EditorMode::is_open)>
            <form
                class="admin-form"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    on_save.run(());
                }
            >
                <h2>{move || editor.with(|e| e.title(&noun.to_lowercase()))}</h2>
                <TextField label="Name" value=fields.name/>
                <TextField label="Slug" value=fields.slug/>
                <TextAreaField label="Description" value=fields.description/>
                {parent_field}
                <CheckField label="Active" value=fields.active/>
                <Show when=move || form_error.get().is_some()>
                    <p class="auth-card__error">{move || form_error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" type="button" on:click=move |_| editor.set(EditorMode::Closed)>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                        "Save"
                    </button>
                </div>
            </form>
        </Show>
        <LoadStatus
            loading=Signal::derive(move || list.with(|l| l.loading))
            error=Signal::derive(move || list.with(|l| l.error.clone()))
        >
            <table class="table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Slug"</th>
                        <th>{parent_label(kind).unwrap_or("")}</th>
                        <th>"Status"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        list.get()
                            .items
                            .into_iter()
                            .map(|record| {
                                let edit_id = record.id.clone();
                                let delete_id = record.id.clone();
                                let inactive = record.status == RecordStatus::Inactive;
                                view! {
                                    <tr class:table__row--muted=inactive>
                                        <td>{record.name.clone()}</td>
                                        <td>{record.slug.clone()}</td>
                                        <td>{record.parent.as_ref().map(ToString::to_string).unwrap_or_default()}</td>
                                        <td>{record.status.as_str()}</td>
                                        <td class="table__actions">
                                            <button class="btn" on:click=move |_| open_edit.run(edit_id.clone())>
                                                "Edit"
                                            </button>
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
        <DeleteConfirm list=list noun=noun on_confirm=on_delete/>
    }
}
