//! Admin user management; the customers screen is the same table limited to
//! the customer role.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use market::endpoints::AdminResource;
use market::models::{Role, User};

use crate::components::form_field::{CheckField, TextField};
use crate::components::load_status::LoadStatus;
use crate::net::api;
use crate::pages::admin::forms::UserForm;
use crate::pages::admin::{AdminLayout, DeleteConfirm, delete_confirmed, reload_trigger};
use crate::state::Stores;
use crate::state::admin::{EditorMode, ResourceList};
use crate::state::notice::NoticeLevel;
use crate::util::auth::{Area, report_error};
use crate::util::loader::spawn_list_load;
use crate::util::notify::notify;

/// Keep only customer accounts, whatever the backend returned.
#[must_use]
pub fn only_customers(users: Vec<User>) -> Vec<User> {
    users.into_iter().filter(|u| u.role == Role::Customer && !u.is_admin).collect()
}

#[derive(Clone, Copy)]
struct UserFields {
    name: RwSignal<String>,
    email: RwSignal<String>,
    phone: RwSignal<String>,
    role: RwSignal<String>,
    is_admin: RwSignal<bool>,
    password: RwSignal<String>,
}

impl UserFields {
    fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            phone: RwSignal::new(String::new()),
            role: RwSignal::new(Role::Customer.as_str().to_owned()),
            is_admin: RwSignal::new(false),
            password: RwSignal::new(String::new()),
        }
    }

    fn load(self, form: UserForm) {
        self.name.set(form.name);
        self.email.set(form.email);
        self.phone.set(form.phone);
        self.role.set(form.role);
        self.is_admin.set(form.is_admin);
        self.password.set(form.password);
    }

    fn snapshot(self) -> UserForm {
        UserForm {
            name: self.name.get_untracked(),
            email: self.email.get_untracked(),
            phone: self.phone.get_untracked(),
            role: self.role.get_untracked(),
            is_admin: self.is_admin.get_untracked(),
            password: self.password.get_untracked(),
        }
    }
}

#[component]
pub fn AdminUsersPage(customers_only: bool) -> impl IntoView {
    let title = if customers_only { "Customers" } else { "Users" };
    view! {
        <AdminLayout title=title>
            <UsersTable customers_only=customers_only/>
        </AdminLayout>
    }
}

#[component]
fn UsersTable(customers_only: bool) -> impl IntoView {
    let stores = Stores::expect();
    let navigate = use_navigate();
    let list = RwSignal::new(ResourceList::<User>::default());
    let editor = RwSignal::new(EditorMode::Closed);
    let fields = UserFields::new();
    let form_error = RwSignal::new(None::<&'static str>);
    let saving = RwSignal::new(false);

    let reload = reload_trigger(list);
    let nav = navigate.clone();
    Effect::new(move || {
        reload.track();
        if customers_only {
            spawn_list_load(list, Area::Admin, stores, nav.clone(), async {
                api::admin_list::<User>(AdminResource::Customers).await.map(only_customers)
            });
        } else {
            spawn_list_load(list, Area::Admin, stores, nav.clone(), api::admin_list::<User>(AdminResource::Users));
        }
    });

    let open_create = move |_: leptos::ev::MouseEvent| {
        fields.load(UserForm::default());
        form_error.set(None);
        editor.set(EditorMode::Create);
    };
    let open_edit = Callback::new(move |id: String| {
        let Some(form) = list.with_untracked(|l| l.find(&id).map(UserForm::from)) else {
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
        let mode = editor.get_untracked();
        let draft = match fields.snapshot().to_draft(mode == EditorMode::Create) {
            Ok(draft) => draft,
            Err(message) => {
                form_error.set(Some(message));
                return;
            }
        };
        saving.set(true);
        let navigate = nav.clone();
        leptos::task::spawn_local(async move {
            let result = match &mode {
                EditorMode::Edit(id) => api::admin_update::<User, _>(AdminResource::Users, id, &draft).await,
                _ => api::admin_create::<User, _>(AdminResource::Users, &draft).await,
            };
            match result {
                Ok(user) => {
                    list.update(|l| {
                        l.upserted(user);
                        l.request_reload();
                    });
                    editor.set(EditorMode::Closed);
                    notify(stores.notices, NoticeLevel::Success, "User saved.");
                }
                Err(err) => report_error(&err, Area::Admin, stores, &navigate),
            }
            saving.set(false);
        });
    });

    let on_delete = Callback::new(move |()| delete_confirmed(list, AdminResource::Users, stores, navigate.clone()));

    view! {
        <div class="admin__toolbar">
            <button class="btn btn--primary" on:click=open_create>
                "New user"
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
                <h2>{move || editor.with(|e| e.title("user"))}</h2>
                <TextField label="Name" value=fields.name/>
                <TextField label="Email" value=fields.email kind="email"/>
                <TextField label="Phone" value=fields.phone kind="tel"/>
                <label class="field">
                    "Role"
                    <select on:change=move |ev| fields.role.set(event_target_value(&ev))>
                        {Role::ALL
                            .into_iter()
                            .map(|role| {
                                view! {
                                    <option value=role.as_str() selected=move || fields.role.get() == role.as_str()>
                                        {role.as_str()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>
                <CheckField label="Admin access" value=fields.is_admin/>
                <TextField label="Password" value=fields.password kind="password" autocomplete="new-password"/>
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
                        <th>"Email"</th>
                        <th>"Role"</th>
                        <th>"Admin"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || list.get().items
                        key=|u| (u.id.clone(), u.name.clone(), u.email.clone(), u.role, u.is_admin)
                        children=move |user| {
                            let edit_id = user.id.clone();
                            let delete_id = user.id.clone();
                            view! {
                                <tr>
                                    <td>{user.name.clone()}</td>
                                    <td>{user.email.clone()}</td>
                                    <td>{user.role.as_str()}</td>
                                    <td>{if user.has_admin_access() { "yes" } else { "no" }}</td>
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
                        }
                    />
                </tbody>
            </table>
        </LoadStatus>
        <DeleteConfirm list=list noun="user" on_confirm=on_delete/>
    }
}
