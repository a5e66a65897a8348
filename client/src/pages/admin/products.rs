//! Admin product catalog management.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use market::cart::format_price;
use market::endpoints::AdminResource;
use market::models::{Product, Taxonomy, TaxonomyKind};

use crate::components::form_field::{TextAreaField, TextField};
use crate::components::load_status::LoadStatus;
use crate::net::api;
use crate::pages::admin::forms::ProductForm;
use crate::pages::admin::{AdminLayout, DeleteConfirm, delete_confirmed, reload_trigger};
use crate::state::Stores;
use crate::state::admin::{EditorMode, ResourceList};
use crate::state::notice::NoticeLevel;
use crate::util::auth::{Area, report_error};
use crate::util::loader::spawn_list_load;
use crate::util::notify::notify;

#[derive(Clone, Copy)]
struct ProductFields {
    name: RwSignal<String>,
    description: RwSignal<String>,
    price: RwSignal<String>,
    stock: RwSignal<String>,
    category: RwSignal<String>,
    images: RwSignal<String>,
    features: RwSignal<String>,
    specifications: RwSignal<String>,
}

impl ProductFields {
    fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            price: RwSignal::new(String::new()),
            stock: RwSignal::new(String::new()),
            category: RwSignal::new(String::new()),
            images: RwSignal::new(String::new()),
            features: RwSignal::new(String::new()),
            specifications: RwSignal::new(String::new()),
        }
    }

    fn load(self, form: ProductForm) {
        self.name.set(form.name);
        self.description.set(form.description);
        self.price.set(form.price);
        self.stock.set(form.stock);
        self.category.set(form.category);
        self.images.set(form.images);
        self.features.set(form.features);
        self.specifications.set(form.specifications);
    }

    fn snapshot(self) -> ProductForm {
        ProductForm {
            name: self.name.get_untracked(),
            description: self.description.get_untracked(),
            price: self.price.get_untracked(),
            stock: self.stock.get_untracked(),
            category: self.category.get_untracked(),
            images: self.images.get_untracked(),
            features: self.features.get_untracked(),
            specifications: self.specifications.get_untracked(),
        }
    }
}

#[component]
pub fn AdminProductsPage() -> impl IntoView {
    view! {
        <AdminLayout title="Products">
            <ProductsTable/>
        </AdminLayout>
    }
}

#[component]
fn ProductsTable() -> impl IntoView {
    let stores = Stores::expect();
    let navigate = use_navigate();
    let list = RwSignal::new(ResourceList::<Product>::default());
    let categories = RwSignal::new(Vec::<Taxonomy>::new());
    let editor = RwSignal::new(EditorMode::Closed);
    let fields = ProductFields::new();
    let form_error = RwSignal::new(None::<&'static str>);
    let saving = RwSignal::new(false);

    Effect::new(move || {
        leptos::task::spawn_local(async move {
            if let Ok(items) = api::fetch_taxonomy(TaxonomyKind::Category).await {
                categories.set(items);
            }
        });
    });

    let reload = reload_trigger(list);
    let nav = navigate.clone();
    Effect::new(move || {
        reload.track();
        spawn_list_load(list, Area::Admin, stores, nav.clone(), api::admin_list::<Product>(AdminResource::Products));
    });

    let open_create = move |_: leptos::ev::MouseEvent| {
        fields.load(ProductForm::default());
        form_error.set(None);
        editor.set(EditorMode::Create);
    };
    let open_edit = Callback::new(move |id: String| {
        let Some(form) = list.with_untracked(|l| l.find(&id).map(ProductForm::from)) else {
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
        let draft = match fields.snapshot().to_draft() {
            Ok(draft) => draft,
            Err(message) => {
                form_error.set(Some(message));
                return;
            }
        };
        saving.set(true);
        let mode = editor.get_untracked();
        let navigate = nav.clone();
        leptos::task::spawn_local(async move {
            let result = match &mode {
                EditorMode::Edit(id) => api::admin_update::<Product, _>(AdminResource::Products, id, &draft).await,
                _ => api::admin_create::<Product, _>(AdminResource::Products, &draft).await,
            };
            match result {
                Ok(product) => {
                    list.update(|l| {
                        l.upserted(product);
                        l.request_reload();
                    });
                    editor.set(EditorMode::Closed);
                    notify(stores.notices, NoticeLevel::Success, "Product saved.");
                }
                Err(err) => report_error(&err, Area::Admin, stores, &navigate),
            }
            saving.set(false);
        });
    });

    let on_delete = Callback::new(move |()| delete_confirmed(list, AdminResource::Products, stores, navigate.clone()));

    view! {
        <div class="admin__toolbar">
            <button class="btn btn--primary" on:click=open_create>
                "New product"
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
                <h2>{move || editor.with(|e| e.title("product"))}</h2>
                <TextField label="Name" value=fields.name/>
                <TextAreaField label="Description" value=fields.description/>
                <TextField label="Price" value=fields.price kind="number"/>
                <TextField label="Stock" value=fields.stock kind="number"/>
                <label class="field">
                    "Category"
                    <select on:change=move |ev| fields.category.set(event_target_value(&ev))>
                        <option value="">"None"</option>
                        <For
                            each=move || categories.get()
                            key=|c| c.id.clone()
                            children=move |c| {
                                let id = c.id.clone();
                                view! {
                                    <option value=c.id selected=move || fields.category.get() == id>
                                        {c.name}
                                    </option>
                                }
                            }
                        />
                    </select>
                </label>
                <TextAreaField label="Images" value=fields.images hint="One URL per line"/>
                <TextAreaField label="Features" value=fields.features hint="One feature per line"/>
                <TextAreaField label="Specifications" value=fields.specifications hint="key: value, one per line"/>
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
                        <th>"Category"</th>
                        <th>"Price"</th>
                        <th>"Stock"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        list.get()
                            .items
                            .into_iter()
                            .map(|product| {
                                let edit_id = product.id.clone();
                                let delete_id = product.id.clone();
                                view! {
                                    <tr>
                                        <td>{product.name.clone()}</td>
                                        <td>{product.category.as_ref().map(ToString::to_string).unwrap_or_default()}</td>
                                        <td>{format_price(product.price)}</td>
                                        <td>{product.stock}</td>
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
        <DeleteConfirm list=list noun="product" on_confirm=on_delete/>
    }
}
