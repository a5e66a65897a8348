//! Product catalog: filterable list and detail page.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use market::cart::{CartLine, LineKind, format_price};
use market::endpoints::ProductQuery;
use market::models::{Product, Taxonomy, TaxonomyKind};

use crate::components::load_status::LoadStatus;
use crate::components::product_card::ProductCard;
use crate::net::api;
use crate::state::Stores;
use crate::state::admin::ResourceList;
use crate::util::auth::Area;
use crate::util::cart_actions;
use crate::util::loader::{spawn_list_load, spawn_load};

/// Cart line for `quantity` units of a product at its current price.
#[must_use]
pub fn product_line_with_quantity(product: &Product, quantity: u32) -> CartLine {
    CartLine {
        item_id: product.id.clone(),
        kind: LineKind::Product,
        name: product.name.clone(),
        unit_price: product.price,
        quantity,
    }
}

#[must_use]
pub fn product_line(product: &Product) -> CartLine {
    product_line_with_quantity(product, 1)
}

/// Quantity picker bounds for a product: at least 1, at most what is in stock.
#[must_use]
pub fn clamp_quantity(raw: &str, stock: u32) -> u32 {
    raw.trim().parse::<u32>().unwrap_or(1).clamp(1, stock.max(1))
}

/// Build a product query from the filter inputs; blanks mean "any".
#[must_use]
pub fn product_query(category: &str, search: &str) -> ProductQuery {
    let non_blank = |v: &str| Some(v.trim().to_owned()).filter(|v| !v.is_empty());
    ProductQuery { category: non_blank(category), search: non_blank(search) }
}

#[component]
pub fn ProductsPage() -> impl IntoView {
    let stores = Stores::expect();
    let navigate = use_navigate();
    let products = RwSignal::new(ResourceList::<Product>::default());
    let categories = RwSignal::new(Vec::<Taxonomy>::new());
    let search = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let applied = RwSignal::new(ProductQuery::default());

    Effect::new(move || {
        leptos::task::spawn_local(async move {
            // Filter options are optional; the list still works without them.
            if let Ok(items) = api::fetch_taxonomy(TaxonomyKind::Category).await {
                categories.set(items);
            }
        });
    });

    let nav = navigate.clone();
    Effect::new(move || {
        let query = applied.get();
        spawn_list_load(products, Area::Store, stores, nav.clone(), async move {
            api::fetch_products(&query).await
        });
    });

    let on_filter = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        applied.set(product_query(&category.get_untracked(), &search.get_untracked()));
    };

    let on_add = Callback::new(move |product: Product| {
        cart_actions::add_line(stores, product_line(&product), navigate.clone());
    });

    view! {
        <section class="catalog">
            <h1>"Products"</h1>
            <form class="filters" on:submit=on_filter>
                <input
                    type="search"
                    placeholder="Search products"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <select on:change=move |ev| category.set(event_target_value(&ev))>
                    <option value="">"All categories"</option>
                    <For
                        each=move || categories.get()
                        key=|c| c.id.clone()
                        children=|c| view! { <option value=c.id.clone()>{c.name}</option> }
                    />
                </select>
                <button class="btn" type="submit">
                    "Filter"
                </button>
            </form>
            <LoadStatus
                loading=Signal::derive(move || products.with(|l| l.loading))
                error=Signal::derive(move || products.with(|l| l.error.clone()))
            >
                <Show
                    when=move || products.with(|l| !l.items.is_empty())
                    fallback=|| view! { <p class="page__empty">"No products match."</p> }
                >
                    <div class="grid">
                        <For
                            each=move || products.get().items
                            key=|p| p.id.clone()
                            children=move |product| view! { <ProductCard product=product on_add=on_add/> }
                        />
                    </div>
                </Show>
            </LoadStatus>
        </section>
    }
}

#[component]
pub fn ProductDetailPage() -> impl IntoView {
    let stores = Stores::expect();
    let navigate = use_navigate();
    let params = use_params_map();
    let product = RwSignal::new(None::<Product>);
    let error = RwSignal::new(None::<String>);
    let quantity = RwSignal::new(1_u32);

    let nav = navigate.clone();
    Effect::new(move || {
        let Some(id) = params.read().get("id") else {
            return;
        };
        product.set(None);
        spawn_load(product, error, Area::Store, stores, nav.clone(), async move { api::fetch_product(&id).await });
    });

    let on_add = Callback::new(move |()| {
        let Some(p) = product.get_untracked() else {
            return;
        };
        cart_actions::add_line(stores, product_line_with_quantity(&p, quantity.get_untracked()), navigate.clone());
    });

    view! {
        <section class="detail">
            <LoadStatus
                loading=Signal::derive(move || product.with(Option::is_none) && error.with(Option::is_none))
                error=error
            >
                {move || {
                    product
                        .get()
                        .map(|p| {
                            let stock = p.stock;
                            view! {
                                <div class="detail__media">
                                    {p.images.iter().map(|src| view! { <img src=src.clone() alt=p.name.clone()/> }).collect_view()}
                                </div>
                                <div class="detail__body">
                                    <h1>{p.name.clone()}</h1>
                                    {p.category.as_ref().map(|c| view! { <span class="card__tag">{c.to_string()}</span> })}
                                    <p class="detail__price">{format_price(p.price)}</p>
                                    <p>{p.description.clone()}</p>
                                    <ul class="detail__features">
                                        {p.features.iter().map(|f| view! { <li>{f.clone()}</li> }).collect_view()}
                                    </ul>
                                    <dl class="detail__specs">
                                        {p
                                            .specifications
                                            .iter()
                                            .map(|(k, v)| view! { <dt>{k.clone()}</dt> <dd>{v.clone()}</dd> })
                                            .collect_view()}
                                    </dl>
                                    <Show
                                        when=move || { stock > 0 }
                                        fallback=|| view! { <p class="detail__stock">"Out of stock"</p> }
                                    >
                                        <div class="detail__buy">
                                            <input
                                                type="number"
                                                min="1"
                                                max=stock.to_string()
                                                prop:value=move || quantity.get().to_string()
                                                on:input=move |ev| quantity.set(clamp_quantity(&event_target_value(&ev), stock))
                                            />
                                            <button class="btn btn--primary" on:click=move |_| on_add.run(())>
                                                "Add to cart"
                                            </button>
                                        </div>
                                    </Show>
                                </div>
                            }
                        })
                }}
            </LoadStatus>
        </section>
    }
}
