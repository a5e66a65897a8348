//! Catalog card for a product.

use leptos::prelude::*;

use market::cart::format_price;
use market::models::Product;

#[component]
pub fn ProductCard(product: Product, on_add: Callback<Product>) -> impl IntoView {
    let href = format!("/products/{}", product.id);
    let image = product.cover_image().map(ToOwned::to_owned);
    let in_stock = product.in_stock();
    let category = product.category.as_ref().map(ToString::to_string);
    let price = format_price(product.price);
    let title = product.name.clone();

    view! {
        <article class="card">
            {image.map(|src| view! { <img class="card__image" src=src alt=title.clone()/> })}
            <a class="card__title" href=href>{title}</a>
            {category.map(|c| view! { <span class="card__tag">{c}</span> })}
            <span class="card__price">{price}</span>
            <button
                class="btn btn--primary"
                disabled=!in_stock
                on:click=move |_| on_add.run(product.clone())
            >
                {if in_stock { "Add to cart" } else { "Out of stock" }}
            </button>
        </article>
    }
}
