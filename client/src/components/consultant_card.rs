//! Catalog card for an approved consultant.

use leptos::prelude::*;

use market::cart::format_price;
use market::models::Consultant;

#[component]
pub fn ConsultantCard(consultant: Consultant) -> impl IntoView {
    let href = format!("/consultants/{}", consultant.id);
    let from = consultant.starting_price().map(|p| format!("from {}", format_price(p)));
    let tags = consultant
        .specializations
        .iter()
        .chain(&consultant.categories)
        .map(ToString::to_string)
        .collect::<Vec<_>>();
    let rating = format!("{:.1} ({} reviews)", consultant.rating, consultant.total_ratings);

    view! {
        <article class="card">
            <a class="card__title" href=href>{consultant.display_name().to_owned()}</a>
            <p class="card__body">{consultant.bio.clone()}</p>
            <div class="card__tags">
                {tags.into_iter().map(|t| view! { <span class="card__tag">{t}</span> }).collect_view()}
            </div>
            <span class="card__rating">{rating}</span>
            {from.map(|f| view! { <span class="card__price">{f}</span> })}
        </article>
    }
}
