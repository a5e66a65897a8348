//! Consultant directory, profile page, services and reviews.

#[cfg(test)]
#[path = "consultants_test.rs"]
mod consultants_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use market::cart::{CartLine, LineKind, format_price};
use market::endpoints::ConsultantQuery;
use market::models::{Consultant, ConsultantService, Review, ReviewDraft, Taxonomy, TaxonomyKind};

use crate::components::consultant_card::ConsultantCard;
use crate::components::load_status::LoadStatus;
use crate::net::api;
use crate::state::Stores;
use crate::state::admin::ResourceList;
use crate::state::auth::AuthState;
use crate::state::notice::NoticeLevel;
use crate::util::auth::{Area, report_error};
use crate::util::cart_actions;
use crate::util::loader::{spawn_list_load, spawn_load};
use crate::util::notify::notify;

/// One booking of a consultant's service.
#[must_use]
pub fn service_line(consultant: &Consultant, service: &ConsultantService) -> CartLine {
    CartLine {
        item_id: service.id.clone(),
        kind: LineKind::Service,
        name: format!("{} with {}", service.name, consultant.display_name()),
        unit_price: service.price,
        quantity: 1,
    }
}

/// Filled and empty stars for a rating, rounded to the nearest whole star.
#[must_use]
pub fn rating_stars(rating: f64) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let filled = rating.round().clamp(0.0, 5.0) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

#[component]
pub fn ConsultantsPage() -> impl IntoView {
    let stores = Stores::expect();
    let navigate = use_navigate();
    let consultants = RwSignal::new(ResourceList::<Consultant>::default());
    let categories = RwSignal::new(Vec::<Taxonomy>::new());
    let ailments = RwSignal::new(Vec::<Taxonomy>::new());
    let search = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let ailment = RwSignal::new(String::new());
    let applied = RwSignal::new(ConsultantQuery::default());

    Effect::new(move || {
        leptos::task::spawn_local(async move {
            if let Ok(items) = api::fetch_taxonomy(TaxonomyKind::Category).await {
                categories.set(items);
            }
            if let Ok(items) = api::fetch_taxonomy(TaxonomyKind::Ailment).await {
                ailments.set(items);
            }
        });
    });

    Effect::new(move || {
        let query = applied.get();
        spawn_list_load(consultants, Area::Store, stores, navigate.clone(), async move {
            api::fetch_consultants(&query).await
        });
    });

    let on_filter = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let non_blank = |v: String| Some(v.trim().to_owned()).filter(|v| !v.is_empty());
        applied.set(ConsultantQuery {
            category: non_blank(category.get_untracked()),
            ailment: non_blank(ailment.get_untracked()),
            search: non_blank(search.get_untracked()),
        });
    };

    view! {
        <section class="catalog">
            <h1>"Consultants"</h1>
            <form class="filters" on:submit=on_filter>
                <input
                    type="search"
                    placeholder="Search by name or expertise"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <TaxonomySelect label="All categories" options=categories value=category/>
                <TaxonomySelect label="All ailments" options=ailments value=ailment/>
                <button class="btn" type="submit">
                    "Filter"
                </button>
            </form>
            <LoadStatus
                loading=Signal::derive(move || consultants.with(|l| l.loading))
                error=Signal::derive(move || consultants.with(|l| l.error.clone()))
            >
                <Show
                    when=move || consultants.with(|l| !l.items.is_empty())
                    fallback=|| view! { <p class="page__empty">"No consultants match."</p> }
                >
                    <div class="grid">
                        <For
                            each=move || consultants.get().items
                            key=|c| c.id.clone()
                            children=|consultant| view! { <ConsultantCard consultant=consultant/> }
                        />
                    </div>
                </Show>
            </LoadStatus>
        </section>
    }
}

#[component]
fn TaxonomySelect(label: &'static str, options: RwSignal<Vec<Taxonomy>>, value: RwSignal<String>) -> impl IntoView {
    view! {
        <select on:change=move |ev| value.set(event_target_value(&ev))>
            <option value="">{label}</option>
            <For
                each=move || options.get()
                key=|t| t.id.clone()
                children=|t| view! { <option value=t.id.clone()>{t.name}</option> }
            />
        </select>
    }
}

#[component]
pub fn ConsultantDetailPage() -> impl IntoView {
    let stores = Stores::expect();
    let navigate = use_navigate();
    let params = use_params_map();
    let consultant = RwSignal::new(None::<Consultant>);
    let error = RwSignal::new(None::<String>);
    let reviews = RwSignal::new(ResourceList::<Review>::default());

    let nav = navigate.clone();
    Effect::new(move || {
        let Some(id) = params.read().get("id") else {
            return;
        };
        consultant.set(None);
        let reviews_id = id.clone();
        spawn_load(consultant, error, Area::Store, stores, nav.clone(), async move {
            api::fetch_consultant(&id).await
        });
        spawn_list_load(reviews, Area::Store, stores, nav.clone(), async move {
            api::fetch_consultant_reviews(&reviews_id).await
        });
    });

    let on_book = Callback::new(move |service: ConsultantService| {
        let Some(c) = consultant.get_untracked() else {
            return;
        };
        cart_actions::add_line(stores, service_line(&c, &service), navigate.clone());
    });

    view! {
        <section class="detail">
            <LoadStatus
                loading=Signal::derive(move || consultant.with(Option::is_none) && error.with(Option::is_none))
                error=error
            >
                {move || consultant.get().map(|c| view! { <ConsultantProfile consultant=c on_book=on_book/> })}
            </LoadStatus>
            <section class="reviews">
                <h2>"Reviews"</h2>
                <LoadStatus
                    loading=Signal::derive(move || reviews.with(|l| l.loading))
                    error=Signal::derive(move || reviews.with(|l| l.error.clone()))
                >
                    <Show
                        when=move || reviews.with(|l| !l.items.is_empty())
                        fallback=|| view! { <p class="page__empty">"No reviews yet."</p> }
                    >
                        <For
                            each=move || reviews.get().items
                            key=|r| r.id.clone()
                            children=|review| {
                                view! {
                                    <article class="review">
                                        <span class="review__stars">{rating_stars(f64::from(review.rating))}</span>
                                        <span class="review__author">{review.author().to_owned()}</span>
                                        <p>{review.comment.clone()}</p>
                                    </article>
                                }
                            }
                        />
                    </Show>
                </LoadStatus>
                <Show when=move || stores.auth.with(AuthState::is_authenticated)>
                    <ReviewForm consultant=consultant reviews=reviews/>
                </Show>
            </section>
        </section>
    }
}

#[component]
fn ConsultantProfile(consultant: Consultant, on_book: Callback<ConsultantService>) -> impl IntoView {
    let tags = consultant
        .categories
        .iter()
        .chain(&consultant.specializations)
        .chain(&consultant.ailments)
        .map(ToString::to_string)
        .collect::<Vec<_>>();

    view! {
        <div class="detail__body">
            <h1>{consultant.display_name().to_owned()}</h1>
            <p class="detail__rating">
                {rating_stars(consultant.rating)}
                {format!(" {:.1} ({} reviews)", consultant.rating, consultant.total_ratings)}
            </p>
            <p>{consultant.bio.clone()}</p>
            <div class="card__tags">
                {tags.into_iter().map(|t| view! { <span class="card__tag">{t}</span> }).collect_view()}
            </div>
            <h2>"Services"</h2>
            <ul class="services">
                {consultant
                    .services
                    .into_iter()
                    .map(|service| {
                        let label = format!("{} · {} min · {}", service.name, service.duration, format_price(service.price));
                        view! {
                            <li class="services__item">
                                <span>{label}</span>
                                <button class="btn btn--primary" on:click=move |_| on_book.run(service.clone())>
                                    "Book"
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn ReviewForm(consultant: RwSignal<Option<Consultant>>, reviews: RwSignal<ResourceList<Review>>) -> impl IntoView {
    let stores = Stores::expect();
    let navigate = use_navigate();
    let rating = RwSignal::new(5_u8);
    let comment = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let form_error = RwSignal::new(None::<&'static str>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let Some(id) = consultant.with_untracked(|c| c.as_ref().map(|c| c.id.clone())) else {
            return;
        };
        let draft = match ReviewDraft::validate(rating.get_untracked(), &comment.get_untracked()) {
            Ok(draft) => draft,
            Err(message) => {
                form_error.set(Some(message));
                return;
            }
        };
        form_error.set(None);
        busy.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::submit_consultant_review(&id, &draft).await {
                Ok(review) => {
                    reviews.update(|l| l.upserted(review));
                    comment.set(String::new());
                    notify(stores.notices, NoticeLevel::Success, "Thanks for your review.");
                    // The backend recomputes the rating.
                    if let Ok(updated) = api::fetch_consultant(&id).await {
                        consultant.set(Some(updated));
                    }
                }
                Err(err) => report_error(&err, Area::Store, stores, &navigate),
            }
            busy.set(false);
        });
    };

    view! {
        <form class="review-form" on:submit=on_submit>
            <h3>"Write a review"</h3>
            <select on:change=move |ev| rating.set(event_target_value(&ev).parse().unwrap_or(0))>
                {(1..=5_u8)
                    .rev()
                    .map(|n| view! { <option value=n.to_string() selected=move || rating.get() == n>{rating_stars(f64::from(n))}</option> })
                    .collect_view()}
            </select>
            <textarea
                rows="3"
                placeholder="How was your session?"
                prop:value=move || comment.get()
                on:input=move |ev| comment.set(event_target_value(&ev))
            ></textarea>
            <Show when=move || form_error.get().is_some()>
                <p class="auth-card__error">{move || form_error.get().unwrap_or_default()}</p>
            </Show>
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                "Submit review"
            </button>
        </form>
    }
}
