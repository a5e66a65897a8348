//! Landing page: hero, featured products and consultants, testimonials and
//! partners.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use market::endpoints::{ConsultantQuery, ProductQuery};
use market::models::{Consultant, Product};

use crate::components::consultant_card::ConsultantCard;
use crate::components::load_status::LoadStatus;
use crate::components::product_card::ProductCard;
use crate::net::api;
use crate::pages::products::product_line;
use crate::state::Stores;
use crate::state::admin::ResourceList;
use crate::util::auth::Area;
use crate::util::cart_actions;
use crate::util::loader::spawn_list_load;

const FEATURED: usize = 4;

/// Customer quote shown on the landing page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "Booking a session took two minutes and the follow-up plan actually fit my week.",
        author: "Maya R.",
        role: "Customer",
    },
    Testimonial {
        quote: "The herbal range is well sourced and clearly labelled. I reorder every month.",
        author: "Daniel K.",
        role: "Customer",
    },
    Testimonial {
        quote: "Wellspring sends me clients who already know what they want to work on.",
        author: "Dr. Amara O.",
        role: "Consultant",
    },
];

pub const PARTNERS: [&str; 4] =
    ["Greenleaf Apothecary", "Northside Wellness Clinic", "Open Roots Institute", "Calm Harbor Yoga"];

#[component]
pub fn HomePage() -> impl IntoView {
    let stores = Stores::expect();
    let navigate = use_navigate();
    let products = RwSignal::new(ResourceList::<Product>::default());
    let consultants = RwSignal::new(ResourceList::<Consultant>::default());

    let nav = navigate.clone();
    Effect::new(move || {
        spawn_list_load(products, Area::Store, stores, nav.clone(), async move {
            api::fetch_products(&ProductQuery::default()).await
        });
        spawn_list_load(consultants, Area::Store, stores, nav.clone(), async move {
            api::fetch_consultants(&ConsultantQuery::default()).await
        });
    });

    let on_add = Callback::new(move |product: Product| {
        cart_actions::add_line(stores, product_line(&product), navigate.clone());
    });

    view! {
        <section class="hero">
            <h1>"Wellspring"</h1>
            <p>"Products and practitioners for everyday wellbeing."</p>
            <div class="hero__actions">
                <A href="/products" attr:class="btn btn--primary">"Shop products"</A>
                <A href="/consultants" attr:class="btn">"Find a consultant"</A>
            </div>
        </section>

        <section class="featured">
            <h2>"Featured products"</h2>
            <LoadStatus
                loading=Signal::derive(move || products.with(|l| l.loading))
                error=Signal::derive(move || products.with(|l| l.error.clone()))
            >
                <div class="grid">
                    {move || {
                        products
                            .with(|l| l.items.iter().take(FEATURED).cloned().collect::<Vec<_>>())
                            .into_iter()
                            .map(|product| view! { <ProductCard product=product on_add=on_add/> })
                            .collect_view()
                    }}
                </div>
            </LoadStatus>
        </section>

        <section class="featured">
            <h2>"Consultants"</h2>
            <LoadStatus
                loading=Signal::derive(move || consultants.with(|l| l.loading))
                error=Signal::derive(move || consultants.with(|l| l.error.clone()))
            >
                <div class="grid">
                    {move || {
                        consultants
                            .with(|l| l.items.iter().take(FEATURED).cloned().collect::<Vec<_>>())
                            .into_iter()
                            .map(|consultant| view! { <ConsultantCard consultant=consultant/> })
                            .collect_view()
                    }}
                </div>
            </LoadStatus>
        </section>

        <section class="testimonials">
            <h2>"What people say"</h2>
            <div class="grid">
                {TESTIMONIALS
                    .into_iter()
                    .map(|t| {
                        view! {
                            <blockquote class="testimonial">
                                <p>{t.quote}</p>
                                <footer>{t.author} ", " {t.role}</footer>
                            </blockquote>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <section class="partners">
            <h2>"Our partners"</h2>
            <ul class="partners__list">
                {PARTNERS.into_iter().map(|name| view! { <li>{name}</li> }).collect_view()}
            </ul>
        </section>
    }
}
