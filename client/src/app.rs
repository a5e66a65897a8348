//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use market::models::TaxonomyKind;

use crate::components::nav_bar::NavBar;
use crate::components::notice_banner::NoticeBanner;
use crate::net::api;
use crate::pages::account::AccountPage;
use crate::pages::admin::{
    consultants::AdminConsultantsPage, dashboard::AdminDashboardPage, login::AdminLoginPage,
    orders::AdminOrdersPage, products::AdminProductsPage, reviews::AdminReviewsPage, settings::AdminSettingsPage,
    taxonomy::AdminTaxonomyPage, users::AdminUsersPage,
};
use crate::pages::{
    cart::CartPage,
    consultants::{ConsultantDetailPage, ConsultantsPage},
    home::HomePage,
    login::LoginPage,
    products::{ProductDetailPage, ProductsPage},
    register::RegisterPage,
};
use crate::state::Stores;
use crate::util::cart_actions;
use crate::util::storage::BrowserStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Resolve the stored session once the app is running in the browser:
/// fetch the profile for a stored token, then bring the cart in line with
/// the session (server cart when signed in, local guest cart otherwise).
fn bootstrap_session(stores: Stores) {
    let token = stores.auth.try_update(|a| a.restore(&BrowserStorage)).flatten();
    if token.is_none() {
        cart_actions::load_guest(stores);
        return;
    }
    leptos::task::spawn_local(async move {
        match api::fetch_current_user().await {
            Ok(user) => {
                stores.auth.update(|a| a.profile_loaded(user));
                if let Err(err) = cart_actions::adopt_server_cart(stores).await {
                    stores.cart.update(|c| c.failed(&err));
                }
            }
            Err(err) => {
                if err.is_unauthorized() {
                    stores.auth.update(|a| a.session_expired(&BrowserStorage));
                } else {
                    stores.auth.update(|a| a.logout(&BrowserStorage));
                }
                cart_actions::load_guest(stores);
            }
        }
    });
}

/// Root application component.
///
/// Provides the shared auth, cart and notice contexts and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let stores = Stores::provide();

    // Effects only run in the browser, so SSR and the first client render
    // both see the pending auth state.
    Effect::new(move || bootstrap_session(stores));

    view! {
        <Stylesheet id="wellspring" href="/wellspring.css"/>
        <Title text="Wellspring"/>

        <Router>
            <NavBar/>
            <NoticeBanner/>
            <main class="page">
                <Routes fallback=|| view! { <p class="page__empty">"Page not found."</p> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("products") view=ProductsPage/>
                    <Route path=(StaticSegment("products"), ParamSegment("id")) view=ProductDetailPage/>
                    <Route path=StaticSegment("consultants") view=ConsultantsPage/>
                    <Route path=(StaticSegment("consultants"), ParamSegment("id")) view=ConsultantDetailPage/>
                    <Route path=StaticSegment("cart") view=CartPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("account") view=AccountPage/>

                    <Route path=(StaticSegment("admin"), StaticSegment("login")) view=AdminLoginPage/>
                    <Route path=StaticSegment("admin") view=AdminDashboardPage/>
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("users"))
                        view=|| view! { <AdminUsersPage customers_only=false/> }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("customers"))
                        view=|| view! { <AdminUsersPage customers_only=true/> }
                    />
                    <Route path=(StaticSegment("admin"), StaticSegment("products")) view=AdminProductsPage/>
                    <Route path=(StaticSegment("admin"), StaticSegment("consultants")) view=AdminConsultantsPage/>
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("categories"))
                        view=|| view! { <AdminTaxonomyPage kind=TaxonomyKind::Category/> }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("ailments"))
                        view=|| view! { <AdminTaxonomyPage kind=TaxonomyKind::Ailment/> }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("specializations"))
                        view=|| view! { <AdminTaxonomyPage kind=TaxonomyKind::Specialization/> }
                    />
                    <Route path=(StaticSegment("admin"), StaticSegment("orders")) view=AdminOrdersPage/>
                    <Route path=(StaticSegment("admin"), StaticSegment("reviews")) view=AdminReviewsPage/>
                    <Route path=(StaticSegment("admin"), StaticSegment("settings")) view=AdminSettingsPage/>
                </Routes>
            </main>
        </Router>
    }
}
