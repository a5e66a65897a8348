//! Loading and error placeholders shared by list and detail pages.

#[cfg(test)]
#[path = "load_status_test.rs"]
mod load_status_test;

use leptos::prelude::*;

/// What a page section should show for its current fetch state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadPhase {
    Loading,
    Failed(String),
    Ready,
}

/// Loading wins over an error left from the previous fetch.
#[must_use]
pub fn load_phase(loading: bool, error: Option<String>) -> LoadPhase {
    match (loading, error) {
        (true, _) => LoadPhase::Loading,
        (false, Some(message)) => LoadPhase::Failed(message),
        (false, None) => LoadPhase::Ready,
    }
}

/// Shows "Loading..." while `loading` is set, then the error (if any).
/// Children render only when neither applies.
#[component]
pub fn LoadStatus(
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
    children: ChildrenFn,
) -> impl IntoView {
    // Re-rendered on every phase change, so the children must stay callable.
    let children = StoredValue::new(children);

    move || match load_phase(loading.get(), error.get()) {
        LoadPhase::Loading => view! { <p class="page__loading">"Loading..."</p> }.into_any(),
        LoadPhase::Failed(message) => view! { <p class="page__error">{message}</p> }.into_any(),
        LoadPhase::Ready => children.with_value(|children| children()).into_any(),
    }
}
