//! Stack of dismissible notices pinned under the header.

use leptos::prelude::*;

use crate::state::notice::NoticeState;

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        <div class="notices" role="status" aria-live="polite">
            <For
                each=move || notices.get().notices
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div class=notice.level.css_class()>
                            <span class="notice__text">{notice.text}</span>
                            <button
                                class="notice__dismiss"
                                aria-label="Dismiss"
                                on:click=move |_| notices.update(|n| n.dismiss(id))
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
