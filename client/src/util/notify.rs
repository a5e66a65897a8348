//! Push notices that dismiss themselves.

use leptos::prelude::*;

use crate::state::notice::{NoticeLevel, NoticeState};

#[cfg(feature = "hydrate")]
const AUTO_DISMISS_MS: u32 = 6_000;

/// Queue a notice; in the browser it is dismissed again after a few seconds.
pub fn notify(notices: RwSignal<NoticeState>, level: NoticeLevel, text: impl Into<String>) {
    let mut id = 0;
    notices.update(|n| id = n.push(level, text));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(AUTO_DISMISS_MS).await;
        notices.update(|n| n.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}
