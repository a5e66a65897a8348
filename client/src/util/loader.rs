//! Fetch-on-mount plumbing for list pages.

use std::future::Future;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use market::ApiError;
use market::models::Identified;

use crate::state::Stores;
use crate::state::admin::ResourceList;
use crate::util::auth::{Area, report_error};

/// Run `fetch` and land the result in `list`. Failures are recorded on the
/// list and reported the usual way (a 401 redirects to the area's login).
pub fn spawn_list_load<T, Fut, N>(list: RwSignal<ResourceList<T>>, area: Area, stores: Stores, navigate: N, fetch: Fut)
where
    T: Identified + Send + Sync + 'static,
    Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
    N: Fn(&str, NavigateOptions) + 'static,
{
    list.update(ResourceList::begin_load);
    leptos::task::spawn_local(async move {
        match fetch.await {
            Ok(items) => list.update(|l| l.loaded(items)),
            Err(err) => {
                list.update(|l| l.failed(&err));
                report_error(&err, area, stores, &navigate);
            }
        }
    });
}

/// Same as [`spawn_list_load`] for a single record.
pub fn spawn_load<T, Fut, N>(
    slot: RwSignal<Option<T>>,
    error: RwSignal<Option<String>>,
    area: Area,
    stores: Stores,
    navigate: N,
    fetch: Fut,
) where
    T: Send + Sync + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
    N: Fn(&str, NavigateOptions) + 'static,
{
    error.set(None);
    leptos::task::spawn_local(async move {
        match fetch.await {
            Ok(value) => slot.set(Some(value)),
            Err(err) => {
                error.set(Some(err.to_string()));
                report_error(&err, area, stores, &navigate);
            }
        }
    });
}
