use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::error::AppError;
use crate::query::{QueryClient, QueryKey};
use crate::services::retry::{RetryPolicy, retry_with_backoff};

#[derive(Debug)]
pub enum QueryState<T> {
    Loading,
    Loaded(Rc<T>),
    Error(String),
}

impl<T> QueryState<T> {
    /// Returns true if the state is loading
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the data if it is loaded
    pub const fn data(&self) -> Option<&Rc<T>> {
        match self {
            Self::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

// Manual impls: derives would demand `T: Clone` even though only the `Rc` is cloned.
impl<T> Clone for QueryState<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Loading => Self::Loading,
            Self::Loaded(data) => Self::Loaded(Rc::clone(data)),
            Self::Error(msg) => Self::Error(msg.clone()),
        }
    }
}

impl<T: PartialEq> PartialEq for QueryState<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Loading, Self::Loading) => true,
            (Self::Loaded(a), Self::Loaded(b)) => a == b,
            (Self::Error(a), Self::Error(b)) => a == b,
            _ => false,
        }
    }
}

/// Initial state for a query: cached data when any exists, otherwise loading.
pub fn initial_state<T: 'static>(client: Option<&QueryClient>, key: &QueryKey) -> QueryState<T> {
    match client {
        None => QueryState::Error(NO_CLIENT.to_string()),
        Some(client) => client
            .get_query_data::<T>(key)
            .map_or(QueryState::Loading, QueryState::Loaded),
    }
}

const NO_CLIENT: &str = "query client not provided";

/// What the hook does for a key once it is mounted.
#[derive(Debug)]
pub enum FetchPlan<T> {
    /// Cached data is still fresh; no request is made.
    Reuse(Rc<T>),
    /// Cached data is stale or missing; fetch with this policy.
    Fetch(RetryPolicy),
}

pub fn plan_fetch<T: 'static>(
    client: &QueryClient,
    key: &QueryKey,
    now: DateTime<Utc>,
) -> FetchPlan<T> {
    client.fresh_query_data_at::<T>(key, now).map_or_else(
        || FetchPlan::Fetch(RetryPolicy::new(client.default_options().queries.retry)),
        FetchPlan::Reuse,
    )
}

/// Turns a fetch result into the next state.
///
/// Successful data is cached even when the view that asked for it is gone,
/// so the next mount reuses it. Returns `None` when the result must not be
/// shown because the request was aborted.
pub fn settle<T: 'static>(
    client: &QueryClient,
    key: QueryKey,
    result: Result<T, AppError>,
    aborted: bool,
) -> Option<QueryState<T>> {
    match result {
        Ok(data) => {
            let data = Rc::new(data);
            client.set_query_data(key, Rc::clone(&data));
            (!aborted).then_some(QueryState::Loaded(data))
        }
        Err(e) => (!aborted).then(|| QueryState::Error(e.to_string())),
    }
}

/// Reuses fresh data for `key` or fetches it, writing the result to the cache.
pub async fn run_query<T, F, Fut>(
    client: &QueryClient,
    key: &QueryKey,
    fetcher: F,
    aborted: &Cell<bool>,
    now: DateTime<Utc>,
) -> Option<QueryState<T>>
where
    T: 'static,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    match plan_fetch::<T>(client, key, now) {
        FetchPlan::Reuse(data) => (!aborted.get()).then_some(QueryState::Loaded(data)),
        FetchPlan::Fetch(policy) => {
            let result = retry_with_backoff(fetcher, policy).await;
            settle(client, key.clone(), result, aborted.get())
        }
    }
}

/// Runs `fetcher` for `key` through the `QueryClient` in context.
///
/// Cached data is shown immediately. A fetch only happens when the cached
/// entry is stale, and its result is written back to the cache.
#[hook]
pub fn use_query<T, F, Fut>(key: QueryKey, fetcher: F) -> UseStateHandle<QueryState<T>>
where
    T: 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, AppError>> + 'static,
{
    let client = use_context::<QueryClient>();
    let state = {
        let client = client.clone();
        let key = key.clone();
        use_state(move || initial_state::<T>(client.as_ref(), &key))
    };

    {
        let state = state.clone();

        use_effect_with(key, move |key| {
            let aborted = Rc::new(Cell::new(false));

            // Reset so a new key never shows the previous key's data
            state.set(initial_state::<T>(client.as_ref(), key));

            if let Some(client) = client {
                let key = key.clone();
                let aborted = aborted.clone();

                spawn_local(async move {
                    let next = run_query(&client, &key, &fetcher, &aborted, Utc::now()).await;
                    if let Some(next) = next {
                        if let QueryState::Error(msg) = &next {
                            gloo::console::warn!(format!("Query {key} failed: {msg}"));
                        }
                        state.set(next);
                    }
                });
            }

            move || {
                aborted.set(true);
            }
        });
    }

    state
}
