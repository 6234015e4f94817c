use yew::prelude::*;

use crate::hooks::use_query::{QueryState, use_query};
use crate::models::health::HealthStatus;
use crate::query::QueryKey;
use crate::services::api::fetch_health;

/// Query key under which the backend health status is cached.
pub fn health_key() -> QueryKey {
    QueryKey::from(["health"])
}

#[hook]
pub fn use_health() -> UseStateHandle<QueryState<HealthStatus>> {
    use_query(health_key(), fetch_health)
}
