//! Cached, freshness-aware query results shared through the component tree.

pub mod client;
pub mod key;

pub use client::{DefaultOptions, QueryClient, QueryClientConfig, QueryOptions};
pub use key::QueryKey;
