use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use chrono::{DateTime, Duration, Utc};

use super::key::QueryKey;
use crate::config::Config;

// QUERY OPTIONS
/// Per-query behaviour applied when a query does not override it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryOptions {
    /// How long fetched data is considered fresh before it may be re-fetched.
    pub stale_time: Duration,
    /// Maximum fetch attempts, including the first one.
    pub retry: u32,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            stale_time: Duration::milliseconds(Config::QUERY_STALE_TIME_MS),
            retry: Config::QUERY_RETRY_ATTEMPTS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DefaultOptions {
    pub queries: QueryOptions,
}

// CLIENT CONFIGURATION
/// Configuration for a [`QueryClient`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct QueryClientConfig {
    pub default_options: DefaultOptions,
}

impl QueryClientConfig {
    /// Creates a builder for constructing a `QueryClientConfig`.
    pub fn builder() -> QueryClientConfigBuilder {
        QueryClientConfigBuilder::default()
    }
}

// CLIENT CONFIGURATION BUILDER
/// Builder for constructing a `QueryClientConfig` with custom settings.
#[derive(Debug, Default)]
pub struct QueryClientConfigBuilder {
    stale_time: Option<Duration>,
    retry: Option<u32>,
}

impl QueryClientConfigBuilder {
    /// Sets the default freshness window.
    pub fn stale_time(mut self, stale_time: Duration) -> Self {
        self.stale_time = Some(stale_time);
        self
    }

    /// Sets the default number of fetch attempts.
    pub fn retry(mut self, attempts: u32) -> Self {
        self.retry = Some(attempts);
        self
    }

    /// Builds the `QueryClientConfig`.
    pub fn build(self) -> QueryClientConfig {
        let defaults = QueryOptions::default();
        QueryClientConfig {
            default_options: DefaultOptions {
                queries: QueryOptions {
                    stale_time: self.stale_time.unwrap_or(defaults.stale_time),
                    retry: self.retry.unwrap_or(defaults.retry),
                },
            },
        }
    }
}

// CACHE
struct CacheEntry {
    value: Rc<dyn Any>,
    updated_at: DateTime<Utc>,
    invalidated: bool,
}

struct Inner {
    config: QueryClientConfig,
    cache: RefCell<HashMap<QueryKey, CacheEntry>>,
}

// QUERY CLIENT
/// Shared, single-threaded query cache.
///
/// Cloning yields another handle to the same cache. Two handles compare equal
/// only when they share a cache, which lets the client travel through a Yew
/// `ContextProvider` without spurious re-renders.
#[derive(Clone)]
pub struct QueryClient {
    inner: Rc<Inner>,
}

impl QueryClient {
    /// Creates a client with an empty cache.
    pub fn new(config: QueryClientConfig) -> Self {
        Self {
            inner: Rc::new(Inner {
                config,
                cache: RefCell::new(HashMap::new()),
            }),
        }
    }

    /// Returns the options queries use unless they override them.
    pub fn default_options(&self) -> &DefaultOptions {
        &self.inner.config.default_options
    }

    /// Stores `value` under `key`, stamped as fetched now.
    pub fn set_query_data<T: 'static>(&self, key: QueryKey, value: Rc<T>) {
        self.set_query_data_at(key, value, Utc::now());
    }

    /// Stores `value` under `key`, stamped as fetched at `now`.
    pub fn set_query_data_at<T: 'static>(&self, key: QueryKey, value: Rc<T>, now: DateTime<Utc>) {
        let value: Rc<dyn Any> = value;
        self.inner.cache.borrow_mut().insert(
            key,
            CacheEntry {
                value,
                updated_at: now,
                invalidated: false,
            },
        );
    }

    /// Returns the cached value for `key`, fresh or not.
    ///
    /// `None` when nothing is cached or the cached value is not a `T`.
    pub fn get_query_data<T: 'static>(&self, key: &QueryKey) -> Option<Rc<T>> {
        self.inner
            .cache
            .borrow()
            .get(key)
            .and_then(|entry| entry.value.clone().downcast::<T>().ok())
    }

    /// Returns the cached value for `key` only while it is still fresh at `now`.
    pub fn fresh_query_data_at<T: 'static>(
        &self,
        key: &QueryKey,
        now: DateTime<Utc>,
    ) -> Option<Rc<T>> {
        if self.is_stale_at(key, now) {
            None
        } else {
            self.get_query_data(key)
        }
    }

    /// When the value under `key` was last stored.
    pub fn updated_at(&self, key: &QueryKey) -> Option<DateTime<Utc>> {
        self.inner.cache.borrow().get(key).map(|entry| entry.updated_at)
    }

    pub fn is_stale(&self, key: &QueryKey) -> bool {
        self.is_stale_at(key, Utc::now())
    }

    /// A query is stale when it is not cached, has been invalidated, or is at
    /// least `stale_time` old.
    pub fn is_stale_at(&self, key: &QueryKey, now: DateTime<Utc>) -> bool {
        let stale_time = self.default_options().queries.stale_time;
        self.inner
            .cache
            .borrow()
            .get(key)
            .is_none_or(|entry| entry.invalidated || now - entry.updated_at >= stale_time)
    }

    /// Marks every query under `prefix` stale. Returns how many were marked.
    pub fn invalidate_queries(&self, prefix: &QueryKey) -> usize {
        let mut cache = self.inner.cache.borrow_mut();
        let mut marked = 0;
        for (key, entry) in cache.iter_mut() {
            if key.starts_with(prefix) {
                entry.invalidated = true;
                marked += 1;
            }
        }
        marked
    }

    /// Drops every query under `prefix`. Returns how many were removed.
    pub fn remove_queries(&self, prefix: &QueryKey) -> usize {
        let mut cache = self.inner.cache.borrow_mut();
        let before = cache.len();
        cache.retain(|key, _| !key.starts_with(prefix));
        before - cache.len()
    }

    pub fn clear(&self) {
        self.inner.cache.borrow_mut().clear();
    }

    pub fn len(&self) -> usize {
        self.inner.cache.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.cache.borrow().is_empty()
    }
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new(QueryClientConfig::default())
    }
}

impl PartialEq for QueryClient {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for QueryClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryClient")
            .field("config", &self.inner.config)
            .field("cached", &self.len())
            .finish()
    }
}
