//! Roombook - meeting room reservation front-end.
//!
//! A Yew client-side application. [`bootstrap::start`] builds the shared
//! [`query::QueryClient`] and mounts [`app::Root`] into `#root`.

pub mod app;
pub mod bootstrap;
pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod query;
pub mod routes;
pub mod services;
