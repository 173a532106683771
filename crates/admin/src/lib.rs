//! Stockroom Admin library.
//!
//! A server-rendered e-commerce dashboard: products and orders tables with
//! search, filter, sort and selection, a five-tab new-product wizard, and an
//! order details drawer. All records live in memory and are seeded on start.
//!
//! The crate is a library so the router can be driven from tests; the
//! `stockroom-admin` binary only loads config, sets up tracing and serves
//! [`routes::app`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod components;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;

pub use config::AdminConfig;
pub use dashboard::Dashboard;
pub use state::AppState;
