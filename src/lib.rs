//! Cargo Tracking API — Shared Library
//!
//! This crate contains the models, record store, lookup service, response
//! formatter, and route handlers used by every HTTP surface.
//!
//! Each serverless function in `api/` and the standalone server in
//! `src/bin/server.rs` delegate to [`handlers::ApiService`] to keep
//! entry points thin and behavior identical.

pub mod config;
pub mod error;
pub mod format;
pub mod handlers;
pub mod logging;
pub mod lookup;
pub mod models;
pub mod server;
pub mod serverless;
pub mod store;
pub mod trace;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
