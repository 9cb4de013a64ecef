//! Domain models for the cargo tracking service.
//!
//! These types are shared across all modules: store, lookup, format, and handlers.

pub mod cargo;
pub mod integration;
pub mod response;
