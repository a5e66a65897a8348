//! Shared marketplace domain model for the storefront client and its host.
//!
//! This crate owns the REST wire representation (entities, list envelopes,
//! endpoint paths) and the error taxonomy every request is classified into.
//! It has no browser or server dependencies so both sides, and native unit
//! tests, can use it directly.

pub mod cart;
pub mod endpoints;
pub mod error;
pub mod models;

pub use cart::{Cart, CartLine, CheckoutSummary, LineKind};
pub use error::ApiError;
