//! Networking module for REST calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps every backend endpoint the pages use. Wire types and error
//! classification live in the shared `market` crate.

pub mod api;
