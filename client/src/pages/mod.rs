//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetch on mount, submit, refetch)
//! and delegates rendering details to `components`. Admin screens live under
//! `admin` and share its guard.

pub mod account;
pub mod admin;
pub mod cart;
pub mod consultants;
pub mod home;
pub mod login;
pub mod products;
pub mod register;
