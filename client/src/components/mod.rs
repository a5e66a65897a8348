//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the shared chrome (navigation, notices, dialogs) and
//! catalog cards while reading shared state from Leptos context providers.

pub mod admin_nav;
pub mod confirm_dialog;
pub mod consultant_card;
pub mod form_field;
pub mod load_status;
pub mod nav_bar;
pub mod notice_banner;
pub mod product_card;
