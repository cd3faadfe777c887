//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the navigation shell, book cards, and notifications
//! while reading/writing shared state from Leptos context providers.

pub mod book_card;
pub mod navbar;
pub mod toast_host;
