//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render cards, the chat surface, and failure screens while
//! reading/writing shared state from Leptos context providers.

pub mod app_error;
pub mod candidate_card;
pub mod chat_panel;
pub mod load_error;
pub mod response_card;
