//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by page concern (`candidates`, `chat`, `problems`) so
//! components depend on small focused models. Every transition is a plain
//! method, which keeps the behavior testable without a browser.

pub mod candidates;
pub mod chat;
pub mod page;
pub mod problems;
