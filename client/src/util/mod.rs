//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and static content
//! from page and component logic.

pub mod clock;
pub mod party;
pub mod responses;
