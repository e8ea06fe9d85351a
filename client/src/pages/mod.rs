//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its directory load and delegates rendering details to
//! `components`.

pub mod candidates;
pub mod problems;
