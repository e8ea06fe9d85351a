//! Networking modules for the candidates API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` loads directories (index then details), `types` defines the records
//! and their decoding rules, `error` the failure taxonomy, and `config` the
//! build-time API base URL.

pub mod api;
pub mod config;
pub mod error;
pub mod types;
