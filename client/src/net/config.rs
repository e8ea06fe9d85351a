//! API endpoint configuration baked in at build time.
//!
//! The WASM bundle has no process environment, so the base URL is read from
//! `CANDIDATOS_API_BASE_URL` when the crate is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "https://api-truboot.fbarrientostakata.workers.dev/api/v1";

/// Base URL for the candidates API, without a trailing slash.
pub fn api_base_url() -> &'static str {
    normalize_base_url(option_env!("CANDIDATOS_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
}

fn normalize_base_url(raw: &str) -> &str {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() { DEFAULT_API_BASE_URL } else { trimmed }
}
