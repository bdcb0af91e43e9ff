//! Build-time configuration for the browser bundle.
//!
//! The API base URL is baked in at compile time from `STUDYCAST_API_BASE`
//! so the WASM bundle needs no runtime config fetch.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Base URL of the external podcast API, without a trailing slash.
pub fn api_base() -> &'static str {
    resolve_api_base(option_env!("STUDYCAST_API_BASE"))
}

fn resolve_api_base(raw: Option<&'static str>) -> &'static str {
    raw.map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(DEFAULT_API_BASE)
        .trim_end_matches('/')
}

/// Absolute URL for an API path.
pub fn api_url(path: &str) -> String {
    podcast::endpoints::url(api_base(), path)
}

/// Source URL for an episode's `<audio>` element.
pub fn episode_audio_url(episode_id: i64) -> String {
    api_url(&podcast::endpoints::episode_audio(episode_id))
}
