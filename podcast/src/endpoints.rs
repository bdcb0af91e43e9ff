//! Endpoint paths of the external podcast API.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

pub const VOICES: &str = "/voices";
pub const EPISODES: &str = "/episodes";
pub const UPLOADS: &str = "/uploads";
pub const EXTRACT_TEXT: &str = "/extract-text";
pub const GENERATE_SCRIPT: &str = "/generate-script";
pub const PROCESS: &str = "/process";
pub const GENERATE_AUDIO: &str = "/generate-audio";
pub const AUTH_LOGIN: &str = "/auth/login";
pub const AUTH_REGISTER: &str = "/auth/register";

/// Multipart field name `POST /uploads` reads the document from.
pub const UPLOAD_FIELD: &str = "file";

/// Path of the audio stream for one episode.
#[must_use]
pub fn episode_audio(episode_id: i64) -> String {
    format!("{EPISODES}/{episode_id}/audio")
}

/// Join an API base URL and an absolute path, ignoring trailing slashes on the base.
#[must_use]
pub fn url(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

/// Value of the `Authorization` header for a stored access token.
/// Whether a call to `path` carries the stored bearer token. The auth
/// endpoints never do, so a stale token is not sent with credentials.
#[must_use]
pub fn sends_bearer(path: &str) -> bool {
    path != AUTH_LOGIN && path != AUTH_REGISTER
}

#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
