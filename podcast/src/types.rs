//! Wire DTOs for the external podcast API.
//!
//! DESIGN
//! ======
//! Response types tolerate missing optional fields (`#[serde(default)]`) since
//! the backend omits them depending on which endpoint produced the payload.
//! Request types serialize exactly the keys the backend reads.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Lifecycle of an episode as reported by `GET /episodes`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EpisodeStatus {
    Uploading,
    Processing,
    Ready,
    Error,
    /// Any status string this client does not know about.
    #[default]
    #[serde(other)]
    Unknown,
}

impl EpisodeStatus {
    /// Lowercase label matching the wire representation.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Uploading => "uploading",
            Self::Processing => "processing",
            Self::Ready => "ready",
            Self::Error => "error",
            Self::Unknown => "unknown",
        }
    }
}

/// A finished or in-progress podcast episode.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub status: EpisodeStatus,
    #[serde(default)]
    pub duration_sec: u32,
}

impl Episode {
    /// Only `ready` episodes have an audio file to stream.
    #[must_use]
    pub fn is_playable(&self) -> bool {
        self.status == EpisodeStatus::Ready
    }

    /// Duration rendered as `m:ss`.
    #[must_use]
    pub fn duration_label(&self) -> String {
        format!("{}:{:02}", self.duration_sec / 60, self.duration_sec % 60)
    }
}

/// One titled block of narration inside a [`Script`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScriptSection {
    pub id: i64,
    pub title: String,
    pub content: String,
    /// Estimated narration time in minutes.
    #[serde(default)]
    pub estimated_duration: f64,
}

/// A generated script held in client memory while the user reviews it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Script {
    /// Client-assigned identifier; the backend does not persist drafts.
    pub id: u64,
    pub title: String,
    pub script_content: String,
    pub sections: Vec<ScriptSection>,
    pub target_minutes: u32,
    pub style: String,
    pub voice: String,
    pub status: String,
    pub created_at: String,
}

/// Script-shaped response of `/generate-script` and `/process`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScriptPayload {
    #[serde(default)]
    pub upload_id: Option<i64>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub script_content: String,
    #[serde(default)]
    pub sections: Vec<ScriptSection>,
    #[serde(default)]
    pub target_minutes: u32,
    #[serde(default)]
    pub style: String,
    #[serde(default)]
    pub voice: String,
    #[serde(default)]
    pub estimated_duration: Option<f64>,
    #[serde(default)]
    pub word_count: Option<u64>,
}

/// Response of `GET /voices`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VoicesResponse {
    #[serde(default)]
    pub voices: Vec<String>,
    #[serde(default = "default_true")]
    pub kokoro_available: bool,
}

fn default_true() -> bool {
    true
}

/// Response of `POST /uploads`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub upload_id: i64,
}

/// Response of `POST /extract-text`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExtractTextResponse {
    pub extracted_text: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub word_count: Option<u64>,
    #[serde(default)]
    pub char_count: Option<u64>,
}

/// Body of `/extract-text`, `/generate-script` and `/process`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScriptRequest {
    pub upload_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_override: Option<String>,
    pub target_minutes: u32,
    pub style: String,
    pub voice: String,
}

/// Body of `POST /generate-audio`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerateAudioRequest {
    pub script_content: String,
    pub title: String,
    pub voice: String,
    pub target_minutes: u32,
}

/// Response of `POST /generate-audio`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerateAudioResponse {
    #[serde(default)]
    pub episode_id: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of `/auth/login` and `/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Trim the email and require both fields to be present.
    ///
    /// # Errors
    ///
    /// Returns [`crate::messages::MISSING_CREDENTIALS`] when either field is empty.
    pub fn new(email: &str, password: &str) -> Result<Self, &'static str> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(crate::messages::MISSING_CREDENTIALS);
        }
        Ok(Self { email: email.to_owned(), password: password.to_owned() })
    }
}

/// Response of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
}

/// Response of `POST /auth/register`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub ok: bool,
}
