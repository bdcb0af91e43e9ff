//! Error type shared by every API helper.
//!
//! The UI never shows these directly: pages collapse any failure into the
//! fixed message of the action that failed (see [`crate::messages::Action`]).
//! The variants exist for logging and for the CLI's exit diagnostics.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with a non-2xx status.
    #[error("request failed with status {0}")]
    Status(u16),
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The response body did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// The call is only available in the browser build.
    #[error("not available on server")]
    Unavailable,
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
