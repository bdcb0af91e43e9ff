//! Voice catalog offered by the backend.

#[cfg(test)]
#[path = "voices_test.rs"]
mod voices_test;

use podcast::types::VoicesResponse;
use podcast::{Action, ApiError, messages};

#[derive(Clone, Debug, Default)]
pub struct VoicesState {
    pub voices: Vec<String>,
    /// Notice about the TTS engine or a load failure.
    pub note: Option<String>,
}

impl VoicesState {
    /// Apply a `GET /voices` outcome.
    pub fn apply(&mut self, result: Result<VoicesResponse, ApiError>) {
        match result {
            Ok(resp) => {
                self.voices = resp.voices;
                self.note = (!resp.kokoro_available).then(|| messages::KOKORO_UNAVAILABLE.to_owned());
            }
            Err(_) => {
                self.voices.clear();
                self.note = Some(Action::ListVoices.failure_message().to_owned());
            }
        }
    }
}
