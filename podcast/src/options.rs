//! User-selected generation options and the upload file policy.

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;

pub const DEFAULT_TARGET_MINUTES: u32 = 10;
pub const MIN_TARGET_MINUTES: u32 = 3;
pub const MAX_TARGET_MINUTES: u32 = 30;
pub const DEFAULT_STYLE: &str = "conversational";
pub const DEFAULT_VOICE: &str = "em_santa";

/// `accept` attribute for the upload input.
pub const ACCEPTED_UPLOAD: &str = ".pdf,application/pdf";

/// Options sent along with every script and audio request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptOptions {
    pub target_minutes: u32,
    pub style: String,
    /// `None` means "server default".
    pub voice: Option<String>,
}

impl Default for ScriptOptions {
    fn default() -> Self {
        Self {
            target_minutes: DEFAULT_TARGET_MINUTES,
            style: DEFAULT_STYLE.to_owned(),
            voice: None,
        }
    }
}

impl ScriptOptions {
    /// The voice to request, falling back to [`DEFAULT_VOICE`].
    #[must_use]
    pub fn voice_or_default(&self) -> &str {
        self.voice.as_deref().filter(|v| !v.is_empty()).unwrap_or(DEFAULT_VOICE)
    }

    /// Select a voice; an empty name restores the server default.
    pub fn set_voice(&mut self, voice: &str) {
        self.voice = if voice.is_empty() { None } else { Some(voice.to_owned()) };
    }
}

/// Parse the target-duration input. Unparsable input falls back to the
/// default, numbers outside the supported range are clamped.
#[must_use]
pub fn parse_minutes(raw: &str) -> u32 {
    match raw.trim().parse::<i64>() {
        Ok(n) => {
            let clamped = n.clamp(i64::from(MIN_TARGET_MINUTES), i64::from(MAX_TARGET_MINUTES));
            u32::try_from(clamped).unwrap_or(DEFAULT_TARGET_MINUTES)
        }
        Err(_) => DEFAULT_TARGET_MINUTES,
    }
}

/// Whether a selected file may be uploaded. Only PDF documents are accepted;
/// either the extension or the reported MIME type must say so.
#[must_use]
pub fn is_pdf(file_name: &str, mime: Option<&str>) -> bool {
    let by_ext = file_name
        .rsplit_once('.')
        .is_some_and(|(stem, ext)| !stem.is_empty() && ext.eq_ignore_ascii_case("pdf"));
    let by_mime = mime.is_some_and(|m| m.eq_ignore_ascii_case("application/pdf"));
    by_ext || by_mime
}
