//! Client-local wizard taking a document from upload to a synthesized episode.
//!
//! DESIGN
//! ======
//! The wizard never performs I/O. Each transition either validates local
//! preconditions and hands back the request the caller must issue, or consumes
//! the outcome of a request the caller already issued. The browser dashboard
//! and the CLI drive the same transitions, so both surfaces share the
//! messages and step rules below.
//!
//! STEPS
//! =====
//! `Idle` → (upload ok) `Uploaded` → (script ok) `DraftReady` →
//! (generate audio) `Generating` → `Idle`. Failures leave the step where it
//! was and only set the message. From file selection until the script
//! outcome arrives the wizard is busy and refuses another file.

#[cfg(test)]
#[path = "wizard_test.rs"]
mod wizard_test;

use crate::error::ApiError;
use crate::messages::{self, Action};
use crate::options::{self, ScriptOptions};
use crate::types::{
    ExtractTextResponse, GenerateAudioRequest, Script, ScriptPayload, ScriptRequest, UploadResponse,
};

/// Which part of the wizard is visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WizardStep {
    /// Waiting for a document.
    #[default]
    Idle,
    /// Document stored server-side; script generation in flight.
    Uploaded,
    /// Script available for review and per-section edits.
    DraftReady,
    /// Synthesis requested; controls are disabled.
    Generating,
}

/// The single section currently open for editing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionEdit {
    pub section_id: i64,
    pub draft: String,
}

/// Requests issued, in order, to turn the reviewed script into an episode.
#[derive(Clone, Debug, PartialEq)]
pub struct SynthesisJob {
    /// `POST /process` body carrying the flattened script as `text_override`.
    pub process: ScriptRequest,
    /// `POST /generate-audio` body, issued once `/process` succeeds.
    pub audio: GenerateAudioRequest,
}

/// Wizard state for one dashboard session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Wizard {
    pub step: WizardStep,
    pub options: ScriptOptions,
    pub upload_id: Option<i64>,
    pub script: Option<Script>,
    pub editing: Option<SectionEdit>,
    pub extracted_text: Option<String>,
    /// An upload or `/generate-script` call is outstanding.
    pub uploading: bool,
    /// Inline status or error line shown under the upload control.
    pub message: String,
}

impl Wizard {
    #[must_use]
    pub fn new(options: ScriptOptions) -> Self {
        Self { options, ..Self::default() }
    }

    /// An upload, script generation or synthesis is in flight.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.uploading || self.step == WizardStep::Generating
    }

    /// Whether the review/edit panel has something to show.
    #[must_use]
    pub fn shows_script(&self) -> bool {
        self.step != WizardStep::Idle && self.script.is_some()
    }

    /// Validate a selected file. Returns `true` when the caller should upload it.
    ///
    /// A valid file starts a fresh session; a rejected one only sets the error
    /// message and leaves every other field unchanged.
    pub fn select_file(&mut self, file_name: &str, mime: Option<&str>) -> bool {
        if self.is_busy() {
            return false;
        }
        if !options::is_pdf(file_name, mime) {
            self.message = messages::NOT_A_PDF.to_owned();
            return false;
        }
        self.step = WizardStep::Idle;
        self.upload_id = None;
        self.script = None;
        self.editing = None;
        self.extracted_text = None;
        self.uploading = true;
        self.message.clear();
        true
    }

    /// Consume the `/uploads` outcome. On success returns the
    /// `/generate-script` body the caller should send next.
    pub fn upload_finished(&mut self, result: Result<UploadResponse, ApiError>) -> Option<ScriptRequest> {
        match result {
            Ok(resp) => {
                self.upload_id = Some(resp.upload_id);
                self.step = WizardStep::Uploaded;
                self.message = messages::UPLOADED.to_owned();
                self.script_request(None)
            }
            Err(_) => {
                self.uploading = false;
                self.message = Action::Upload.failure_message().to_owned();
                None
            }
        }
    }

    /// Consume the `/generate-script` outcome. `id` and `created_at` label the
    /// local draft. A payload naming a different upload is dropped.
    pub fn script_finished(&mut self, result: Result<ScriptPayload, ApiError>, id: u64, created_at: String) {
        match result {
            Ok(payload) if payload.upload_id.is_some_and(|u| Some(u) != self.upload_id) => {}
            Ok(payload) => {
                self.uploading = false;
                self.script = Some(Script::from_payload(payload, id, created_at));
                self.editing = None;
                self.step = WizardStep::DraftReady;
                self.message = messages::SCRIPT_READY.to_owned();
            }
            Err(_) => {
                self.uploading = false;
                self.message = Action::GenerateScript.failure_message().to_owned();
            }
        }
    }

    /// Body for `/extract-text`, available once a document is uploaded.
    #[must_use]
    pub fn extract_request(&self) -> Option<ScriptRequest> {
        self.script_request(None)
    }

    /// Consume the `/extract-text` outcome.
    pub fn extract_finished(&mut self, result: Result<ExtractTextResponse, ApiError>) {
        match result {
            Ok(resp) => {
                self.extracted_text = Some(resp.extracted_text);
                self.message = messages::TEXT_EXTRACTED.to_owned();
            }
            Err(_) => {
                self.message = Action::ExtractText.failure_message().to_owned();
            }
        }
    }

    /// Open a section for editing, replacing any edit in progress.
    pub fn start_edit(&mut self, section_id: i64) -> bool {
        if self.is_busy() {
            return false;
        }
        let Some(content) = self.script.as_ref().and_then(|s| s.section_content(section_id)) else {
            return false;
        };
        self.editing = Some(SectionEdit { section_id, draft: content.to_owned() });
        true
    }

    /// Update the text of the open edit.
    pub fn set_draft(&mut self, text: &str) {
        if let Some(edit) = self.editing.as_mut() {
            edit.draft = text.to_owned();
        }
    }

    /// Write the open edit back into its section.
    pub fn save_edit(&mut self) -> bool {
        let Some(edit) = self.editing.take() else {
            return false;
        };
        let Some(script) = self.script.as_mut() else {
            return false;
        };
        let saved = script.replace_section_content(edit.section_id, &edit.draft);
        if saved {
            self.message = messages::SECTION_SAVED.to_owned();
        }
        saved
    }

    /// Drop the open edit; section content stays as it was.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Start synthesis. Returns the requests to issue, or `None` when a
    /// precondition fails (the message explains which) or synthesis is
    /// already running.
    pub fn begin_synthesis(&mut self) -> Option<SynthesisJob> {
        if self.is_busy() {
            return None;
        }
        let (Some(script), Some(_)) = (self.script.as_ref(), self.upload_id) else {
            self.message = messages::MISSING_SCRIPT_OR_UPLOAD.to_owned();
            return None;
        };
        let full_text = script.flatten();
        let title = script.title.clone();
        let process = self.script_request(Some(full_text.clone()))?;
        let audio = GenerateAudioRequest {
            script_content: full_text,
            title,
            voice: self.options.voice_or_default().to_owned(),
            target_minutes: self.options.target_minutes,
        };
        self.editing = None;
        self.step = WizardStep::Generating;
        self.message = messages::GENERATING.to_owned();
        Some(SynthesisJob { process, audio })
    }

    /// Finish synthesis. Success or failure, the script is cleared and the
    /// wizard returns to `Idle`; the caller refreshes the episode list.
    pub fn synthesis_finished(&mut self, result: Result<(), ApiError>) {
        self.message = match result {
            Ok(()) => messages::EPISODE_CREATED.to_owned(),
            Err(_) => Action::Process.failure_message().to_owned(),
        };
        self.step = WizardStep::Idle;
        self.script = None;
        self.editing = None;
    }

    /// Clear all local state except the chosen options.
    pub fn reset(&mut self) {
        *self = Self::new(self.options.clone());
    }

    fn script_request(&self, text_override: Option<String>) -> Option<ScriptRequest> {
        Some(ScriptRequest {
            upload_id: self.upload_id?,
            text_override,
            target_minutes: self.options.target_minutes,
            style: self.options.style.clone(),
            voice: self.options.voice_or_default().to_owned(),
        })
    }
}
