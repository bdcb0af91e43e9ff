//! The full upload → draft → edit → synthesize sequence, driven through the
//! same [`Wizard`] state machine the dashboard uses.

#[cfg(test)]
#[path = "run_test.rs"]
mod run_test;

use podcast::messages::Action;
use podcast::options::ScriptOptions;
use podcast::types::{Episode, GenerateAudioResponse};
use podcast::{Wizard, WizardStep};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::backend::{Backend, synthesize};
use crate::error::CliError;

/// Replacement text for one script section, from `--edit SECTION_ID=PATH`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionEdit {
    pub section_id: i64,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditArg {
    pub section_id: i64,
    pub path: String,
}

/// Parse `SECTION_ID=PATH`.
pub fn parse_edit(raw: &str) -> Result<EditArg, String> {
    let invalid = || CliError::InvalidEdit(raw.to_owned()).to_string();
    let (id, path) = raw.split_once('=').ok_or_else(invalid)?;
    let section_id = id.trim().parse::<i64>().map_err(|_| invalid())?;
    let path = path.trim();
    if path.is_empty() {
        return Err(invalid());
    }
    Ok(EditArg { section_id, path: path.to_owned() })
}

#[derive(Debug, Clone)]
pub struct RunRequest {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub options: ScriptOptions,
    pub edits: Vec<SectionEdit>,
}

#[derive(Debug, Clone)]
pub struct RunReport {
    pub audio: GenerateAudioResponse,
    pub episodes: Vec<Episode>,
    pub message: String,
}

/// Local id and RFC 3339 creation time for a freshly generated draft.
pub fn draft_stamp() -> (u64, String) {
    let now = OffsetDateTime::now_utc();
    let id = u64::try_from(now.unix_timestamp_nanos() / 1_000_000).unwrap_or_default();
    (id, now.format(&Rfc3339).unwrap_or_default())
}

fn rejected(wizard: &Wizard) -> CliError {
    CliError::Rejected(wizard.message.clone())
}

pub async fn run_wizard<B: Backend>(backend: &B, req: RunRequest) -> Result<RunReport, CliError> {
    let mut wizard = Wizard::new(req.options);

    if !wizard.select_file(&req.file_name, None) {
        return Err(rejected(&wizard));
    }

    let upload = backend.upload(&req.file_name, req.bytes).await;
    if let Err(error) = &upload {
        tracing::warn!(%error, file = %req.file_name, "upload failed");
    }
    let Some(script_req) = wizard.upload_finished(upload) else {
        return Err(rejected(&wizard));
    };
    tracing::info!(upload_id = script_req.upload_id, "{}", wizard.message);

    let draft = backend.generate_script(&script_req).await;
    if let Err(error) = &draft {
        tracing::warn!(%error, "script generation failed");
    }
    let (id, created_at) = draft_stamp();
    wizard.script_finished(draft, id, created_at);
    if wizard.step != WizardStep::DraftReady {
        return Err(rejected(&wizard));
    }
    tracing::info!(
        sections = wizard.script.as_ref().map_or(0, |s| s.sections.len()),
        "{}",
        wizard.message
    );

    for edit in &req.edits {
        if !wizard.start_edit(edit.section_id) {
            return Err(CliError::UnknownSection(edit.section_id));
        }
        wizard.set_draft(&edit.content);
        wizard.save_edit();
        tracing::info!(section_id = edit.section_id, "{}", wizard.message);
    }

    let Some(job) = wizard.begin_synthesis() else {
        return Err(rejected(&wizard));
    };
    tracing::info!("{}", wizard.message);

    let outcome = synthesize(backend, &job).await;
    if let Err(error) = &outcome {
        tracing::warn!(%error, "synthesis failed");
    }
    wizard.synthesis_finished(outcome.as_ref().map(|_| ()).map_err(Clone::clone));

    // The list is refreshed whether or not synthesis succeeded.
    let episodes = backend.episodes().await;

    match outcome {
        Ok(audio) => {
            let episodes = episodes.map_err(|e| CliError::api(Action::ListEpisodes, e))?;
            Ok(RunReport { audio, episodes, message: wizard.message })
        }
        Err(_) => {
            let episodes = episodes.unwrap_or_else(|error| {
                tracing::warn!(%error, "episode refresh failed");
                Vec::new()
            });
            Err(CliError::Synthesis { message: wizard.message, episodes })
        }
    }
}
