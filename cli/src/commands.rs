//! Single-request commands. Each returns data; `main` does the printing.

#[cfg(test)]
#[path = "commands_test.rs"]
mod commands_test;

use podcast::messages::{self, Action};
use podcast::options::{self, ScriptOptions};
use podcast::types::{Credentials, Episode, ExtractTextResponse, ScriptRequest, VoicesResponse};
use podcast::Script;

use crate::backend::Backend;
use crate::error::CliError;
use crate::run::draft_stamp;

pub async fn voices<B: Backend>(backend: &B) -> Result<VoicesResponse, CliError> {
    backend.voices().await.map_err(|e| CliError::api(Action::ListVoices, e))
}

pub fn voice_lines(resp: &VoicesResponse) -> Vec<String> {
    let mut lines: Vec<String> = resp
        .voices
        .iter()
        .map(|v| if v == options::DEFAULT_VOICE { format!("{v} (default)") } else { v.clone() })
        .collect();
    if !resp.kokoro_available {
        lines.push(messages::KOKORO_UNAVAILABLE.to_owned());
    }
    lines
}

pub async fn episodes<B: Backend>(backend: &B) -> Result<Vec<Episode>, CliError> {
    backend.episodes().await.map_err(|e| CliError::api(Action::ListEpisodes, e))
}

pub fn episode_line(episode: &Episode) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        episode.id,
        episode.status.label(),
        episode.duration_label(),
        episode.title
    )
}

/// Log in and return the access token.
pub async fn login<B: Backend>(backend: &B, email: &str, password: &str) -> Result<String, CliError> {
    let creds = Credentials::new(email, password).map_err(|m| CliError::Rejected(m.to_owned()))?;
    let resp = backend.login(&creds).await.map_err(|e| CliError::api(Action::Login, e))?;
    if resp.access_token.trim().is_empty() {
        return Err(CliError::Rejected(messages::LOGIN_FAILED.to_owned()));
    }
    Ok(resp.access_token)
}

pub async fn register<B: Backend>(backend: &B, email: &str, password: &str) -> Result<&'static str, CliError> {
    let creds = Credentials::new(email, password).map_err(|m| CliError::Rejected(m.to_owned()))?;
    backend.register(&creds).await.map_err(|e| CliError::api(Action::Register, e))?;
    Ok(messages::REGISTERED)
}

pub async fn upload<B: Backend>(backend: &B, file_name: &str, bytes: Vec<u8>) -> Result<i64, CliError> {
    if !options::is_pdf(file_name, None) {
        return Err(CliError::Rejected(messages::NOT_A_PDF.to_owned()));
    }
    let resp = backend
        .upload(file_name, bytes)
        .await
        .map_err(|e| CliError::api(Action::Upload, e))?;
    Ok(resp.upload_id)
}

pub async fn extract<B: Backend>(
    backend: &B,
    upload_id: i64,
    options: &ScriptOptions,
) -> Result<ExtractTextResponse, CliError> {
    backend
        .extract_text(&request_for(upload_id, options))
        .await
        .map_err(|e| CliError::api(Action::ExtractText, e))
}

/// Generate a draft script for an existing upload.
pub async fn script<B: Backend>(backend: &B, upload_id: i64, options: &ScriptOptions) -> Result<Script, CliError> {
    let payload = backend
        .generate_script(&request_for(upload_id, options))
        .await
        .map_err(|e| CliError::api(Action::GenerateScript, e))?;
    let (id, created_at) = draft_stamp();
    Ok(Script::from_payload(payload, id, created_at))
}

pub async fn download<B: Backend>(backend: &B, episode_id: i64) -> Result<Vec<u8>, CliError> {
    backend.download_audio(episode_id).await.map_err(|e| CliError::api(Action::DownloadAudio, e))
}

pub fn default_audio_path(episode_id: i64) -> String {
    format!("episode-{episode_id}.wav")
}

fn request_for(upload_id: i64, options: &ScriptOptions) -> ScriptRequest {
    ScriptRequest {
        upload_id,
        text_override: None,
        target_minutes: options.target_minutes,
        style: options.style.clone(),
        voice: options.voice_or_default().to_owned(),
    }
}

/// Render a draft the way the dashboard lists it: one block per section.
pub fn script_listing(script: &Script) -> String {
    let mut out = format!("# {}\n", script.title);
    for section in &script.sections {
        out.push_str(&format!(
            "\n[{}] {} (~{:.1} min)\n{}\n",
            section.id, section.title, section.estimated_duration, section.content
        ));
    }
    out
}
