//! In-memory [`Backend`] for command tests.

use std::cell::RefCell;

use podcast::ApiError;
use podcast::types::{
    Credentials, Episode, EpisodeStatus, ExtractTextResponse, GenerateAudioRequest, GenerateAudioResponse,
    LoginResponse, ScriptPayload, ScriptRequest, ScriptSection, UploadResponse, VoicesResponse,
};

use crate::backend::Backend;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Voices,
    Episodes,
    Upload(String),
    ExtractText(ScriptRequest),
    GenerateScript(ScriptRequest),
    Process(ScriptRequest),
    GenerateAudio(GenerateAudioRequest),
    Login(Credentials),
    Register(Credentials),
    Download(i64),
}

/// Which endpoint should answer with a failure status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailOn {
    Nothing,
    Upload,
    GenerateScript,
    Process,
    GenerateAudio,
    Login,
    Register,
    Episodes,
    Voices,
    Download,
}

pub struct FakeBackend {
    pub fail_on: FailOn,
    pub sections: Vec<ScriptSection>,
    pub episodes: RefCell<Vec<Episode>>,
    pub calls: RefCell<Vec<Call>>,
}

pub fn section(id: i64, title: &str, content: &str) -> ScriptSection {
    ScriptSection { id, title: title.to_owned(), content: content.to_owned(), estimated_duration: 1.5 }
}

impl Default for FakeBackend {
    fn default() -> Self {
        Self {
            fail_on: FailOn::Nothing,
            sections: vec![
                section(1, "Intro", "Hola a todos."),
                section(2, "Desarrollo", "El tema central."),
                section(3, "Cierre", "Gracias por escuchar."),
            ],
            episodes: RefCell::new(Vec::new()),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl FakeBackend {
    pub fn failing(fail_on: FailOn) -> Self {
        Self { fail_on, ..Self::default() }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call, endpoint: FailOn) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(call);
        if self.fail_on == endpoint { Err(ApiError::Status(500)) } else { Ok(()) }
    }
}

impl Backend for FakeBackend {
    async fn voices(&self) -> Result<VoicesResponse, ApiError> {
        self.record(Call::Voices, FailOn::Voices)?;
        Ok(VoicesResponse { voices: vec!["em_alex".to_owned(), "em_santa".to_owned()], kokoro_available: true })
    }

    async fn episodes(&self) -> Result<Vec<Episode>, ApiError> {
        self.record(Call::Episodes, FailOn::Episodes)?;
        Ok(self.episodes.borrow().clone())
    }

    async fn upload(&self, file_name: &str, _bytes: Vec<u8>) -> Result<UploadResponse, ApiError> {
        self.record(Call::Upload(file_name.to_owned()), FailOn::Upload)?;
        Ok(UploadResponse { upload_id: 42 })
    }

    async fn extract_text(&self, req: &ScriptRequest) -> Result<ExtractTextResponse, ApiError> {
        self.record(Call::ExtractText(req.clone()), FailOn::Nothing)?;
        Ok(ExtractTextResponse {
            extracted_text: "Texto del PDF".to_owned(),
            title: Some("Apuntes".to_owned()),
            word_count: Some(3),
            char_count: Some(13),
        })
    }

    async fn generate_script(&self, req: &ScriptRequest) -> Result<ScriptPayload, ApiError> {
        self.record(Call::GenerateScript(req.clone()), FailOn::GenerateScript)?;
        Ok(ScriptPayload {
            upload_id: Some(req.upload_id),
            title: "Apuntes".to_owned(),
            sections: self.sections.clone(),
            target_minutes: req.target_minutes,
            style: req.style.clone(),
            voice: req.voice.clone(),
            ..ScriptPayload::default()
        })
    }

    async fn process(&self, req: &ScriptRequest) -> Result<ScriptPayload, ApiError> {
        self.record(Call::Process(req.clone()), FailOn::Process)?;
        Ok(ScriptPayload::default())
    }

    async fn generate_audio(&self, req: &GenerateAudioRequest) -> Result<GenerateAudioResponse, ApiError> {
        self.record(Call::GenerateAudio(req.clone()), FailOn::GenerateAudio)?;
        let mut episodes = self.episodes.borrow_mut();
        let id = i64::try_from(episodes.len()).unwrap_or_default() + 1;
        episodes.push(Episode { id, title: req.title.clone(), status: EpisodeStatus::Ready, duration_sec: 95 });
        Ok(GenerateAudioResponse { episode_id: Some(id), message: None })
    }

    async fn login(&self, creds: &Credentials) -> Result<LoginResponse, ApiError> {
        self.record(Call::Login(creds.clone()), FailOn::Login)?;
        Ok(LoginResponse { access_token: "tok-123".to_owned() })
    }

    async fn register(&self, creds: &Credentials) -> Result<(), ApiError> {
        self.record(Call::Register(creds.clone()), FailOn::Register)
    }

    async fn download_audio(&self, episode_id: i64) -> Result<Vec<u8>, ApiError> {
        self.record(Call::Download(episode_id), FailOn::Download)?;
        Ok(b"RIFF".to_vec())
    }
}
