//! Access to the external podcast API.
//!
//! [`Backend`] is the seam between command logic and transport: commands and
//! the wizard runner are generic over it, [`HttpBackend`] talks to the real
//! service over `reqwest`, and tests substitute an in-memory fake.

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;

use podcast::ApiError;
use podcast::endpoints;
use podcast::types::{
    Credentials, Episode, ExtractTextResponse, GenerateAudioRequest, GenerateAudioResponse, LoginResponse,
    ScriptPayload, ScriptRequest, UploadResponse, VoicesResponse,
};
use reqwest::header::AUTHORIZATION;

const PDF_MIME: &str = "application/pdf";

pub trait Backend {
    async fn voices(&self) -> Result<VoicesResponse, ApiError>;
    async fn episodes(&self) -> Result<Vec<Episode>, ApiError>;
    async fn upload(&self, file_name: &str, bytes: Vec<u8>) -> Result<UploadResponse, ApiError>;
    async fn extract_text(&self, req: &ScriptRequest) -> Result<ExtractTextResponse, ApiError>;
    async fn generate_script(&self, req: &ScriptRequest) -> Result<ScriptPayload, ApiError>;
    async fn process(&self, req: &ScriptRequest) -> Result<ScriptPayload, ApiError>;
    async fn generate_audio(&self, req: &GenerateAudioRequest) -> Result<GenerateAudioResponse, ApiError>;
    async fn login(&self, creds: &Credentials) -> Result<LoginResponse, ApiError>;
    async fn register(&self, creds: &Credentials) -> Result<(), ApiError>;
    async fn download_audio(&self, episode_id: i64) -> Result<Vec<u8>, ApiError>;
}

/// `/process` then, only if it succeeded, `/generate-audio`.
pub async fn synthesize<B: Backend>(
    backend: &B,
    job: &podcast::wizard::SynthesisJob,
) -> Result<GenerateAudioResponse, ApiError> {
    backend.process(&job.process).await?;
    backend.generate_audio(&job.audio).await
}

#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    api_base: String,
    token: Option<String>,
}

impl HttpBackend {
    pub fn new(api_base: &str, token: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: api_base.trim_end_matches('/').to_owned(),
            token: token.filter(|t| !t.trim().is_empty()),
        }
    }

    fn url(&self, path: &str) -> String {
        endpoints::url(&self.api_base, path)
    }

    fn authorized(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => builder.header(AUTHORIZATION, endpoints::bearer(token)),
            None => builder,
        }
    }

    fn json_post<B: serde::Serialize + ?Sized>(&self, path: &str, body: &B) -> reqwest::RequestBuilder {
        let builder = self.client.post(self.url(path));
        let builder = if endpoints::sends_bearer(path) { self.authorized(builder) } else { builder };
        builder.json(body)
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: serde::Serialize + ?Sized,
        T: serde::de::DeserializeOwned,
    {
        let resp = self.json_post(path, body).send().await.map_err(network_error)?;
        read_json(resp).await
    }
}

fn network_error(err: reqwest::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

fn check_status(resp: &reqwest::Response) -> Result<(), ApiError> {
    let status = resp.status();
    if status.is_success() { Ok(()) } else { Err(ApiError::Status(status.as_u16())) }
}

async fn read_json<T: serde::de::DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    check_status(&resp)?;
    let bytes = resp.bytes().await.map_err(network_error)?;
    Ok(serde_json::from_slice(&bytes)?)
}

impl Backend for HttpBackend {
    async fn voices(&self) -> Result<VoicesResponse, ApiError> {
        let resp = self.client.get(self.url(endpoints::VOICES)).send().await.map_err(network_error)?;
        read_json(resp).await
    }

    async fn episodes(&self) -> Result<Vec<Episode>, ApiError> {
        let resp = self
            .authorized(self.client.get(self.url(endpoints::EPISODES)))
            .send()
            .await
            .map_err(network_error)?;
        read_json(resp).await
    }

    async fn upload(&self, file_name: &str, bytes: Vec<u8>) -> Result<UploadResponse, ApiError> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.to_owned())
            .mime_str(PDF_MIME)
            .map_err(network_error)?;
        let form = reqwest::multipart::Form::new().part(endpoints::UPLOAD_FIELD, part);
        let resp = self
            .authorized(self.client.post(self.url(endpoints::UPLOADS)))
            .multipart(form)
            .send()
            .await
            .map_err(network_error)?;
        read_json(resp).await
    }

    async fn extract_text(&self, req: &ScriptRequest) -> Result<ExtractTextResponse, ApiError> {
        self.post_json(endpoints::EXTRACT_TEXT, req).await
    }

    async fn generate_script(&self, req: &ScriptRequest) -> Result<ScriptPayload, ApiError> {
        self.post_json(endpoints::GENERATE_SCRIPT, req).await
    }

    async fn process(&self, req: &ScriptRequest) -> Result<ScriptPayload, ApiError> {
        self.post_json(endpoints::PROCESS, req).await
    }

    async fn generate_audio(&self, req: &GenerateAudioRequest) -> Result<GenerateAudioResponse, ApiError> {
        self.post_json(endpoints::GENERATE_AUDIO, req).await
    }

    async fn login(&self, creds: &Credentials) -> Result<LoginResponse, ApiError> {
        self.post_json(endpoints::AUTH_LOGIN, creds).await
    }

    async fn register(&self, creds: &Credentials) -> Result<(), ApiError> {
        let resp = self
            .json_post(endpoints::AUTH_REGISTER, creds)
            .send()
            .await
            .map_err(network_error)?;
        check_status(&resp)
    }

    async fn download_audio(&self, episode_id: i64) -> Result<Vec<u8>, ApiError> {
        let resp = self
            .authorized(self.client.get(self.url(&endpoints::episode_audio(episode_id))))
            .send()
            .await
            .map_err(network_error)?;
        check_status(&resp)?;
        let bytes = resp.bytes().await.map_err(network_error)?;
        Ok(bytes.to_vec())
    }
}
