//! REST API helpers for communicating with the external podcast backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, ApiError>`. Pages do not inspect the
//! variant; they collapse it into the fixed message of the failed action.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use podcast::ApiError;
use podcast::types::{
    Credentials, Episode, ExtractTextResponse, GenerateAudioRequest, GenerateAudioResponse, LoginResponse,
    ScriptPayload, ScriptRequest, VoicesResponse,
};
#[cfg(feature = "hydrate")]
use podcast::{endpoints, types::UploadResponse};

#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(ApiError::Status(status)) }
}

#[cfg(feature = "hydrate")]
fn network_error(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

#[cfg(feature = "hydrate")]
fn authorized(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match crate::util::auth::auth_header() {
        Some(value) => builder.header("Authorization", &value),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    status_error(resp.status())?;
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn post_json<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    let url = crate::util::config::api_url(path);
    let mut builder = gloo_net::http::Request::post(&url);
    if endpoints::sends_bearer(path) {
        builder = authorized(builder);
    }
    let resp = builder
        .json(body)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;
    read_json(resp).await
}

/// Fetch the voice catalog from `GET /voices`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the response is not OK.
pub async fn fetch_voices() -> Result<VoicesResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = crate::util::config::api_url(endpoints::VOICES);
        let resp = gloo_net::http::Request::get(&url).send().await.map_err(network_error)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch the user's episodes from `GET /episodes`, authenticated when a token is stored.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the response is not OK.
pub async fn fetch_episodes() -> Result<Vec<Episode>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = crate::util::config::api_url(endpoints::EPISODES);
        let resp = authorized(gloo_net::http::Request::get(&url))
            .send()
            .await
            .map_err(network_error)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Upload a document to `POST /uploads` as multipart form data. Browser only:
/// the file handle comes from an `<input type="file">`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the form cannot be built, the request fails, or
/// the response is not OK.
#[cfg(feature = "hydrate")]
pub async fn upload_file(file: &web_sys::File) -> Result<UploadResponse, ApiError> {
    let form = web_sys::FormData::new().map_err(|e| ApiError::Network(format!("{e:?}")))?;
    form.append_with_blob_and_filename(endpoints::UPLOAD_FIELD, file, &file.name())
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;
    let url = crate::util::config::api_url(endpoints::UPLOADS);
    let resp = authorized(gloo_net::http::Request::post(&url))
        .body(form)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;
    read_json(resp).await
}

/// Fetch the text extracted from an upload via `POST /extract-text`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the response is not OK.
pub async fn extract_text(req: &ScriptRequest) -> Result<ExtractTextResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(endpoints::EXTRACT_TEXT, req).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err(ApiError::Unavailable)
    }
}

/// Generate a sectioned script via `POST /generate-script`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the response is not OK.
pub async fn generate_script(req: &ScriptRequest) -> Result<ScriptPayload, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(endpoints::GENERATE_SCRIPT, req).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err(ApiError::Unavailable)
    }
}

/// Submit the reviewed script text via `POST /process`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the response is not OK.
pub async fn process(req: &ScriptRequest) -> Result<ScriptPayload, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(endpoints::PROCESS, req).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err(ApiError::Unavailable)
    }
}

/// Request speech synthesis via `POST /generate-audio`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the response is not OK.
pub async fn generate_audio(req: &GenerateAudioRequest) -> Result<GenerateAudioResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(endpoints::GENERATE_AUDIO, req).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err(ApiError::Unavailable)
    }
}

/// Run the synthesis sequence: `/process` then, if it succeeds, `/generate-audio`.
///
/// # Errors
///
/// Returns the first [`ApiError`] of the sequence.
pub async fn synthesize(job: &podcast::wizard::SynthesisJob) -> Result<GenerateAudioResponse, ApiError> {
    process(&job.process).await?;
    generate_audio(&job.audio).await
}

/// Exchange credentials for an access token via `POST /auth/login`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the credentials are rejected.
pub async fn login(creds: &Credentials) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(endpoints::AUTH_LOGIN, creds).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = creds;
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST /auth/register`. Success is the HTTP status alone.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the response is not OK.
pub async fn register(creds: &Credentials) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = crate::util::config::api_url(endpoints::AUTH_REGISTER);
        let resp = gloo_net::http::Request::post(&url)
            .json(creds)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        status_error(resp.status())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = creds;
        Err(ApiError::Unavailable)
    }
}
