//! Fixed user-facing messages.
//!
//! Every failure of a given action renders the same string regardless of the
//! underlying cause.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

pub const UPLOAD_FAILED: &str = "Error subiendo archivo";
pub const SCRIPT_FAILED: &str = "No se pudo generar script";
pub const EXTRACT_FAILED: &str = "No se pudo extraer el texto";
pub const PROCESS_FAILED: &str = "Error procesando";
pub const LOGIN_FAILED: &str = "Error al iniciar sesión. Verifica tus credenciales.";
pub const REGISTER_FAILED: &str = "No se pudo registrar";
pub const EPISODES_FAILED: &str = "No se pudieron cargar los episodios";
pub const VOICES_FAILED: &str = "No se pudieron cargar las voces";
pub const DOWNLOAD_FAILED: &str = "No se pudo descargar el audio";

pub const NOT_A_PDF: &str = "Solo se permiten archivos PDF";
pub const MISSING_SCRIPT_OR_UPLOAD: &str = "Falta script o upload";
pub const MISSING_CREDENTIALS: &str = "Completá email y contraseña";

pub const UPLOADED: &str = "Archivo subido. Generando script con secciones...";
pub const SCRIPT_READY: &str = "Script generado con secciones. Podés editar cada sección individualmente.";
pub const TEXT_EXTRACTED: &str = "Texto extraído. Revisalo antes de generar el audio.";
pub const SECTION_SAVED: &str = "Sección actualizada";
pub const GENERATING: &str = "Generando audio...";
pub const EPISODE_CREATED: &str = "Episodio creado";
pub const REGISTERED: &str = "Registro ok. Ir a login.";
pub const KOKORO_UNAVAILABLE: &str =
    "Nota: Kokoro TTS no está disponible. Se está usando pyttsx3 como alternativa.";

/// A user-initiated call against the external API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Upload,
    GenerateScript,
    ExtractText,
    Process,
    GenerateAudio,
    Login,
    Register,
    ListEpisodes,
    ListVoices,
    DownloadAudio,
}

impl Action {
    /// The single message shown when this action fails for any reason.
    #[must_use]
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::Upload => UPLOAD_FAILED,
            Self::GenerateScript => SCRIPT_FAILED,
            Self::ExtractText => EXTRACT_FAILED,
            Self::Process | Self::GenerateAudio => PROCESS_FAILED,
            Self::Login => LOGIN_FAILED,
            Self::Register => REGISTER_FAILED,
            Self::ListEpisodes => EPISODES_FAILED,
            Self::ListVoices => VOICES_FAILED,
            Self::DownloadAudio => DOWNLOAD_FAILED,
        }
    }
}
