use podcast::ApiError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A backend call failed; `message` is the fixed text for the action.
    #[error("{message} ({source})")]
    Api {
        message: &'static str,
        #[source]
        source: ApiError,
    },
    /// The wizard refused to advance; carries its status line.
    #[error("{0}")]
    Rejected(String),
    /// Synthesis failed; `episodes` is the list refreshed afterwards.
    #[error("{message}")]
    Synthesis { message: String, episodes: Vec<podcast::Episode> },
    #[error("script has no section with id {0}")]
    UnknownSection(i64),
    #[error("invalid --edit value `{0}`; expected SECTION_ID=PATH")]
    InvalidEdit(String),
    #[error("cannot access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl CliError {
    pub fn api(action: podcast::Action, source: ApiError) -> Self {
        Self::Api { message: action.failure_message(), source }
    }

    pub fn io(path: &str, source: std::io::Error) -> Self {
        Self::Io { path: path.to_owned(), source }
    }
}
