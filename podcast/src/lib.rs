//! Shared model for the StudyPodcast front-end and CLI.
//!
//! This crate owns the JSON shapes exchanged with the external podcast API,
//! the endpoint paths, the fixed user-facing messages, and the client-local
//! wizard that walks a document from upload to a synthesized episode. It does
//! no I/O: the `client` crate issues requests with `gloo-net`, the `cli` crate
//! with `reqwest`, and both feed results back into [`wizard::Wizard`].

pub mod endpoints;
pub mod error;
pub mod messages;
pub mod options;
pub mod script;
pub mod types;
pub mod wizard;

pub use error::ApiError;
pub use messages::Action;
pub use types::{Episode, EpisodeStatus, Script, ScriptSection};
pub use wizard::{Wizard, WizardStep};
