mod backend;
mod commands;
mod error;
#[cfg(test)]
mod fake;
mod run;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use std::path::Path;

use clap::{Args, Parser, Subcommand};
use podcast::options::{self, ScriptOptions};

use backend::HttpBackend;
use error::CliError;
use run::{EditArg, RunRequest, SectionEdit};

#[derive(Parser, Debug)]
#[command(name = "studycast", about = "Turn study PDFs into podcast episodes from the terminal")]
struct Cli {
    #[arg(long, env = "STUDYCAST_API_BASE", default_value = "http://localhost:8000")]
    api_base: String,

    #[arg(long, env = "STUDYCAST_TOKEN")]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List synthesis voices.
    Voices,
    /// List your episodes.
    Episodes,
    /// Log in and print the access token.
    Login(CredentialArgs),
    Register(CredentialArgs),
    /// Upload a PDF and print its upload id.
    Upload { file: String },
    /// Print the text extracted from an upload.
    Extract {
        upload_id: i64,
        #[command(flatten)]
        script: ScriptArgs,
    },
    /// Generate and print a sectioned draft.
    Script {
        upload_id: i64,
        #[command(flatten)]
        script: ScriptArgs,
    },
    /// Save an episode's audio.
    Download {
        episode_id: i64,
        #[arg(long)]
        output: Option<String>,
    },
    /// Upload, draft, optionally edit sections, then synthesize.
    Run {
        file: String,
        #[command(flatten)]
        script: ScriptArgs,
        #[arg(long = "edit", value_name = "SECTION_ID=PATH", value_parser = run::parse_edit)]
        edits: Vec<EditArg>,
    },
}

#[derive(Args, Debug)]
struct CredentialArgs {
    #[arg(long)]
    email: String,
    #[arg(long, env = "STUDYCAST_PASSWORD", hide_env_values = true)]
    password: String,
}

#[derive(Args, Debug)]
struct ScriptArgs {
    /// Target length; clamped to 3..=30, anything unparsable means 10.
    #[arg(long, default_value = "10")]
    minutes: String,
    #[arg(long, default_value = options::DEFAULT_STYLE)]
    style: String,
    #[arg(long)]
    voice: Option<String>,
}

impl ScriptArgs {
    fn options(&self) -> ScriptOptions {
        let mut opts = ScriptOptions {
            target_minutes: options::parse_minutes(&self.minutes),
            style: self.style.clone(),
            voice: None,
        };
        if let Some(voice) = &self.voice {
            opts.set_voice(voice);
        }
        opts
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let backend = HttpBackend::new(&cli.api_base, cli.token);
    tracing::debug!(api_base = %cli.api_base, "using api");

    match cli.command {
        Command::Voices => {
            let resp = commands::voices(&backend).await?;
            for line in commands::voice_lines(&resp) {
                println!("{line}");
            }
        }
        Command::Episodes => {
            for episode in commands::episodes(&backend).await? {
                println!("{}", commands::episode_line(&episode));
            }
        }
        Command::Login(args) => {
            println!("{}", commands::login(&backend, &args.email, &args.password).await?);
        }
        Command::Register(args) => {
            println!("{}", commands::register(&backend, &args.email, &args.password).await?);
        }
        Command::Upload { file } => {
            let bytes = read_bytes(&file).await?;
            let upload_id = commands::upload(&backend, &file_name(&file), bytes).await?;
            println!("{upload_id}");
        }
        Command::Extract { upload_id, script } => {
            let resp = commands::extract(&backend, upload_id, &script.options()).await?;
            println!("{}", resp.extracted_text);
        }
        Command::Script { upload_id, script } => {
            let draft = commands::script(&backend, upload_id, &script.options()).await?;
            print!("{}", commands::script_listing(&draft));
        }
        Command::Download { episode_id, output } => {
            let bytes = commands::download(&backend, episode_id).await?;
            let path = output.unwrap_or_else(|| commands::default_audio_path(episode_id));
            tokio::fs::write(&path, bytes).await.map_err(|e| CliError::io(&path, e))?;
            eprintln!("saved {path}");
        }
        Command::Run { file, script, edits } => {
            let mut section_edits = Vec::with_capacity(edits.len());
            for edit in edits {
                let content = tokio::fs::read_to_string(&edit.path)
                    .await
                    .map_err(|e| CliError::io(&edit.path, e))?;
                section_edits.push(SectionEdit { section_id: edit.section_id, content });
            }
            let req = RunRequest {
                file_name: file_name(&file),
                bytes: read_bytes(&file).await?,
                options: script.options(),
                edits: section_edits,
            };
            let result = run::run_wizard(&backend, req).await;
            if let Err(CliError::Synthesis { episodes, .. }) = &result {
                for episode in episodes {
                    println!("{}", commands::episode_line(episode));
                }
            }
            let report = result?;
            eprintln!("{}", report.message);
            if let Some(id) = report.audio.episode_id {
                println!("episode {id}");
            }
            for episode in &report.episodes {
                println!("{}", commands::episode_line(episode));
            }
        }
    }
    Ok(())
}

async fn read_bytes(path: &str) -> Result<Vec<u8>, CliError> {
    tokio::fs::read(path).await.map_err(|e| CliError::io(path, e))
}

fn file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map_or_else(|| path.to_owned(), |name| name.to_string_lossy().into_owned())
}
