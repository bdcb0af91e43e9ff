use super::*;
use crate::fake::{Call, FailOn, FakeBackend};
use podcast::messages;

fn request(file_name: &str) -> RunRequest {
    RunRequest {
        file_name: file_name.to_owned(),
        bytes: b"%PDF-1.7".to_vec(),
        options: ScriptOptions::default(),
        edits: Vec::new(),
    }
}

fn process_text(calls: &[Call]) -> Option<String> {
    calls.iter().find_map(|c| match c {
        Call::Process(req) => req.text_override.clone(),
        _ => None,
    })
}

#[test]
fn parse_edit_accepts_id_and_path() {
    assert_eq!(
        parse_edit("2=notes/intro.txt").unwrap(),
        EditArg { section_id: 2, path: "notes/intro.txt".to_owned() }
    );
}

#[test]
fn parse_edit_rejects_malformed_values() {
    assert!(parse_edit("intro.txt").is_err());
    assert!(parse_edit("x=intro.txt").is_err());
    assert!(parse_edit("3=").is_err());
}

#[test]
fn draft_stamp_is_rfc3339() {
    let (id, created_at) = draft_stamp();
    assert!(id > 0);
    assert!(created_at.contains('T'));
}

#[tokio::test]
async fn non_pdf_is_rejected_before_any_request() {
    let backend = FakeBackend::default();
    let err = run_wizard(&backend, request("notas.docx")).await.unwrap_err();
    assert!(matches!(err, CliError::Rejected(ref m) if m == messages::NOT_A_PDF));
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn full_run_sends_flattened_sections_in_order() {
    let backend = FakeBackend::default();
    let report = run_wizard(&backend, request("apuntes.pdf")).await.unwrap();

    let calls = backend.calls();
    assert!(matches!(calls[0], Call::Upload(ref name) if name == "apuntes.pdf"));
    assert!(matches!(calls[1], Call::GenerateScript(ref r) if r.upload_id == 42 && r.text_override.is_none()));
    assert_eq!(
        process_text(&calls).as_deref(),
        Some("## Intro\n\nHola a todos.\n\n## Desarrollo\n\nEl tema central.\n\n## Cierre\n\nGracias por escuchar.")
    );
    let audio = calls.iter().find_map(|c| match c {
        Call::GenerateAudio(req) => Some(req.clone()),
        _ => None,
    });
    let audio = audio.unwrap();
    assert_eq!(Some(audio.script_content.clone()), process_text(&calls));
    assert_eq!(audio.voice, "em_santa");
    assert_eq!(audio.target_minutes, 10);
    assert_eq!(audio.title, "Apuntes");

    assert_eq!(calls.last(), Some(&Call::Episodes));
    assert_eq!(report.episodes.len(), 1);
    assert_eq!(report.audio.episode_id, Some(1));
    assert_eq!(report.message, messages::EPISODE_CREATED);
}

#[tokio::test]
async fn edits_replace_only_the_named_section() {
    let backend = FakeBackend::default();
    let mut req = request("apuntes.pdf");
    req.edits.push(SectionEdit { section_id: 2, content: "Nuevo desarrollo.".to_owned() });
    run_wizard(&backend, req).await.unwrap();

    assert_eq!(
        process_text(&backend.calls()).as_deref(),
        Some("## Intro\n\nHola a todos.\n\n## Desarrollo\n\nNuevo desarrollo.\n\n## Cierre\n\nGracias por escuchar.")
    );
}

#[tokio::test]
async fn edit_of_unknown_section_stops_before_synthesis() {
    let backend = FakeBackend::default();
    let mut req = request("apuntes.pdf");
    req.edits.push(SectionEdit { section_id: 99, content: "x".to_owned() });
    let err = run_wizard(&backend, req).await.unwrap_err();

    assert!(matches!(err, CliError::UnknownSection(99)));
    assert!(process_text(&backend.calls()).is_none());
}

#[tokio::test]
async fn upload_failure_reports_fixed_message() {
    let backend = FakeBackend::failing(FailOn::Upload);
    let err = run_wizard(&backend, request("apuntes.pdf")).await.unwrap_err();
    assert_eq!(err.to_string(), messages::UPLOAD_FAILED);
    assert_eq!(backend.calls().len(), 1);
}

#[tokio::test]
async fn script_failure_reports_fixed_message() {
    let backend = FakeBackend::failing(FailOn::GenerateScript);
    let err = run_wizard(&backend, request("apuntes.pdf")).await.unwrap_err();
    assert_eq!(err.to_string(), messages::SCRIPT_FAILED);
}

#[tokio::test]
async fn process_failure_skips_audio_but_refreshes_episodes() {
    let backend = FakeBackend::failing(FailOn::Process);
    let err = run_wizard(&backend, request("apuntes.pdf")).await.unwrap_err();

    assert_eq!(err.to_string(), messages::PROCESS_FAILED);
    let calls = backend.calls();
    assert!(!calls.iter().any(|c| matches!(c, Call::GenerateAudio(_))));
    assert_eq!(calls.last(), Some(&Call::Episodes));
    assert!(matches!(err, CliError::Synthesis { ref episodes, .. } if episodes.is_empty()));
}

#[tokio::test]
async fn audio_failure_reports_process_message_and_refreshes_episodes() {
    let backend = FakeBackend::failing(FailOn::GenerateAudio);
    let err = run_wizard(&backend, request("apuntes.pdf")).await.unwrap_err();
    assert_eq!(err.to_string(), messages::PROCESS_FAILED);
    assert_eq!(backend.calls().last(), Some(&Call::Episodes));
}

#[tokio::test]
async fn options_flow_into_every_request() {
    let backend = FakeBackend::default();
    let mut req = request("apuntes.pdf");
    req.options.target_minutes = 25;
    req.options.style = "formal".to_owned();
    req.options.set_voice("em_alex");
    run_wizard(&backend, req).await.unwrap();

    for call in backend.calls() {
        match call {
            Call::GenerateScript(r) | Call::Process(r) => {
                assert_eq!((r.target_minutes, r.style.as_str(), r.voice.as_str()), (25, "formal", "em_alex"));
            }
            Call::GenerateAudio(r) => assert_eq!((r.target_minutes, r.voice.as_str()), (25, "em_alex")),
            _ => {}
        }
    }
}

#[tokio::test]
async fn failed_synthesis_still_returns_refreshed_list() {
    let backend = FakeBackend::failing(FailOn::GenerateAudio);
    backend.episodes.borrow_mut().push(Episode {
        id: 3,
        title: "Anterior".to_owned(),
        status: podcast::EpisodeStatus::Ready,
        duration_sec: 60,
    });
    let err = run_wizard(&backend, request("apuntes.pdf")).await.unwrap_err();
    let CliError::Synthesis { message, episodes } = err else {
        panic!("expected synthesis error");
    };
    assert_eq!(message, messages::PROCESS_FAILED);
    assert_eq!(episodes.iter().map(|e| e.id).collect::<Vec<_>>(), vec![3]);
}
