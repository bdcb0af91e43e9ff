use super::*;

#[test]
fn apply_sets_note_when_kokoro_unavailable() {
    let mut state = VoicesState::default();
    state.apply(Ok(VoicesResponse { voices: vec!["em_santa".to_owned()], kokoro_available: false }));
    assert_eq!(state.voices, vec!["em_santa".to_owned()]);
    assert_eq!(state.note.as_deref(), Some(messages::KOKORO_UNAVAILABLE));
}

#[test]
fn apply_clears_note_when_kokoro_available() {
    let mut state = VoicesState { note: Some("old".to_owned()), ..VoicesState::default() };
    state.apply(Ok(VoicesResponse { voices: vec![], kokoro_available: true }));
    assert_eq!(state.note, None);
}

#[test]
fn apply_failure_reports_fixed_message() {
    let mut state = VoicesState::default();
    state.apply(Err(ApiError::Network("offline".to_owned())));
    assert!(state.voices.is_empty());
    assert_eq!(state.note.as_deref(), Some("No se pudieron cargar las voces"));
}
