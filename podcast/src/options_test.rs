use super::*;

#[test]
fn parse_minutes_accepts_values_in_range() {
    assert_eq!(parse_minutes("15"), 15);
    assert_eq!(parse_minutes(" 3 "), 3);
    assert_eq!(parse_minutes("30"), 30);
}

#[test]
fn parse_minutes_clamps_out_of_range_values() {
    assert_eq!(parse_minutes("1"), MIN_TARGET_MINUTES);
    assert_eq!(parse_minutes("-4"), MIN_TARGET_MINUTES);
    assert_eq!(parse_minutes("90"), MAX_TARGET_MINUTES);
}

#[test]
fn parse_minutes_falls_back_to_default_on_garbage() {
    assert_eq!(parse_minutes(""), DEFAULT_TARGET_MINUTES);
    assert_eq!(parse_minutes("diez"), DEFAULT_TARGET_MINUTES);
}

#[test]
fn voice_or_default_uses_server_default_when_unset() {
    let mut opts = ScriptOptions::default();
    assert_eq!(opts.voice_or_default(), "em_santa");
    opts.set_voice("ef_dora");
    assert_eq!(opts.voice_or_default(), "ef_dora");
    opts.set_voice("");
    assert_eq!(opts.voice, None);
}

#[test]
fn is_pdf_checks_extension_case_insensitively() {
    assert!(is_pdf("apuntes.pdf", None));
    assert!(is_pdf("APUNTES.PDF", None));
    assert!(!is_pdf("apuntes.txt", Some("text/plain")));
    assert!(!is_pdf("pdf", None));
    assert!(!is_pdf(".pdf", None));
}

#[test]
fn is_pdf_accepts_pdf_mime_without_extension() {
    assert!(is_pdf("scan", Some("application/pdf")));
}
