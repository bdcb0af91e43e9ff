use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("studycast").chain(args.iter().copied())).unwrap()
}

#[test]
fn run_collects_repeated_edits() {
    let cli = parse(&["run", "apuntes.pdf", "--edit", "1=a.txt", "--edit", "3=b.txt"]);
    let Command::Run { file, edits, .. } = cli.command else {
        panic!("expected run");
    };
    assert_eq!(file, "apuntes.pdf");
    assert_eq!(
        edits,
        vec![
            EditArg { section_id: 1, path: "a.txt".into() },
            EditArg { section_id: 3, path: "b.txt".into() },
        ]
    );
}

#[test]
fn malformed_edit_is_a_usage_error() {
    let result = Cli::try_parse_from(["studycast", "run", "apuntes.pdf", "--edit", "intro"]);
    assert!(result.is_err());
}

#[test]
fn script_args_clamp_minutes_and_default_voice() {
    let cli = parse(&["script", "42", "--minutes", "90"]);
    let Command::Script { upload_id, script } = cli.command else {
        panic!("expected script");
    };
    assert_eq!(upload_id, 42);
    let opts = script.options();
    assert_eq!(opts.target_minutes, options::MAX_TARGET_MINUTES);
    assert_eq!(opts.style, options::DEFAULT_STYLE);
    assert_eq!(opts.voice_or_default(), options::DEFAULT_VOICE);
}

#[test]
fn unparsable_minutes_fall_back_to_default() {
    let cli = parse(&["extract", "5", "--minutes", "diez", "--voice", "em_alex"]);
    let Command::Extract { script, .. } = cli.command else {
        panic!("expected extract");
    };
    let opts = script.options();
    assert_eq!(opts.target_minutes, options::DEFAULT_TARGET_MINUTES);
    assert_eq!(opts.voice.as_deref(), Some("em_alex"));
}

#[test]
fn global_flags_precede_command() {
    let cli = parse(&["--api-base", "http://api.test/", "--token", "abc", "download", "7", "--output", "x.wav"]);
    assert_eq!(cli.api_base, "http://api.test/");
    assert_eq!(cli.token.as_deref(), Some("abc"));
    assert!(matches!(cli.command, Command::Download { episode_id: 7, output: Some(ref p) } if p == "x.wav"));
}

#[test]
fn file_name_strips_directories() {
    assert_eq!(file_name("docs/semana1/apuntes.pdf"), "apuntes.pdf");
    assert_eq!(file_name("apuntes.pdf"), "apuntes.pdf");
}
