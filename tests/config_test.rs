use caption_splitter::config::{Command, Config, ConfigError, LogFormat, LogLevel};
use caption_splitter::{KeywordDictionary, MissingContext};
use rstest::rstest;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_process_args_from_command_line() {
    let args = vec![
        "caption-splitter",
        "--log-level",
        "debug",
        "--log-format",
        "json",
        "process",
        "--input",
        "posts.csv",
        "-o",
        "out.csv",
        "--id-column",
        "post_id",
        "--context-column",
        "text",
        "--no-hashtags",
        "--classify",
        "--include-context",
        "--missing-context",
        "empty",
        "--preview",
        "0",
    ];

    let config = Config::from_args(args).unwrap();

    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.log_format, LogFormat::Json);
    let Command::Process(process) = config.command else {
        panic!("expected the process command");
    };
    assert_eq!(process.input, PathBuf::from("posts.csv"));
    assert_eq!(process.output, Some(PathBuf::from("out.csv")));
    assert_eq!(process.preview, 0);

    let selection = process.column_selection();
    assert_eq!(selection.id_column, "post_id");
    assert_eq!(selection.context_column, "text");

    let options = process.transform_options();
    assert!(!options.include_hashtags);
    assert!(options.classify);
    assert!(options.include_context);
    assert_eq!(options.missing_context, MissingContext::Empty);
}

#[test]
fn test_process_defaults() {
    let config = Config::from_args(["caption-splitter", "process", "-i", "-"]).unwrap();
    let Command::Process(process) = config.command else {
        panic!("expected the process command");
    };
    let selection = process.column_selection();
    assert_eq!(selection.id_column, "shortcode");
    assert_eq!(selection.context_column, "caption");
    assert_eq!(process.preview, 5);

    let options = process.transform_options();
    assert!(options.include_hashtags);
    assert!(!options.classify);
    assert_eq!(options.missing_context, MissingContext::Literal);

    let (dictionary, fallback) = process.resolve_dictionary().unwrap();
    assert_eq!(dictionary, KeywordDictionary::default());
    assert!(fallback.is_none());
}

#[test]
fn test_serve_defaults() {
    let config = Config::from_args(["caption-splitter", "serve"]).unwrap();
    let Command::Serve(serve) = config.command else {
        panic!("expected the serve command");
    };
    assert_eq!(serve.bind.port(), 9700);
}

#[rstest]
#[case(&["caption-splitter", "process", "-i", "a.csv", "--id-column", ""])]
#[case(&["caption-splitter", "process", "-i", "a.csv", "--context-column", " "])]
#[case(&["caption-splitter", "process", "-i", "a.csv", "--id-column", "x", "--context-column", "x"])]
#[case(&["caption-splitter", "serve", "--id-column", "caption"])]
fn test_invalid_column_names_are_rejected(#[case] args: &[&str]) {
    let error = Config::from_args(args.iter().copied()).unwrap_err();
    assert!(matches!(error, ConfigError::InvalidConfig(_)), "{error}");
}

#[test]
fn test_keyword_sources_conflict() {
    let error = Config::from_args([
        "caption-splitter",
        "process",
        "-i",
        "a.csv",
        "--keywords",
        "kw.json",
        "--keywords-json",
        "{}",
    ])
    .unwrap_err();
    assert!(matches!(error, ConfigError::Cli(_)));
}

#[test]
fn test_unknown_missing_context_policy_is_rejected() {
    let error = Config::from_args([
        "caption-splitter",
        "process",
        "-i",
        "a.csv",
        "--missing-context",
        "zero",
    ])
    .unwrap_err();
    assert!(matches!(error, ConfigError::Cli(_)));
}

#[test]
fn test_keywords_file_is_loaded_in_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("keywords.json");
    fs::write(&path, r#"{"Zoo":["lion"],"Art":["paint"]}"#).unwrap();

    let config = Config::from_args([
        "caption-splitter".to_string(),
        "process".to_string(),
        "-i".to_string(),
        "a.csv".to_string(),
        "--classify".to_string(),
        "--keywords".to_string(),
        path.display().to_string(),
    ])
    .unwrap();
    let Command::Process(process) = config.command else {
        panic!("expected the process command");
    };

    let (dictionary, fallback) = process.resolve_dictionary().unwrap();
    assert!(fallback.is_none());
    assert_eq!(dictionary.category_names().collect::<Vec<_>>(), ["Zoo", "Art"]);
}

#[test]
fn test_malformed_inline_keywords_fall_back() {
    let config = Config::from_args([
        "caption-splitter",
        "process",
        "-i",
        "a.csv",
        "--keywords-json",
        "{not json",
    ])
    .unwrap();
    let Command::Process(process) = config.command else {
        panic!("expected the process command");
    };

    let (dictionary, fallback) = process.resolve_dictionary().unwrap();
    assert_eq!(dictionary, KeywordDictionary::default());
    assert!(fallback.is_some());
}

#[test]
fn test_unreadable_keywords_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let config = Config::from_args([
        "caption-splitter".to_string(),
        "process".to_string(),
        "-i".to_string(),
        "a.csv".to_string(),
        "--keywords".to_string(),
        dir.path().join("absent.json").display().to_string(),
    ])
    .unwrap();
    let Command::Process(process) = config.command else {
        panic!("expected the process command");
    };

    assert!(matches!(
        process.resolve_dictionary(),
        Err(ConfigError::KeywordsFile { .. })
    ));
}
