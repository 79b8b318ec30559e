use assert_fs::prelude::*;
use assert_fs::TempDir;

use subcase::config::Config;
use subcase::error::SubcaseError;
use subcase::workflow::Workflow;
use subcase::{normalize_all, parse, serialize};

const EPISODE: &str = "1\r\n00:00:01,000 --> 00:00:03,000\r\n[THUNDER RUMBLES]\r\n\r\n2\r\n00:00:03,500 --> 00:00:06,000\r\nI TOLD KEVIN WE'D MEET\r\nIN NEW YORK ON MONDAY.\r\n\r\n3\r\n00:00:06,500 --> 00:00:08,000\r\n<i>WHERE?</i>\r\nDANTE'S COVE!\r\n\r\n";

#[test]
fn test_parse_normalize_serialize_pipeline() {
    let records = parse(EPISODE);
    assert_eq!(records.len(), 3);

    let normalized = normalize_all(&records);
    let output = serialize(&normalized, true);

    assert_eq!(
        output,
        "1\n00:00:01,000 --> 00:00:03,000\n\n\n\
         2\n00:00:03,500 --> 00:00:06,000\nI told Kevin we'd meet in New York on Monday.\n\n\
         3\n00:00:06,500 --> 00:00:08,000\nWhere?\nDante's Cove!\n\n"
    );
}

#[test]
fn test_round_trip_preserves_records() {
    let records = parse(EPISODE);
    assert_eq!(parse(&serialize(&records, false)), records);
}

#[tokio::test]
async fn test_format_file_writes_prefixed_copy() {
    let temp = TempDir::new().unwrap();
    let input = temp.child("episode.srt");
    input.write_str(EPISODE).unwrap();

    let workflow = Workflow::new(Config::default()).unwrap();
    let report = workflow
        .format_file(input.path(), None::<&std::path::Path>)
        .await
        .unwrap();

    assert_eq!(report.captions, 3);
    assert_eq!(report.emptied, 1);
    assert_eq!(report.output, temp.path().join("formatted_episode.srt"));

    let written = std::fs::read_to_string(&report.output).unwrap();
    assert!(written.contains("I told Kevin we'd meet in New York on Monday."));
    assert!(!written.contains("THUNDER"));

    // Source file is untouched
    assert_eq!(std::fs::read_to_string(input.path()).unwrap(), EPISODE);
}

#[tokio::test]
async fn test_format_file_with_raw_text() {
    let temp = TempDir::new().unwrap();
    let input = temp.child("episode.srt");
    input.write_str(EPISODE).unwrap();
    let out = temp.child("out");

    let mut config = Config::default();
    config.output.use_normalized = false;
    let workflow = Workflow::new(config).unwrap();
    let report = workflow.format_file(input.path(), Some(out.path())).await.unwrap();

    let written = std::fs::read_to_string(&report.output).unwrap();
    assert_eq!(parse(&written), parse(EPISODE));
}

#[tokio::test]
async fn test_missing_file_is_reported() {
    let temp = TempDir::new().unwrap();
    let workflow = Workflow::new(Config::default()).unwrap();

    let result = workflow
        .format_file(temp.path().join("absent.srt"), None::<&std::path::Path>)
        .await;
    assert!(matches!(result, Err(SubcaseError::FileNotFound(_))));
}

#[tokio::test]
async fn test_file_without_captions_is_rejected() {
    let temp = TempDir::new().unwrap();
    let input = temp.child("empty.srt");
    input.write_str("just some notes\nwithout any timecodes\n").unwrap();

    let workflow = Workflow::new(Config::default()).unwrap();
    let result = workflow.format_file(input.path(), None::<&std::path::Path>).await;
    assert!(matches!(result, Err(SubcaseError::NoCaptions(_))));
}

#[tokio::test]
async fn test_non_srt_extension_is_rejected() {
    let temp = TempDir::new().unwrap();
    let input = temp.child("episode.vtt");
    input.write_str(EPISODE).unwrap();

    let workflow = Workflow::new(Config::default()).unwrap();
    let result = workflow.format_file(input.path(), None::<&std::path::Path>).await;
    assert!(matches!(result, Err(SubcaseError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_invalid_utf8_is_decoded_lossily() {
    let temp = TempDir::new().unwrap();
    let input = temp.child("latin1.srt");
    input
        .write_binary(b"1\n00:00:01,000 --> 00:00:02,000\nCAF\xc9 TIME\n")
        .unwrap();

    let workflow = Workflow::new(Config::default()).unwrap();
    let records = workflow.inspect_file(input.path(), true).await.unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].normalized_text.as_deref(), Some("Caf\u{fffd} time"));
}

#[tokio::test]
async fn test_format_directory_mirrors_tree_and_skips_outputs() {
    let temp = TempDir::new().unwrap();
    temp.child("a.srt").write_str(EPISODE).unwrap();
    temp.child("season1/b.SRT").write_str(EPISODE).unwrap();
    temp.child("season1/notes.txt").write_str("ignore me").unwrap();
    temp.child("formatted_old.srt").write_str(EPISODE).unwrap();
    temp.child("broken.srt").write_str("no captions here").unwrap();
    let out = temp.child("out");

    let workflow = Workflow::new(Config::default()).unwrap();
    let reports = workflow
        .format_directory(temp.path(), Some(out.path()))
        .await
        .unwrap();

    assert_eq!(reports.len(), 2);
    assert!(out.path().join("formatted_a.srt").is_file());
    assert!(out.path().join("season1").join("formatted_b.SRT").is_file());
    assert!(!out.path().join("formatted_formatted_old.srt").exists());
    assert!(!out.path().join("formatted_broken.srt").exists());
}

#[tokio::test]
async fn test_format_directory_rejects_file_path() {
    let temp = TempDir::new().unwrap();
    let input = temp.child("a.srt");
    input.write_str(EPISODE).unwrap();

    let workflow = Workflow::new(Config::default()).unwrap();
    let result = workflow
        .format_directory(input.path(), None::<&std::path::Path>)
        .await;
    assert!(matches!(result, Err(SubcaseError::Config(_))));
}

#[test]
fn test_config_file_extends_lexicon() {
    let temp = TempDir::new().unwrap();
    let config_file = temp.child("subcase.toml");
    config_file
        .write_str(
            r#"
            [lexicon]
            always_uppercase = ["nypd"]
            proper_nouns = ["Times Square"]

            [output]
            file_prefix = "clean_"
            "#,
        )
        .unwrap();

    let config = Config::from_file(config_file.path()).unwrap();
    let workflow = Workflow::new(config).unwrap();

    assert_eq!(
        workflow.format_text("THE NYPD CLOSED TIMES SQUARE ON FRIDAY"),
        "The NYPD closed Times Square on Friday"
    );
    assert_eq!(workflow.config().output.file_prefix, "clean_");
}
