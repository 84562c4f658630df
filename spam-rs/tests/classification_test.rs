use spam_rs::bayes::Label;
use spam_rs::config::{Config, OutputFormat};
use spam_rs::pipeline;
use spam_rs::tokenizer::HeaderSkip;
use spam_rs::SpamError;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Helper to write a message file under the corpus root
fn write_message(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Two spam, two ham and three test messages
fn sample_corpus() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    write_message(root, "train/spam/1.txt", "Subject: cheap\nwin money now\n");
    write_message(root, "train/spam/2.txt", "Subject: offer\nwin a prize now\n");
    write_message(root, "train/ham/1.txt", "Subject: lunch\nhello friend see you at lunch\n");
    write_message(root, "train/ham/2.txt", "Subject: notes\nmeeting notes for the team\n");

    write_message(root, "test/3.txt", "Subject: x\nwin money\n");
    write_message(root, "test/10.txt", "Subject: x\nhello friend\n");
    write_message(root, "test/2.txt", "Subject: x\nunknownword\n");

    dir
}

fn config_for(root: &Path) -> Config {
    let mut config = Config::default();
    config
        .data
        .set_base_dir(root.to_str().unwrap())
        .unwrap();
    config
}

#[tokio::test]
async fn test_pipeline_classifies_in_numeric_order() {
    let corpus = sample_corpus();
    let predictions = pipeline::run(&config_for(corpus.path())).await.unwrap();

    let result: Vec<(&str, Label)> = predictions
        .iter()
        .map(|p| (p.file_name.as_str(), p.label))
        .collect();

    assert_eq!(
        result,
        vec![
            ("2.txt", Label::Ham),
            ("3.txt", Label::Spam),
            ("10.txt", Label::Ham),
        ]
    );
}

#[tokio::test]
async fn test_pipeline_text_output() {
    let corpus = sample_corpus();
    let config = config_for(corpus.path());
    let predictions = pipeline::run(&config).await.unwrap();

    let mut out = Vec::new();
    pipeline::write_predictions(&mut out, &predictions, OutputFormat::Text).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "2.txt ham\n3.txt spam\n10.txt ham\n"
    );
}

#[tokio::test]
async fn test_pipeline_with_first_line_skip() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    // Long subjects would leak into the features with a fixed skip
    write_message(root, "train/spam/1.txt", "Subject: meeting\nprize\n");
    write_message(root, "train/ham/1.txt", "Subject: prize\nmeeting\n");
    write_message(root, "test/1.txt", "Subject: whatever\nprize\n");

    let mut config = config_for(root);
    config.tokenizer.header_skip = HeaderSkip::FirstLine;

    let predictions = pipeline::run(&config).await.unwrap();
    assert_eq!(predictions[0].label, Label::Spam);
}

#[tokio::test]
async fn test_pipeline_empty_class_is_degenerate() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    fs::create_dir_all(root.join("train/spam")).unwrap();
    write_message(root, "train/ham/1.txt", "Subject: hi\nhello\n");
    write_message(root, "test/1.txt", "Subject: hi\nhello\n");

    let err = pipeline::run(&config_for(root)).await.unwrap_err();
    assert!(matches!(err, SpamError::DegenerateCorpus { class: Label::Spam }));
}

#[tokio::test]
async fn test_pipeline_missing_test_dir() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    write_message(root, "train/spam/1.txt", "Subject: hi\nwin\n");
    write_message(root, "train/ham/1.txt", "Subject: hi\nhello\n");

    let err = pipeline::run(&config_for(root)).await.unwrap_err();
    assert!(matches!(err, SpamError::Storage { .. }));
}

#[tokio::test]
async fn test_pipeline_unrankable_test_file() {
    let corpus = sample_corpus();
    write_message(corpus.path(), "test/notes", "Subject: x\nwin\n");

    let err = pipeline::run(&config_for(corpus.path())).await.unwrap_err();
    assert!(matches!(err, SpamError::UnrankableFileName(name) if name == "notes"));
}

#[test]
fn test_cli_prints_predictions() {
    let corpus = sample_corpus();

    let output = Command::new(env!("CARGO_BIN_EXE_spam-rs"))
        .arg(corpus.path())
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run spam-rs");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "2.txt ham\n3.txt spam\n10.txt ham\n"
    );
}

#[test]
fn test_cli_json_format() {
    let corpus = sample_corpus();

    let output = Command::new(env!("CARGO_BIN_EXE_spam-rs"))
        .arg(corpus.path())
        .args(["--format", "json"])
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run spam-rs");

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1]["file"], "3.txt");
    assert_eq!(lines[1]["label"], "spam");
}

#[test]
fn test_cli_config_file() {
    let corpus = sample_corpus();
    let config_path = corpus.path().join("spam-rs.toml");
    fs::write(
        &config_path,
        format!(
            "[data]\nbase_dir = {:?}\n\n[output]\nformat = \"text\"\n",
            corpus.path().to_str().unwrap()
        ),
    )
    .unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_spam-rs"))
        .arg("--config")
        .arg(&config_path)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run spam-rs");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "2.txt ham\n3.txt spam\n10.txt ham\n"
    );
}

#[test]
fn test_cli_fails_on_degenerate_corpus() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    write_message(root, "train/spam/1.txt", "Subject: hi\nwin\n");
    fs::create_dir_all(root.join("train/ham")).unwrap();
    write_message(root, "test/1.txt", "Subject: hi\nwin\n");

    let output = Command::new(env!("CARGO_BIN_EXE_spam-rs"))
        .arg(root)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run spam-rs");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Degenerate corpus"));
}
