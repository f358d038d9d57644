//! End-to-end tests for the `recor process` command on recognized text.

use assert_cmd::Command;
use predicates::prelude::*;

const SAMPLE: &str = "コンビニよしだ\n2024/01/05 14:32\n小計 ¥1,380\n合計 ¥1,500\nTEL 03-1234-5678\n";

fn write_sample(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("receipt.txt");
    std::fs::write(&path, SAMPLE).unwrap();
    path
}

#[test]
fn process_text_file_outputs_json_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_sample(&dir);

    Command::cargo_bin("recor")
        .unwrap()
        .args(["process", path.to_str().unwrap(), "--from-text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("コンビニよしだ"))
        .stdout(predicate::str::contains("2024/01/05"))
        .stdout(predicate::str::contains("1500"));
}

#[test]
fn process_txt_extension_skips_vision_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_sample(&dir);

    // No API key in the environment: the heuristic path must not need one.
    Command::cargo_bin("recor")
        .unwrap()
        .env_remove("GEMINI_API_KEY")
        .args(["process", path.to_str().unwrap(), "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Store: コンビニよしだ"))
        .stdout(predicate::str::contains("Total: 1500"));
}

#[test]
fn process_image_without_api_key_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("capture.jpg");
    std::fs::write(&path, [0xFF, 0xD8, 0xFF, 0xD9]).unwrap();

    Command::cargo_bin("recor")
        .unwrap()
        .env_remove("GEMINI_API_KEY")
        .args(["process", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("GEMINI_API_KEY"));
}

#[test]
fn process_missing_input_fails() {
    Command::cargo_bin("recor")
        .unwrap()
        .args(["process", "no-such-file.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}
