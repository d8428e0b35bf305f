use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{Value, json};
use tempfile::{TempDir, tempdir};

fn tester() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_greentic-email-tester"));
    cmd.env_remove("GREENTIC_EMAIL_RENDERER_MAX_DEPTH")
        .env_remove("RUST_LOG");
    cmd
}

fn write_template(dir: &TempDir, value: &Value) -> PathBuf {
    let path = dir.path().join("template.json");
    fs::write(&path, serde_json::to_vec(value).expect("encode")).expect("write template");
    path
}

fn newsletter() -> Value {
    json!({
        "name": "Digest",
        "elements": [
            {"type": "heading", "content": "Hello"},
            {"type": "button", "text": "Read online", "href": "https://example.com/digest"}
        ]
    })
}

fn nested(depth: usize) -> Value {
    let mut node = json!({"type": "text", "content": "deep"});
    for _ in 0..depth {
        node = json!({"type": "container", "children": [node]});
    }
    json!({"elements": [node]})
}

fn stdout_json(output: &[u8]) -> Value {
    serde_json::from_slice(output).expect("json stdout")
}

fn path_arg(path: &Path) -> &str {
    path.to_str().expect("utf-8 path")
}

#[test]
fn validate_accepts_template() {
    let dir = tempdir().expect("tempdir");
    let input = write_template(&dir, &newsletter());
    let assert = tester()
        .args(["validate", "--input", path_arg(&input)])
        .assert()
        .success();
    let outcome = stdout_json(&assert.get_output().stdout);
    assert_eq!(outcome, json!({"valid": true}));
}

#[test]
fn validate_rejects_empty_elements_with_exit_two() {
    let dir = tempdir().expect("tempdir");
    let input = write_template(&dir, &json!({"elements": []}));
    let assert = tester()
        .args(["validate", "--input", path_arg(&input)])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("error:").not());
    let outcome = stdout_json(&assert.get_output().stdout);
    assert_eq!(
        outcome,
        json!({"valid": false, "error": "Template must have at least one element"})
    );
}

#[test]
fn html_prints_document() {
    let dir = tempdir().expect("tempdir");
    let input = write_template(&dir, &newsletter());
    tester()
        .args(["html", "--input", path_arg(&input)])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
        .stdout(predicate::str::contains("<title>Digest</title>"))
        .stdout(predicate::str::contains("Hello"));
}

#[test]
fn html_writes_output_file() {
    let dir = tempdir().expect("tempdir");
    let input = write_template(&dir, &newsletter());
    let output = dir.path().join("out.html");
    tester()
        .args([
            "html",
            "--input",
            path_arg(&input),
            "--output",
            path_arg(&output),
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    let html = fs::read_to_string(&output).expect("read html");
    assert!(html.contains("href=\"https://example.com/digest\""));
    assert!(html.ends_with("</html>"));
}

#[test]
fn html_failure_exits_four() {
    let dir = tempdir().expect("tempdir");
    let input = write_template(&dir, &json!({"elements": "nope"}));
    tester()
        .args(["html", "--input", path_arg(&input)])
        .assert()
        .code(4)
        .stderr(predicate::str::contains(
            "Template must have an elements array",
        ));
}

#[test]
fn text_prints_plain_part() {
    let dir = tempdir().expect("tempdir");
    let input = write_template(&dir, &newsletter());
    tester()
        .args(["text", "--input", path_arg(&input)])
        .assert()
        .success()
        .stdout("Hello\n\nRead online - https://example.com/digest\n");
}

#[test]
fn email_prints_both_parts() {
    let dir = tempdir().expect("tempdir");
    let input = write_template(&dir, &newsletter());
    let assert = tester()
        .args(["email", "--input", path_arg(&input)])
        .assert()
        .success();
    let outcome = stdout_json(&assert.get_output().stdout);
    assert_eq!(outcome["success"], json!(true));
    assert_eq!(
        outcome["text"],
        json!("Hello\n\nRead online - https://example.com/digest")
    );
    assert!(
        outcome["html"]
            .as_str()
            .unwrap_or_default()
            .contains("<title>Digest</title>")
    );
}

#[test]
fn missing_template_exits_one() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("absent.json");
    tester()
        .args(["html", "--input", path_arg(&input)])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("template file failed"));
}

#[test]
fn unparsable_template_exits_one() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("broken.json");
    fs::write(&input, "{ not json").expect("write");
    tester()
        .args(["text", "--input", path_arg(&input)])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("template parse failed"));
}

#[test]
fn max_depth_flag_bounds_nesting() {
    let dir = tempdir().expect("tempdir");
    let input = write_template(&dir, &nested(3));
    tester()
        .args(["--max-depth", "2", "html", "--input", path_arg(&input)])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("maximum depth of 2"));
    tester()
        .args(["--max-depth", "3", "html", "--input", path_arg(&input)])
        .assert()
        .success();
}

#[test]
fn max_depth_from_environment() {
    let dir = tempdir().expect("tempdir");
    let input = write_template(&dir, &nested(3));
    tester()
        .env("GREENTIC_EMAIL_RENDERER_MAX_DEPTH", "2")
        .args(["text", "--input", path_arg(&input)])
        .assert()
        .code(4);
}

#[test]
fn zero_max_depth_is_rejected() {
    let dir = tempdir().expect("tempdir");
    let input = write_template(&dir, &newsletter());
    tester()
        .args(["--max-depth", "0", "html", "--input", path_arg(&input)])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("greater than zero"));
}
