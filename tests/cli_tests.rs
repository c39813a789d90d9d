use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_docrecord")))
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

// -- render --

#[test]
fn render_file_prints_version_record() {
    let expected = std::fs::read_to_string(fixture_path("color.expected.txt")).unwrap();

    let assert = cmd()
        .args([
            "render",
            fixture_path("docs/elm-lang_color/1.0.0.json").as_str(),
            "--number",
            "1.0.0",
        ])
        .assert()
        .success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(output, expected);
}

#[test]
fn render_reads_stdin() {
    let input = std::fs::read_to_string(fixture_path("docs/elm-lang_color/1.0.0.json")).unwrap();
    let expected = std::fs::read_to_string(fixture_path("color.expected.txt")).unwrap();

    let assert = cmd()
        .args(["render", "-n", "1.0.0"])
        .write_stdin(input)
        .assert()
        .success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(output, expected);
}

#[test]
fn render_missing_key_fails() {
    cmd()
        .args(["render", "-n", "1.0.0"])
        .write_stdin(r#"[{"name": "M", "comment": "", "aliases": [], "types": []}]"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to decode documentation"));
}

#[test]
fn render_reject_policy_fails_on_collision() {
    let input = r#"[{"name": "M", "comment": "", "aliases": [], "types": [],
        "values": [{"name": "f", "comment": "say \"\"\"hi\"\"\"", "type": "a"}]}]"#;

    cmd()
        .args(["--delimiters", "reject", "render", "-n", "1.0.0"])
        .write_stdin(input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("delimiter"));
}

#[test]
fn render_unknown_policy_is_rejected() {
    cmd()
        .args(["--delimiters", "quote", "render", "-n", "1.0.0"])
        .write_stdin("[]")
        .assert()
        .failure();
}

// -- build --

#[test]
fn build_writes_collection() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("full-db.json");

    cmd()
        .args([
            "build",
            "-c",
            fixture_path("catalog.toml").as_str(),
            "-d",
            fixture_path("docs").as_str(),
            "-o",
            output.to_str().unwrap(),
        ])
        .assert()
        .success();

    let json = std::fs::read_to_string(&output).unwrap();
    let collection: docrecord::DocsCollection = serde_json::from_str(&json).unwrap();
    let expected = std::fs::read_to_string(fixture_path("color.expected.txt")).unwrap();

    assert_eq!(collection.docs.len(), 1);
    assert_eq!(collection.docs[0].name, "elm-lang/color");
    assert_eq!(collection.docs[0].versions, vec![expected.trim_end().to_string()]);
}

#[test]
fn build_missing_version_file_fails() {
    let dir = TempDir::new().unwrap();
    let catalog = dir.path().join("catalog.toml");
    std::fs::write(
        &catalog,
        "[[library]]\nuser = \"elm-lang\"\nnamespace = \"color\"\nversions = [\"9.9.9\"]\n",
    )
    .unwrap();

    cmd()
        .args([
            "build",
            "-c",
            catalog.to_str().unwrap(),
            "-d",
            fixture_path("docs").as_str(),
            "-o",
            dir.path().join("out.json").to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to render elm-lang/color"));

    assert!(!dir.path().join("out.json").exists());
}
