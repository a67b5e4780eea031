use std::fs;
use std::io::Cursor;

use predicates::prelude::*;
use serde_json::{Value, json};
use shapeq::cmd::check::{CheckCommandArgs, run_with_stdin};
use shapeq::io::Format;
use tempfile::tempdir;

fn args(constraint: &str) -> CheckCommandArgs {
    CheckCommandArgs {
        input: None,
        from: None,
        constraint: constraint.to_string(),
        value_type: None,
        seed: None,
        label: None,
    }
}

#[test]
fn reads_jsonl_input_file_and_labels_report() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("rows.jsonl");
    fs::write(&path, "{\"id\":1}\n\n{\"name\":\"x\"}\n").expect("write input");

    let mut command = args("hasProperties(id),notNested");
    command.input = Some(path);
    command.label = Some("rows have ids".to_string());
    let response = run_with_stdin(&command, Cursor::new(""));

    assert_eq!(response.exit_code, 2);
    assert_eq!(response.payload["label"], json!("rows have ids"));
    assert_eq!(response.payload["checked_count"], json!(2));
    assert_eq!(
        response.payload["failures"],
        json!([{
            "path": "$[1]",
            "kind": "rule",
            "message": "hasProperties failed: missing property `id`"
        }])
    );
}

#[test]
fn yaml_input_with_declared_type() {
    let mut command = args("minLength=2");
    command.from = Some(Format::Yaml);
    command.value_type = Some("string".to_string());
    let response = run_with_stdin(&command, Cursor::new("- ab\n- 3\n"));

    assert_eq!(response.exit_code, 2);
    assert_eq!(response.payload["failure_count"], json!(1));
    assert_eq!(response.payload["failures"][0]["kind"], json!("basic_type"));
}

#[test]
fn seeded_runs_are_repeatable() {
    let input: Vec<Value> = (0..50).map(|n| json!(n)).collect();
    let input = serde_json::to_string(&vec![input]).expect("input json");
    let mut command = args("each(number,max=25),checkType=random(3)");
    command.seed = Some(42);

    let first = run_with_stdin(&command, Cursor::new(input.clone()));
    let second = run_with_stdin(&command, Cursor::new(input));
    assert_eq!(first, second);
    assert_eq!(first.payload["seed"], json!(42));

    let unseeded = run_with_stdin(&args("integer"), Cursor::new("[1]"));
    assert!(unseeded.payload.get("seed").is_none());
}

#[test]
fn binary_prints_report_and_exit_code() {
    assert_cmd::cargo::cargo_bin_cmd!("shapeq")
        .args(["check", "--constraint", "integer,min=1", "--label", "ids"])
        .write_stdin("[1, 2, 0]")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("\"failure_count\":1"))
        .stdout(predicate::str::contains("value 0 is below the minimum (min=1)"));

    assert_cmd::cargo::cargo_bin_cmd!("shapeq")
        .args(["check", "--constraint", "'integer'"])
        .write_stdin("[1, 2]")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"matched\":true"));
}

#[test]
fn binary_reports_input_errors_on_stderr() {
    let output = assert_cmd::cargo::cargo_bin_cmd!("shapeq")
        .args(["check", "--constraint", "integer", "--from", "json"])
        .write_stdin("{broken")
        .output()
        .expect("run shapeq");
    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());
    let stderr: Value = serde_json::from_slice(&output.stderr).expect("stderr json");
    assert_eq!(stderr["error"], json!("input_usage_error"));
}

#[test]
fn binary_rejects_unknown_flags() {
    assert_cmd::cargo::cargo_bin_cmd!("shapeq")
        .args(["check", "--nope"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("cli_parse_error"));
}
