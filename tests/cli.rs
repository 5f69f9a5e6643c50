use assert_cmd::prelude::*;
use serde_json::Value;
use std::process::Command;

fn semloc() -> Command {
    let bin = assert_cmd::cargo::cargo_bin!("semloc");
    let mut cmd = Command::new(bin);
    cmd.env_remove("RUST_LOG")
        .env_remove("SEMLOC_INCLUDE_HIDDEN")
        .env_remove("SEMLOC_MAX_LISTED");
    cmd
}

fn stdout_json(output: &std::process::Output) -> Value {
    let stdout = String::from_utf8(output.stdout.clone()).expect("utf8 output");
    serde_json::from_str(&stdout).expect("valid json")
}

#[test]
fn find_prints_matches_as_json() {
    let assert = semloc()
        .args([
            "--output",
            "json",
            "find",
            "--snapshot",
            "tests/fixtures/nested_lists.json",
            "--locator",
            "{list} outer {listitem}",
        ])
        .assert()
        .success();

    let value = stdout_json(assert.get_output());
    assert_eq!(value["count"].as_u64(), Some(2));
    let elements = value["elements"].as_array().unwrap();
    assert_eq!(elements[0]["id"].as_str(), Some("c"));
    assert_eq!(elements[1]["id"].as_str(), Some("d"));
    assert_eq!(elements[1]["name"].as_str(), Some("Berlin"));
}

#[test]
fn find_with_no_match_succeeds_and_explains() {
    let assert = semloc()
        .args([
            "--output",
            "json",
            "find",
            "--snapshot",
            "tests/fixtures/settings.yaml",
            "--locator",
            "{form} {checkbox 'Terms'}",
            "--explain",
        ])
        .assert()
        .success();

    let value = stdout_json(assert.get_output());
    assert_eq!(value["count"].as_u64(), Some(0));
    let diagnostic = value["diagnostic"].as_str().unwrap();
    assert!(diagnostic.contains("none have an accessible name matching 'Terms'"));
    assert!(diagnostic.contains("'Newsletter'"));
}

#[test]
fn first_fails_with_hidden_diagnostic() {
    let assert = semloc()
        .args([
            "first",
            "--snapshot",
            "tests/fixtures/settings.yaml",
            "--locator",
            "{menuitem 'Export'}",
        ])
        .assert()
        .failure();

    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert!(stderr.contains("No such element"));
    assert!(stderr.contains("hidden from assistive technology"));
}

#[test]
fn first_honours_include_hidden() {
    let assert = semloc()
        .args([
            "--output",
            "json",
            "first",
            "--snapshot",
            "tests/fixtures/settings.yaml",
            "--locator",
            "{menuitem 'Export'}",
            "--include-hidden",
        ])
        .assert()
        .success();

    let value = stdout_json(assert.get_output());
    assert_eq!(value["elements"][0]["id"].as_str(), Some("export"));
    assert_eq!(value["elements"][0]["hidden"].as_bool(), Some(true));
}

#[test]
fn include_hidden_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("semloc.yaml");
    std::fs::write(&config, "resolve:\n  include_hidden: true\n").unwrap();

    let assert = semloc()
        .args([
            "--config",
            config.to_str().unwrap(),
            "--output",
            "json",
            "find",
            "--snapshot",
            "tests/fixtures/settings.yaml",
            "--locator",
            "{menu} {menuitem}",
        ])
        .assert()
        .success();

    let value = stdout_json(assert.get_output());
    assert_eq!(value["count"].as_u64(), Some(1));
    assert_eq!(value["include_hidden"].as_bool(), Some(true));
}

#[test]
fn parse_reports_syntax_errors() {
    let assert = semloc().args(["parse", "{button checked:maybe}"]).assert().failure();
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert!(stderr.contains("invalid value `maybe` for attribute `checked`"));
}

#[test]
fn parse_prints_canonical_form() {
    let assert = semloc()
        .args(["parse", "{ list \"Cities\" }  outer {listitem selected:TRUE}"])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.starts_with("{list 'Cities'} outer {listitem selected:true}"));
}

#[test]
fn find_below_root_element() {
    let assert = semloc()
        .args([
            "--output",
            "json",
            "find",
            "--snapshot",
            "tests/fixtures/nested_lists.json",
            "--locator",
            "{listitem}",
            "--root",
            "b",
        ])
        .assert()
        .success();

    let value = stdout_json(assert.get_output());
    assert_eq!(value["count"].as_u64(), Some(1));
    assert_eq!(value["elements"][0]["id"].as_str(), Some("c"));
}

#[test]
fn find_with_unknown_root_fails() {
    let assert = semloc()
        .args([
            "find",
            "--snapshot",
            "tests/fixtures/nested_lists.json",
            "--locator",
            "{listitem}",
            "--root",
            "zz",
        ])
        .assert()
        .failure();

    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert!(stderr.contains("unknown element id: zz"));
}

#[test]
fn first_does_not_take_explain() {
    semloc()
        .args([
            "first",
            "--snapshot",
            "tests/fixtures/nested_lists.json",
            "--locator",
            "{listitem}",
            "--explain",
        ])
        .assert()
        .failure();
}

#[test]
fn first_prints_single_match() {
    let assert = semloc()
        .args([
            "--output",
            "json",
            "first",
            "--snapshot",
            "tests/fixtures/nested_lists.json",
            "--locator",
            "{list} outer {listitem}",
        ])
        .assert()
        .success();

    let value = stdout_json(assert.get_output());
    assert_eq!(value["count"].as_u64(), Some(1));
    assert_eq!(value["elements"][0]["id"].as_str(), Some("c"));
}

#[test]
fn info_lists_supported_attributes() {
    let assert = semloc().arg("info").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("Version:"));
    assert!(stdout.contains("Supported Attributes:"));
    assert!(stdout.contains("checked"));
}
