use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

const PAGE: &str = r#"div { id: "app"; text { "Hello" } style { .a { color: red; } } }
script { {{#app}}->focus(); }
"#;

#[test]
fn compiles_to_stdout() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("page.chtl");
    fs::write(&input, PAGE).unwrap();

    let mut cmd = cargo_bin_cmd!("chtl");
    cmd.current_dir(dir.path()).arg(input.as_os_str());

    let output = cmd.assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();
    assert!(stdout.starts_with("<!DOCTYPE html>\n<html>\n"));
    assert!(stdout.contains(r#"<div id="app">Hello</div>"#));
    assert!(stdout.contains("<style>\n .a { color: red; } \n</style>"));
    assert!(stdout.contains(r##"__CHTL__sel("#app").focus();"##));
}

#[test]
fn writes_output_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("page.chtl");
    let output = dir.path().join("page.html");
    fs::write(&input, "p { text { hi } }").unwrap();

    let mut cmd = cargo_bin_cmd!("chtl");
    cmd.current_dir(dir.path())
        .arg(input.as_os_str())
        .arg(output.as_os_str());
    cmd.assert().success().stdout(predicate::str::is_empty());

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains("<body>\n<p>hi</p>\n</body>"));
}

#[test]
fn missing_source_exits_with_one() {
    let dir = tempdir().unwrap();

    let mut cmd = cargo_bin_cmd!("chtl");
    cmd.current_dir(dir.path()).arg("missing.chtl");
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("missing.chtl"))
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn diagnostics_do_not_change_exit_code() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("broken.chtl");
    fs::write(&input, "div { text { \"ok\" } }\nstyle { .a { }").unwrap();

    let mut cmd = cargo_bin_cmd!("chtl");
    cmd.current_dir(dir.path()).arg(input.as_os_str());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("<div>ok</div>"))
        .stderr(predicate::str::contains("error[unterminated-block] at byte 22"));
}

#[test]
fn json_diagnostics() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("page.chtl");
    fs::write(&input, "[Origin] @Vue { x }").unwrap();

    let mut cmd = cargo_bin_cmd!("chtl");
    cmd.current_dir(dir.path())
        .arg(input.as_os_str())
        .arg("--diagnostics")
        .arg("json");

    let output = cmd.assert().success().get_output().stderr.clone();
    let diagnostics: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let first = &diagnostics[0];
    assert_eq!(first["severity"], "warning");
    assert_eq!(first["kind"], "unknown-origin-kind");
    assert_eq!(first["offset"], 9);
}

#[test]
fn silent_diagnostics() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("page.chtl");
    fs::write(&input, "div { ??? }").unwrap();

    let mut cmd = cargo_bin_cmd!("chtl");
    cmd.current_dir(dir.path())
        .arg(input.as_os_str())
        .arg("--diagnostics")
        .arg("none");
    cmd.assert().success().stderr(predicate::str::is_empty());
}
