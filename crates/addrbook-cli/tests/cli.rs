use assert_cmd::cargo::cargo_bin_cmd;
use chrono::{Datelike, Local};
use serde_json::Value;
use std::path::Path;
use std::process::Output;
use tempfile::TempDir;

fn command_output(temp: &TempDir, file: &Path, args: &[&str]) -> Output {
    cargo_bin_cmd!("addrbook")
        .env("XDG_CONFIG_HOME", temp.path().join("config"))
        .args(["--file", file.to_str().expect("file path")])
        .args(args)
        .output()
        .expect("run command")
}

fn run_cmd(temp: &TempDir, file: &Path, args: &[&str]) -> String {
    let output = command_output(temp, file, args);
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8(output.stdout).expect("utf8")
}

fn run_cmd_json(temp: &TempDir, file: &Path, args: &[&str]) -> Value {
    let mut full = vec!["--json"];
    full.extend_from_slice(args);
    let stdout = run_cmd(temp, file, &full);
    serde_json::from_str(&stdout).expect("parse json")
}

fn run_cmd_code(temp: &TempDir, file: &Path, args: &[&str]) -> i32 {
    let output = command_output(temp, file, args);
    assert!(!output.status.success(), "command succeeded: {:?}", output);
    output.status.code().expect("exit code")
}

#[test]
fn cli_add_edit_remove_flow() {
    let temp = TempDir::new().expect("temp dir");
    let file = temp.path().join("contacts.json");

    run_cmd(
        &temp,
        &file,
        &[
            "add-contact",
            "--name",
            "Ada Lovelace",
            "--phone",
            "0501234567",
            "--email",
            "ada@example.com",
            "--birthday",
            "10.12.1815",
        ],
    );
    run_cmd(&temp, &file, &["phone", "add", "Ada Lovelace", "0671234567"]);
    run_cmd(&temp, &file, &["phone", "add", "Ada Lovelace", "0931234567"]);
    run_cmd(&temp, &file, &["phone", "rm", "Ada Lovelace", "0"]);
    run_cmd(&temp, &file, &["email", "edit", "Ada Lovelace", "0", "ada@analytical.org"]);

    let detail = run_cmd_json(&temp, &file, &["show", "Ada Lovelace"]);
    assert_eq!(detail["name"], "Ada Lovelace");
    assert_eq!(detail["phones"][0], "0671234567");
    assert_eq!(detail["phones"][1], "0931234567");
    assert_eq!(detail["emails"][0], "ada@analytical.org");
    assert_eq!(detail["birthday"], "10.12.1815");

    run_cmd(&temp, &file, &["birthday", "rm", "Ada Lovelace"]);
    let detail = run_cmd_json(&temp, &file, &["show", "Ada Lovelace"]);
    assert!(detail["birthday"].is_null());

    let text = run_cmd(&temp, &file, &["show", "Ada Lovelace"]);
    assert!(text.contains("phones: [0] 0671234567; [1] 0931234567"));

    run_cmd(&temp, &file, &["delete", "Ada Lovelace"]);
    assert_eq!(run_cmd_code(&temp, &file, &["show", "Ada Lovelace"]), 2);
}

#[test]
fn cli_reports_error_kinds_with_exit_codes() {
    let temp = TempDir::new().expect("temp dir");
    let file = temp.path().join("contacts.json");

    assert_eq!(run_cmd_code(&temp, &file, &["list"]), 2);
    assert_eq!(
        run_cmd_code(&temp, &file, &["add-contact", "--name", "R2-D2"]),
        3
    );

    run_cmd(&temp, &file, &["add-contact", "--name", "Grace"]);
    assert_eq!(
        run_cmd_code(&temp, &file, &["add-contact", "--name", "Grace"]),
        3
    );
    assert_eq!(run_cmd_code(&temp, &file, &["update", "Grace"]), 3);
    assert_eq!(
        run_cmd_code(&temp, &file, &["phone", "add", "Grace", "12345"]),
        3
    );
    assert_eq!(
        run_cmd_code(&temp, &file, &["phone", "rm", "Grace", "zero"]),
        3
    );
    assert_eq!(run_cmd_code(&temp, &file, &["phone", "rm", "Grace", "0"]), 2);
    assert_eq!(run_cmd_code(&temp, &file, &["birthday", "rm", "Grace"]), 2);
    assert_eq!(
        run_cmd_code(&temp, &file, &["birthday", "set", "Grace", "2024-01-01"]),
        3
    );
    assert_eq!(
        run_cmd_code(&temp, &file, &["birthdays", "--days", "0"]),
        3
    );
}

#[test]
fn cli_update_is_atomic() {
    let temp = TempDir::new().expect("temp dir");
    let file = temp.path().join("contacts.json");

    run_cmd(&temp, &file, &["add-contact", "--name", "Grace"]);
    assert_eq!(
        run_cmd_code(
            &temp,
            &file,
            &["update", "Grace", "--phone", "0501234567", "--email", "nope"]
        ),
        3
    );
    let detail = run_cmd_json(&temp, &file, &["show", "Grace"]);
    assert_eq!(detail["phones"].as_array().expect("array").len(), 0);

    run_cmd(
        &temp,
        &file,
        &["update", "Grace", "--phone", "0501234567", "--email", "grace@navy.mil"],
    );
    let list = run_cmd_json(&temp, &file, &["list"]);
    let items = list.as_array().expect("array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["emails"][0], "grace@navy.mil");
}

#[test]
fn cli_lists_birthday_happening_today() {
    let temp = TempDir::new().expect("temp dir");
    let file = temp.path().join("contacts.json");

    let today = Local::now().date_naive();
    let birthday = format!("{:02}.{:02}.2000", today.day(), today.month());
    run_cmd(
        &temp,
        &file,
        &["add-contact", "--name", "Linus", "--birthday", &birthday],
    );
    run_cmd(&temp, &file, &["add-contact", "--name", "Alan"]);

    let upcoming = run_cmd_json(&temp, &file, &["birthdays", "--days", "1"]);
    let items = upcoming.as_array().expect("array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Linus");
    assert_eq!(
        items[0]["birthday_date"],
        today.format("%d.%m.%Y").to_string()
    );
}

#[test]
fn cli_keeps_corrupt_file_aside_before_saving() {
    let temp = TempDir::new().expect("temp dir");
    let file = temp.path().join("contacts.json");
    let original = "{ \"Grace\": { \"phones\": [";
    std::fs::write(&file, original).expect("write");

    assert_eq!(run_cmd_code(&temp, &file, &["list"]), 2);
    assert_eq!(std::fs::read_to_string(&file).expect("read"), original);

    run_cmd(&temp, &file, &["add-contact", "--name", "Ada"]);
    let sidecar = temp.path().join("contacts.json.corrupt");
    assert_eq!(std::fs::read_to_string(&sidecar).expect("read sidecar"), original);

    let list = run_cmd_json(&temp, &file, &["list"]);
    let items = list.as_array().expect("array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Ada");
}
