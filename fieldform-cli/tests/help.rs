use assert_cmd::cargo::cargo_bin_cmd;
use predicates::str::contains;

#[test]
fn help_lists_flags() {
    cargo_bin_cmd!("fieldform")
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("fieldform"))
        .stdout(contains("--fields"))
        .stdout(contains("--stay-open"));
}

#[test]
fn rejects_unparseable_fields_before_starting_the_ui() {
    cargo_bin_cmd!("fieldform")
        .args(["--fields", "{not valid"])
        .assert()
        .failure()
        .stderr(contains("input (fields)"));
}

#[test]
fn rejects_existing_output_without_force() {
    let dir = std::env::temp_dir().join(format!("fieldform-help-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("temp dir");
    let target = dir.join("fields.json");
    std::fs::write(&target, "[]").expect("seed output");

    cargo_bin_cmd!("fieldform")
        .arg("-o")
        .arg(&target)
        .assert()
        .failure()
        .stderr(contains("already exists"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn stdout_stays_clean_when_the_form_cannot_start() {
    cargo_bin_cmd!("fieldform")
        .args(["--fields", r#"[{"name": "id"}]"#])
        .assert()
        .failure()
        .stdout("")
        .stderr(contains("interactive terminal on stderr"));
}

#[test]
fn log_file_receives_logs_instead_of_stderr() {
    let dir = std::env::temp_dir().join(format!("fieldform-log-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("temp dir");
    let log = dir.join("fieldform.log");

    cargo_bin_cmd!("fieldform")
        .env("FIELDFORM_LOG", "debug")
        .arg("--log-file")
        .arg(&log)
        .args(["--fields", r#"[{"name": "id"}]"#])
        .assert()
        .failure()
        .stdout("");

    let contents = std::fs::read_to_string(&log).expect("log file");
    assert!(contents.contains("starting new-field form"));
    let _ = std::fs::remove_dir_all(&dir);
}
