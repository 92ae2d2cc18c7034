// tests/cli_run.rs - End-to-end runs of the binary against the real filesystem
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fileseam"))
        .args(args)
        .arg("--no-color")
        .current_dir(dir)
        .output()
        .unwrap()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

fn temp() -> TempDir {
    tempfile::tempdir().unwrap()
}

#[test]
fn test_writes_both_files() {
    let d = temp();
    let out = run_in(d.path(), &[]);
    assert_eq!(out.status.code(), Some(0), "stderr: {}", stderr(&out));

    assert_eq!(fs::read_to_string(d.path().join("testFile.txt")).unwrap(), "yay!!");
    assert_eq!(
        fs::read_to_string(d.path().join("masterTestFile.txt")).unwrap(),
        "hooray!!"
    );
    assert!(stderr(&out).contains("wrote testFile.txt"));
    assert!(stderr(&out).contains("wrote masterTestFile.txt"));
}

#[test]
fn test_second_run_fails_create() {
    let d = temp();
    assert!(run_in(d.path(), &[]).status.success());

    let out = run_in(d.path(), &[]);
    assert_eq!(out.status.code(), Some(2));
    assert!(stderr(&out).contains("CreateFile failed for testFile.txt"));
    assert_eq!(fs::read_to_string(d.path().join("testFile.txt")).unwrap(), "yay!!");
}

#[test]
fn test_existing_master_file_stops_after_first_job() {
    let d = temp();
    fs::write(d.path().join("masterTestFile.txt"), "keep").unwrap();

    let out = run_in(d.path(), &[]);
    assert_eq!(out.status.code(), Some(2));
    assert!(stderr(&out).contains("masterTestFile.txt"));
    assert_eq!(fs::read_to_string(d.path().join("testFile.txt")).unwrap(), "yay!!");
    assert_eq!(
        fs::read_to_string(d.path().join("masterTestFile.txt")).unwrap(),
        "keep"
    );
}

#[test]
fn test_verbose_logs_primitive_calls() {
    let d = temp();
    let out = run_in(d.path(), &["--verbose"]);
    assert!(out.status.success());
    let err = stderr(&out);
    assert!(err.contains("created testFile.txt"));
    assert!(err.contains("wrote 8 bytes to masterTestFile.txt"));
    assert!(err.contains("closed masterTestFile.txt"));
}

#[test]
fn test_quiet_suppresses_info() {
    let d = temp();
    let out = run_in(d.path(), &["--quiet"]);
    assert!(out.status.success());
    assert!(stderr(&out).is_empty());
}

#[test]
fn test_config_file_sets_verbose() {
    let d = temp();
    fs::write(d.path().join("fileseam.toml"), "[preferences]\nverbose = true").unwrap();
    let out = run_in(d.path(), &[]);
    assert!(out.status.success());
    assert!(stderr(&out).contains("closed testFile.txt"));
}

#[test]
fn test_malformed_config_is_generic_error() {
    let d = temp();
    fs::write(d.path().join("broken.toml"), "[preferences\n").unwrap();
    let out = run_in(d.path(), &["--config", "broken.toml"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("broken.toml"));
    assert!(!d.path().join("testFile.txt").exists());
}
