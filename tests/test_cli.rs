//! Exit status tests for the agenda-maker binary

use agenda_maker::testing::sample_csv;
use std::path::Path;
use std::process::{Command, Output};

use test_helpers::write_input;

const AGENDA_FILE: &str = "Agenda-2024-03-07.txt";

fn run_cli(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_agenda-maker"))
        .current_dir(dir)
        .env_remove("AGENDA_CONFIG")
        .env_remove("RUST_LOG")
        .args(["--quiet", "--date", "2024-03-07"])
        .args(args)
        .output()
        .expect("run agenda-maker")
}

#[test]
fn test_successful_run_exits_zero_and_writes_agenda() {
    let dir = tempfile::tempdir().unwrap();
    write_input(dir.path(), "data.csv", sample_csv());

    let output = run_cli(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(0));
    assert!(dir.path().join(AGENDA_FILE).exists());
}

#[test]
fn test_missing_input_exits_one() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_cli(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("data.csv"));
    assert!(!dir.path().join(AGENDA_FILE).exists());
}

#[test]
fn test_malformed_input_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    write_input(dir.path(), "subs.csv", "a,b\nx,y\"z\n");

    let output = run_cli(dir.path(), &["--file", "subs.csv"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(!dir.path().join(AGENDA_FILE).exists());
}

#[test]
fn test_output_failure_is_printed_and_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    write_input(dir.path(), "data.csv", sample_csv());

    let output = run_cli(dir.path(), &["--output-dir", "missing-dir"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Failed to create agenda file"));
    assert!(!dir.path().join(AGENDA_FILE).exists());
}

#[test]
fn test_invalid_config_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    write_input(dir.path(), "data.csv", sample_csv());
    write_input(dir.path(), "agenda.toml", "[layout]\ntab_width = 0\n");

    let output = run_cli(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(!dir.path().join(AGENDA_FILE).exists());
}
