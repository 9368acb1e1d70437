//! End-to-end tests driving the demo binary as a subprocess.

use std::process::{Command, Output};

fn run_demo(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_refract-demo"))
        .args(args)
        .output()
        .expect("failed to spawn refract-demo")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn dispatches_subcommand_with_value() {
    let output = run_demo(&["build", "-target", "release"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "build target=release\n");
    assert_eq!(stderr(&output), "");
}

#[test]
fn no_arguments_runs_default_command() {
    let output = run_demo(&[]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "default verbose=off\n");
}

#[test]
fn leading_option_selects_default_command() {
    let output = run_demo(&["-verbose", "on"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "default verbose=on\n");
}

#[test]
fn unknown_option_exits_with_status_one() {
    let output = run_demo(&["build", "-bogus", "x"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "Unknown option -bogus\n");
    assert_eq!(stdout(&output), "");
}

#[test]
fn missing_required_option_reports_once_and_exits() {
    let output = run_demo(&["run"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stderr(&output),
        "Required option -file missing\n  -file REQUIRED\n    File to run\n"
    );
    assert_eq!(stdout(&output), "");
}

#[test]
fn missing_required_options_are_reported_together() {
    let output = run_demo(&["copy"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stderr(&output),
        concat!(
            "Required option -from missing\n",
            "  -from REQUIRED\n",
            "    Source path\n",
            "Required option -to missing\n",
            "  -to REQUIRED\n",
            "    Target path\n",
        )
    );
    assert_eq!(stdout(&output), "");
}

#[test]
fn satisfied_required_options_dispatch() {
    let output = run_demo(&["copy", "-from", "a.txt", "-to", "b.txt"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "copy from=a.txt to=b.txt\n");
}

#[test]
fn trailing_option_without_value_exits_with_status_one() {
    let output = run_demo(&["build", "-target"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "Missing value for option -target\n");
}

#[test]
fn trailing_flag_without_value_exits_with_status_one() {
    let output = run_demo(&["-verbose"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "Missing value for option -verbose\n");
}

#[test]
fn unmatched_subcommand_prints_usage_and_exits_cleanly() {
    let output = run_demo(&["nonexistent"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.starts_with("Usage:\n"));
    assert!(text.contains(" build [-target val]\n"));
    assert!(text.contains("  Build the project\n"));
    assert!(text.contains(" run -file val [-timeout val]\n"));
    assert!(text.contains(" clean\n"));
    assert_eq!(stderr(&output), "");
}

#[test]
fn handlerless_command_prints_usage_and_exits_cleanly() {
    let output = run_demo(&["clean"]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("Usage:\n"));
    assert_eq!(stderr(&output), "");
}

#[test]
fn duplicate_option_last_value_wins() {
    let output = run_demo(&["build", "-target", "debug", "-target", "release"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "build target=release\n");
}

#[test]
fn bare_tokens_are_skipped() {
    let output = run_demo(&["build", "stray", "-target", "release"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "build target=release\n");
}

#[test]
fn handler_falls_back_to_declared_default() {
    let output = run_demo(&["run", "-file", "job.txt"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "run file=job.txt timeout=30\n");
}
