//! Tests for `gsm-env run`.

use crate::support::*;

#[test]
fn test_run_injects_env_vars() {
    let t = Test::with_payload("FOO=bar\nQUERY=[a=b]\n");

    let output = t.run(&["sh", "-c", "printf '%s %s' \"$FOO\" \"$QUERY\""]);
    assert_success(&output);
    assert_eq!(stdout(&output), "bar a=b");
}

#[test]
fn test_run_skips_blank_lines_and_allows_empty_values() {
    let t = Test::with_payload("\n  \nEMPTY=\n\nNAME = spaced value \n");

    let output = t.run(&["sh", "-c", "printf '[%s][%s]' \"${EMPTY-unset}\" \"$NAME\""]);
    assert_success(&output);
    assert_eq!(stdout(&output), "[][spaced value]");
}

#[test]
fn test_run_keeps_existing_environment() {
    let t = Test::with_payload("FOO=bar\n");

    let output = t
        .cmd()
        .env("ALREADY_SET", "kept")
        .args(["run", "--", "sh", "-c", "printf '%s' \"$ALREADY_SET\""])
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(stdout(&output), "kept");
}

#[test]
fn test_run_exit_code_passthrough() {
    let t = Test::with_payload("FOO=bar\n");

    let output = t.run(&["sh", "-c", "exit 42"]);
    assert_eq!(output.status.code(), Some(42));
}

#[test]
fn test_run_does_not_start_command_on_bad_line() {
    let t = Test::with_payload("A=1\nBROKEN\nC=3\n");

    let output = t.run(&["sh", "-c", "echo started"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to set environment variable");
    assert_stderr_contains(&output, "line 2");
    assert!(!stdout(&output).contains("started"));
}

#[test]
fn test_run_does_not_leak_values_in_errors() {
    let t = Test::with_payload("TOKEN=s3cr3t=oops\n");

    let output = t.run(&["true"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "exactly one '=' character");
    assert!(!stderr(&output).contains("s3cr3t"));
}

#[test]
fn test_run_without_command() {
    let t = Test::with_payload("FOO=bar\n");

    let output = t.cmd().arg("run").output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "no command specified");
}

#[test]
fn test_run_unknown_program() {
    let t = Test::with_payload("FOO=bar\n");

    let output = t.run(&["definitely-not-a-real-program-gsm-env"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to run definitely-not-a-real-program-gsm-env");
}

#[test]
fn test_verbose_logs_keys_not_values() {
    let t = Test::with_payload("API_KEY=supersecretvalue\n");

    let output = t
        .cmd()
        .env("GSM_ENV_LOG", "gsm_env=info")
        .args(["run", "--", "true"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_stderr_contains(&output, "API_KEY");
    assert!(!stderr(&output).contains("supersecretvalue"));
}
