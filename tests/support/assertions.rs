//! Assertion helpers for command output.

use std::process::Output;

/// Assert that a command exited successfully.
pub fn assert_success(output: &Output) {
    if !output.status.success() {
        panic!("gsm-env failed:\n{}", stderr(output));
    }
}

/// Assert that a command exited with an error.
pub fn assert_failure(output: &Output) {
    assert!(
        !output.status.success(),
        "expected gsm-env to fail, stdout: {}",
        stdout(output)
    );
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Assert stdout contains a string.
pub fn assert_stdout_contains(output: &Output, expected: &str) {
    let out = stdout(output);
    assert!(
        out.contains(expected),
        "stdout missing '{}', got: {}",
        expected,
        out
    );
}

/// Assert stderr contains a string.
pub fn assert_stderr_contains(output: &Output, expected: &str) {
    let err = stderr(output);
    assert!(
        err.contains(expected),
        "stderr missing '{}', got: {}",
        expected,
        err
    );
}
