//! Tests for `gsm-env check`.

use crate::support::*;

#[test]
fn test_check_lists_keys_without_values() {
    let t = Test::with_payload("DATABASE_URL=[postgres://h/db?ssl=on]\nAPI_KEY=sk-123\n");

    let output = t.check(false);
    assert_success(&output);
    assert_stdout_contains(&output, "projects/test-project/secrets/app-env/versions/latest");
    assert_stdout_contains(&output, "DATABASE_URL");
    assert_stdout_contains(&output, "API_KEY");
    assert_stdout_contains(&output, "2 entries valid");
    assert!(!stdout(&output).contains("sk-123"));
}

#[test]
fn test_check_json() {
    let t = Test::with_payload("B=2\nA=1\n");

    let output = t.check(true);
    assert_success(&output);

    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(
        report["resource"],
        "projects/test-project/secrets/app-env/versions/latest"
    );
    assert_eq!(report["keys"], serde_json::json!(["A", "B"]));
}

#[test]
fn test_check_empty_secret() {
    let t = Test::with_payload("\n\n");

    let output = t.check(false);
    assert_success(&output);
    assert_stdout_contains(&output, "no entries");
    assert_stdout_contains(&output, "0 entries valid");
}

#[test]
fn test_check_reports_empty_key() {
    let t = Test::with_payload("=value\n");

    let output = t.check(false);
    assert_failure(&output);
    assert_stderr_contains(&output, "empty key is not allowed");
}
