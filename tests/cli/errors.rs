//! Tests for error reporting.

use crate::support::*;
use predicates::prelude::*;
use serde_json::json;

#[test]
fn test_missing_url_fails_with_hint() {
    let t = Test::new();

    let output = t.check(&json!({ "source": { "token": "root", "paths": ["secret"] } }));
    assert_failure(&output);
    assert_stderr_contains(&output, "missing 'url' field");
    assert_stderr_contains(&output, "set 'url'");
}

#[test]
fn test_missing_token_fails() {
    let t = Test::new();

    let output = t.check(&json!({ "source": { "url": t.url(), "paths": ["secret"] } }));
    assert_failure(&output);
    assert_stderr_contains(&output, "missing 'token' field");
}

#[test]
fn test_missing_paths_fails() {
    let t = Test::new();

    let output = t.check(&json!({ "source": { "url": t.url(), "token": "root" } }));
    assert_failure(&output);
    assert_stderr_contains(&output, "missing 'paths' field");
}

#[test]
fn test_unsupported_url_fails() {
    let t = Test::new();

    let output = t.check(&json!({
        "source": { "url": "https://vault.example.com", "token": "root", "paths": ["secret"] }
    }));
    assert_failure(&output);
    assert_stderr_contains(&output, "unsupported store location");
}

#[test]
fn test_malformed_request_fails() {
    let t = Test::new();

    t.cmd()
        .arg("check")
        .write_stdin("not json")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("serialization error"));
}

#[test]
fn test_unknown_subcommand_fails() {
    let t = Test::new();

    t.cmd()
        .arg("sync")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_out_missing_keys_reports_all() {
    let t = Test::new();
    t.seed_places();

    let output = t.put(
        "in",
        &json!({
            "source": t.source(&["/secret"]),
            "params": out_params(Some(json!([
                secret_map("/some/place", "", json!(["ping", "king", "ting"]))
            ]))),
        }),
    );
    assert_failure(&output);
    assert_stderr_contains(
        &output,
        "Specified keys not found in input for secret `some/place': king,ting",
    );
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_out_missing_source_fails() {
    let t = Test::new();
    t.seed_places();

    let output = t.put(
        "in",
        &json!({
            "source": t.source(&["/secret"]),
            "params": out_params(Some(json!([secret_map("", "", json!([]))]))),
        }),
    );
    assert_failure(&output);
    assert_stderr_contains(&output, "missing 'source' field");
}
