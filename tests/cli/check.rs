//! Tests for `vaultsync check`.

use crate::support::*;
use serde_json::json;

#[test]
fn test_check_reports_version() {
    let t = Test::with_handshake();

    let output = t.check(&json!({ "source": t.source(&["/secret/handshake"]) }));
    assert_success(&output);

    assert_eq!(
        stdout_json(&output),
        json!([{
            "secret_sha1": "775fb98067bd6a203dc835a1dcf2f7169f43e372",
            "url": t.url(),
        }])
    );
}

#[test]
fn test_check_with_same_version_reports_nothing() {
    let t = Test::with_handshake();
    let source = t.source(&["/secret"]);

    let first = t.check(&json!({ "source": source }));
    assert_success(&first);
    let version = stdout_json(&first)[0].clone();

    let second = t.check(&json!({ "source": source, "version": version }));
    assert_success(&second);
    assert_eq!(stdout_json(&second), json!([]));
}

#[test]
fn test_check_detects_change() {
    let t = Test::with_handshake();
    let source = t.source(&["/secret"]);

    let first = t.check(&json!({ "source": source }));
    let version = stdout_json(&first)[0].clone();

    t.seed_store("secret/handshake", &[("knock", "who's there")]);

    let second = t.check(&json!({ "source": source, "version": version }));
    assert_success(&second);
    let versions = stdout_json(&second);
    assert_eq!(versions.as_array().unwrap().len(), 1);
    assert_ne!(versions[0]["secret_sha1"], version["secret_sha1"]);
}

#[test]
fn test_check_treats_empty_version_as_unknown() {
    let t = Test::with_handshake();

    let output = t.check(&json!({ "source": t.source(&["/secret"]), "version": {} }));
    assert_success(&output);
    assert_eq!(stdout_json(&output).as_array().unwrap().len(), 1);
}

#[test]
fn test_check_missing_path_fails() {
    let t = Test::with_handshake();

    let output = t.check(&json!({ "source": t.source(&["/secret/nothing"]) }));
    assert_failure(&output);
    assert_stderr_contains(&output, "secret not found");
}
