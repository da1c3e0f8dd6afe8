//! Tests for `vaultsync out`.

use crate::support::*;
use serde_json::{json, Value};

fn put(t: &Test, secret_maps: Option<Value>) -> std::process::Output {
    t.put(
        "in",
        &json!({
            "source": t.source(&["/secret"]),
            "params": out_params(secret_maps),
        }),
    )
}

#[test]
fn test_out_without_secret_maps_copies_everything() {
    let t = Test::new();
    t.seed_input("/some/place", SECRET_FIELDS);

    let output = put(&t, None);
    assert_success(&output);

    assert_eq!(t.store_secret("secret/some/place"), fields(SECRET_FIELDS));
}

#[test]
fn test_out_reports_new_version() {
    let t = Test::new();
    t.seed_places();

    let output = put(&t, None);
    assert_success(&output);

    let response = stdout_json(&output);
    assert_eq!(response["version"]["url"], json!(t.url()));
    assert_eq!(response["version"]["secret_sha1"].as_str().unwrap().len(), 40);
    assert_eq!(response["metadata"], json!([]));

    let check = t.check(&json!({ "source": t.source(&["/secret"]) }));
    assert_eq!(stdout_json(&check)[0], response["version"]);
}

#[test]
fn test_out_renames_keys() {
    let t = Test::new();
    t.seed_places();

    let maps = json!([secret_map(
        "/some/place",
        "/new/place",
        json!(["ping", {"ying": "yingling"}])
    )]);
    let output = put(&t, Some(maps));
    assert_success(&output);

    assert_eq!(
        t.store_secret("secret/new/place"),
        fields(&[("ping", "pong"), ("yingling", "yang")])
    );
}

#[test]
fn test_out_merges_with_existing_destination() {
    let t = Test::new();
    t.seed_places();
    t.seed_store("secret/new/place", &[("hi", "there")]);

    let maps = json!([
        secret_map("/some/place", "/new/place", json!([{"ying": "yingling"}])),
        secret_map("/other/place", "/othernew/place", json!([{"this": "lookat"}])),
    ]);
    let output = put(&t, Some(maps));
    assert_success(&output);

    assert_eq!(
        t.store_secret("secret/new/place"),
        fields(&[("hi", "there"), ("yingling", "yang")])
    );
    assert_eq!(
        t.store_secret("secret/othernew/place"),
        fields(&[("lookat", "that")])
    );
}
