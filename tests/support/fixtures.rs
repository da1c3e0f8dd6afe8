//! Test fixtures: seeding the store and the input directory.

use super::Test;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::fs;

/// Fields used by most scenarios.
pub const SECRET_FIELDS: &[(&str, &str)] = &[("ping", "pong"), ("this", "that"), ("ying", "yang")];

/// Input root below the work directory's `in/`.
pub const ROOT_PATH: &str = "resource_root_path";

/// Store prefix used for imports.
pub const PREFIX: &str = "secret";

fn encode(fields: &[(&str, &str)]) -> String {
    let map: BTreeMap<&str, &str> = fields.iter().copied().collect();
    serde_json::to_string(&map).expect("failed to encode fields")
}

impl Test {
    /// Write a secret straight into the store directory.
    pub fn seed_store(&self, path: &str, fields: &[(&str, &str)]) {
        let file = self.store.path().join(path.trim_start_matches('/'));
        fs::create_dir_all(file.parent().unwrap()).unwrap();
        fs::write(file, encode(fields)).unwrap();
    }

    /// Write a secret file under `in/resource_root_path`.
    pub fn seed_input(&self, path: &str, fields: &[(&str, &str)]) {
        let file = self
            .work
            .path()
            .join("in")
            .join(ROOT_PATH)
            .join(path.trim_start_matches('/'));
        fs::create_dir_all(file.parent().unwrap()).unwrap();
        fs::write(file, encode(fields)).unwrap();
    }

    /// Seed `/some/place` and `/other/place` in both the store (under the
    /// prefix) and the input directory.
    pub fn seed_places(&self) {
        for path in ["/some/place", "/other/place"] {
            self.seed_store(&format!("{}{}", PREFIX, path), SECRET_FIELDS);
            self.seed_input(path, SECRET_FIELDS);
        }
    }

    /// Read a secret back from the store directory.
    pub fn store_secret(&self, path: &str) -> BTreeMap<String, String> {
        let file = self.store.path().join(path.trim_start_matches('/'));
        let raw = fs::read(&file).unwrap_or_else(|e| panic!("{}: {}", file.display(), e));
        serde_json::from_slice(&raw).unwrap()
    }

    /// `source` block pointing at this test's store.
    pub fn source(&self, paths: &[&str]) -> Value {
        json!({
            "url": self.url(),
            "token": "root",
            "paths": paths,
        })
    }
}

/// Build a `{ "source", "dest", "keys" }` secret map.
pub fn secret_map(source: &str, dest: &str, keys: Value) -> Value {
    json!({ "source": source, "dest": dest, "keys": keys })
}

/// Build `out` params, optionally with secret maps.
pub fn out_params(secret_maps: Option<Value>) -> Value {
    let mut params = json!({ "path": ROOT_PATH, "prefix": PREFIX });
    if let Some(maps) = secret_maps {
        params["secret_maps"] = maps;
    }
    params
}

/// Convert expected pairs into an owned map for comparison.
pub fn fields(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
