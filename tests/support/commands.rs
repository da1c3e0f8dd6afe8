//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use serde_json::Value;
use std::process::Output;

impl Test {
    /// Create a vaultsync command with colors disabled and the work
    /// directory as current directory.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("vaultsync").expect("failed to find vaultsync binary");
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("VAULTSYNC_LOG");
        cmd.current_dir(self.work.path());
        cmd
    }

    /// Shortcut for `vaultsync check` with a JSON request on stdin.
    pub fn check(&self, request: &Value) -> Output {
        self.cmd()
            .arg("check")
            .write_stdin(request.to_string())
            .output()
            .expect("failed to run vaultsync check")
    }

    /// Shortcut for `vaultsync in <dir>`.
    pub fn get(&self, dir: &str, request: &Value) -> Output {
        self.cmd()
            .args(["in", dir])
            .write_stdin(request.to_string())
            .output()
            .expect("failed to run vaultsync in")
    }

    /// Shortcut for `vaultsync out <dir>`.
    pub fn put(&self, dir: &str, request: &Value) -> Output {
        self.cmd()
            .args(["out", dir])
            .write_stdin(request.to_string())
            .output()
            .expect("failed to run vaultsync out")
    }
}
