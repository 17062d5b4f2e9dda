//! Test support for gsm-env integration tests.
//!
//! Each test gets a temp directory holding a fake `gcloud` script. The script
//! records its arguments and prints a canned payload, so no test touches the
//! real Secret Manager or mutates this process's environment.

#![allow(dead_code)]

pub mod assertions;

#[allow(unused_imports)]
pub use assertions::*;

use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use std::process::Output;

use assert_cmd::Command;
use tempfile::TempDir;

/// Isolated environment with a fake gcloud on `PATH`.
pub struct Test {
    pub dir: TempDir,
}

impl Test {
    /// Fake gcloud that prints `payload`.
    pub fn with_payload(payload: &str) -> Self {
        let t = Self::empty();
        std::fs::write(t.dir.path().join("payload"), payload).expect("failed to write payload");
        t.install_gcloud(&format!(
            "printf '%s\\n' \"$@\" > '{dir}/args'\ncat '{dir}/payload'",
            dir = t.dir.path().display()
        ));
        t
    }

    /// Fake gcloud that fails like an unauthenticated CLI.
    pub fn with_failing_gcloud() -> Self {
        let t = Self::empty();
        t.install_gcloud("echo 'ERROR: (gcloud.secrets.versions.access) PERMISSION_DENIED' >&2\nexit 1");
        t
    }

    /// No gcloud at all.
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    fn install_gcloud(&self, body: &str) {
        let path = self.dir.path().join("gcloud");
        std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).expect("failed to write gcloud");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("failed to chmod gcloud");
    }

    /// `PATH` with the fake gcloud first.
    fn path_var(&self) -> String {
        format!("{}:/usr/bin:/bin", self.dir.path().display())
    }

    /// gsm-env with a clean, fully configured environment.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("gsm-env").expect("binary not built");
        cmd.env_clear()
            .env("PATH", self.path_var())
            .env("NO_COLOR", "1")
            .env("GCP_PROJECT_ID", "test-project")
            .env("SECRET_NAME", "app-env");
        cmd
    }

    /// Run `gsm-env run -- <command>`.
    pub fn run(&self, command: &[&str]) -> Output {
        self.cmd()
            .arg("run")
            .arg("--")
            .args(command)
            .output()
            .expect("failed to execute gsm-env")
    }

    /// Run `gsm-env check`.
    pub fn check(&self, json: bool) -> Output {
        let mut cmd = self.cmd();
        cmd.arg("check");
        if json {
            cmd.arg("--json");
        }
        cmd.output().expect("failed to execute gsm-env")
    }

    /// Arguments the fake gcloud received, one per line.
    pub fn gcloud_args(&self) -> Vec<String> {
        std::fs::read_to_string(self.args_path())
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    pub fn args_path(&self) -> PathBuf {
        self.dir.path().join("args")
    }
}
