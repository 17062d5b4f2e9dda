//! Secret Manager access through the gcloud CLI.
//!
//! ## Requirements
//!
//! - `gcloud` CLI must be installed and authenticated
//! - User must have `secretmanager.versions.access` on the secret
//!
//! Each read runs:
//! ```bash
//! gcloud secrets versions access VERSION --secret=SECRET --project=PROJECT
//! ```

use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::trace;

use super::{AccessFactory, SecretAccess};
use crate::core::resource::ResourceName;
use crate::error::BoxError;

const GCLOUD: &str = "gcloud";

/// Secret Manager connection backed by the gcloud CLI.
#[derive(Debug, Clone)]
pub struct Gcloud {
    binary: PathBuf,
}

impl Gcloud {
    /// Use a specific gcloud executable.
    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Locate gcloud on `PATH`.
    pub fn locate() -> Result<Self, BoxError> {
        let binary = which::which(GCLOUD).map_err(|e| {
            format!(
                "gcloud CLI not found ({}). Install it from https://cloud.google.com/sdk/docs/install",
                e
            )
        })?;
        Ok(Self::with_binary(binary))
    }
}

#[async_trait]
impl SecretAccess for Gcloud {
    async fn access_secret_version(&self, name: &ResourceName) -> Result<Vec<u8>, BoxError> {
        trace!(resource = %name, binary = %self.binary.display(), "accessing secret via gcloud");

        let output = Command::new(&self.binary)
            .args(["secrets", "versions", "access", name.version()])
            .arg(format!("--secret={}", name.secret()))
            .arg(format!("--project={}", name.project()))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| format!("failed to spawn gcloud: {}", e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(format!("gcloud secrets versions access failed: {}", stderr.trim()).into());
        }

        trace!(payload_len = output.stdout.len(), "accessed secret via gcloud");
        Ok(output.stdout)
    }

    async fn close(&mut self) -> Result<(), BoxError> {
        // Each access is its own process; nothing stays open.
        Ok(())
    }
}

/// Default factory: a [`Gcloud`] found on `PATH`, or a fixed binary.
#[derive(Debug, Clone, Default)]
pub struct GcloudFactory {
    binary: Option<PathBuf>,
}

impl GcloudFactory {
    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: Some(binary.into()),
        }
    }
}

#[async_trait]
impl AccessFactory for GcloudFactory {
    async fn connect(&self) -> Result<Box<dyn SecretAccess>, BoxError> {
        let gcloud = match &self.binary {
            Some(binary) => Gcloud::with_binary(binary.clone()),
            None => Gcloud::locate()?,
        };
        Ok(Box::new(gcloud))
    }
}
