//! Run command.
//!
//! Loads the secret into this process's environment, then runs a command
//! that inherits it.

use tokio::process::Command;
use tracing::debug;

use crate::cli::{close_after, SourceArgs};
use crate::core::access::GcloudFactory;
use crate::core::client::Client;
use crate::error::{Error, Result};

/// Run a command with the secret loaded, returning its exit code.
pub async fn execute(source: &SourceArgs, command: &[String]) -> Result<i32> {
    let (program, args) = command.split_first().ok_or(Error::NoCommand)?;

    let config = source.resolve()?;
    let client = Client::connect_with(config, &GcloudFactory::default()).await?;
    let loaded = client.load_secret_to_env().await;
    let count = close_after(client, loaded).await?;

    debug!(count, program = %program, "running command with secret loaded");

    let status = Command::new(program)
        .args(args)
        .status()
        .await
        .map_err(|source| Error::Spawn {
            program: program.clone(),
            source,
        })?;

    // Killed by a signal: no code to pass through
    Ok(status.code().unwrap_or(1))
}
