//! Command-line interface.

pub mod check;
pub mod completions;
pub mod output;
pub mod run;

use clap::{Args, Parser, Subcommand};
use tracing::warn;

use crate::core::client::Client;
use crate::core::config::{
    SecretConfig, PROJECT_ID_VAR, SECRET_NAME_VAR, SECRET_VERSION_VAR,
};
use crate::error::Result;

/// gsm-env - Load Secret Manager secrets into the environment.
#[derive(Parser)]
#[command(
    name = "gsm-env",
    about = "Load KEY=VALUE secrets from Google Cloud Secret Manager into the environment",
    version
)]
pub struct Cli {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Which secret to read. Flags override the environment.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Google Cloud project ID
    #[arg(long, env = PROJECT_ID_VAR, global = true)]
    pub project: Option<String>,

    /// Secret name within the project
    #[arg(long, env = SECRET_NAME_VAR, global = true)]
    pub secret: Option<String>,

    /// Secret version [default: latest]
    #[arg(long, env = SECRET_VERSION_VAR, global = true)]
    pub secret_version: Option<String>,
}

impl SourceArgs {
    /// Resolve the flags into a validated configuration.
    pub fn resolve(&self) -> Result<SecretConfig> {
        let config = SecretConfig::from_lookup(|name| match name {
            PROJECT_ID_VAR => self.project.clone(),
            SECRET_NAME_VAR => self.secret.clone(),
            SECRET_VERSION_VAR => self.secret_version.clone(),
            _ => None,
        })?;
        Ok(config)
    }
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Run a command with the secret loaded into its environment
    Run {
        /// Command and arguments to run
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },

    /// Fetch and validate the secret, listing its keys
    Check {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Log output formats.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Execute a command, returning the process exit code.
pub async fn execute(source: SourceArgs, command: Command) -> Result<i32> {
    use Command::*;

    match command {
        Run { command } => run::execute(&source, &command).await,
        Check { json } => check::execute(&source, json).await.map(|()| 0),
        Completions { shell } => completions::execute(shell).map(|()| 0),
    }
}

/// Close `client` after an operation on it.
///
/// The operation's error wins; a close failure after it is only logged.
pub(crate) async fn close_after<T>(client: Client, result: Result<T>) -> Result<T> {
    let closed = client.close().await;
    match (result, closed) {
        (Err(e), Err(close_err)) => {
            warn!(error = %close_err, "ignoring close failure after earlier error");
            Err(e)
        }
        (Err(e), Ok(())) => Err(e),
        (Ok(value), closed) => closed.map(|()| value),
    }
}
