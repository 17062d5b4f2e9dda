//! gsm-env - Load secrets from Google Cloud Secret Manager into the environment.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── run           # Run a command with the secret loaded
//! │   ├── check         # Validate the secret, list its keys
//! │   ├── output        # Terminal output helpers
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # GCP_PROJECT_ID / SECRET_NAME / SECRET_VERSION
//!     ├── resource      # projects/*/secrets/*/versions/* names
//!     ├── access/       # Remote access backends
//!     │   ├── mod       # SecretAccess and AccessFactory traits
//!     │   └── gcloud    # gcloud CLI implementation
//!     ├── client        # Timeout-bounded fetch, load into env
//!     └── env           # KEY=VALUE parsing and environment sinks
//! ```
//!
//! # Usage
//!
//! ```no_run
//! # async fn demo() -> gsm_env::error::Result<()> {
//! let client = gsm_env::Client::connect().await?;
//! client.load_secret_to_env().await?;
//! client.close().await?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::client::Client;
pub use crate::core::config::SecretConfig;
pub use crate::error::{Error, Result};
