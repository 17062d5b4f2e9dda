//! Error types for gsm-env.
//!
//! Every layer wraps the error below it with a short prefix, so the message a
//! caller sees reads as a chain: `failed to retrieve secret: failed to access
//! secret: ...`.

use std::fmt;
use std::time::Duration;

use thiserror::Error;

/// Boxed error produced by a remote secret backend.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to create config: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to create secret manager client: {0}")]
    Connect(#[source] BoxError),

    #[error("failed to access secret: {0}")]
    Access(#[source] BoxError),

    #[error("failed to access secret: deadline of {}s exceeded", .0.as_secs())]
    Timeout(Duration),

    #[error("secret payload is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    #[error("failed to close secret manager client: {0}")]
    Close(#[source] BoxError),

    #[error("failed to retrieve secret: {0}")]
    Retrieve(#[source] Box<Error>),

    #[error("failed to set environment variable: {0}")]
    SetEnv(#[from] ParseError),

    #[error("error reading secret content: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no command specified")]
    NoCommand,

    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// A required configuration value is missing or empty.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("missing required environment variable: {field}")]
pub struct ConfigError {
    pub field: &'static str,
}

/// A secret line could not be parsed or applied.
///
/// The offending line is kept for programmatic inspection but is not part of
/// the rendered message, since it usually contains a secret value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid format at line {line_number}: {reason}")]
pub struct ParseError {
    pub line: String,
    pub line_number: usize,
    pub reason: ParseReason,
}

/// Why a line was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseReason {
    /// No `=` in the line.
    MissingDelimiter,
    /// Nothing before the first `=`.
    EmptyKey,
    /// The value contains `=` but is not wrapped in `[...]`.
    InvalidEscape,
    /// The environment sink refused the write.
    Rejected(String),
}

impl fmt::Display for ParseReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDelimiter => f.write_str("line must contain exactly one '=' character"),
            Self::EmptyKey => f.write_str("empty key is not allowed"),
            Self::InvalidEscape => f.write_str(
                "invalid specific key-value pair: line must contain exactly one '=' character \
                 unless the value is wrapped in [brackets]",
            ),
            Self::Rejected(msg) => write!(f, "failed to set environment variable: {}", msg),
        }
    }
}

impl Error {
    /// A short suggestion for the user, if one applies.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Error::Config(ConfigError { field }) if *field == crate::core::config::PROJECT_ID_VAR => {
                Some("set GCP_PROJECT_ID or pass --project")
            }
            Error::Config(_) => Some("set SECRET_NAME or pass --secret"),
            Error::Connect(_) => {
                Some("install the gcloud CLI: https://cloud.google.com/sdk/docs/install")
            }
            Error::Retrieve(inner) => match inner.as_ref() {
                Error::Timeout(_) => Some("check network access to secretmanager.googleapis.com"),
                Error::Access(_) => Some("run: gcloud auth login"),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Result type alias for gsm-env operations.
pub type Result<T> = std::result::Result<T, Error>;
