//! Secret location configuration.
//!
//! Resolved once from named values (normally the process environment) and
//! never mutated afterwards.

use tracing::debug;

use crate::core::resource::ResourceName;
use crate::error::ConfigError;

/// Names the Google Cloud project holding the secret. Required.
pub const PROJECT_ID_VAR: &str = "GCP_PROJECT_ID";

/// Names the secret within the project. Required.
pub const SECRET_NAME_VAR: &str = "SECRET_NAME";

/// Selects the secret version. Optional.
pub const SECRET_VERSION_VAR: &str = "SECRET_VERSION";

/// Version used when [`SECRET_VERSION_VAR`] is unset or empty.
pub const DEFAULT_VERSION: &str = "latest";

/// Where to find the secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretConfig {
    project_id: String,
    secret_name: String,
    secret_version: String,
}

impl SecretConfig {
    /// Resolve configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` naming the first required variable that is
    /// missing or empty. The project is checked before the secret name.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve configuration through an arbitrary lookup.
    ///
    /// Empty values are treated the same as absent ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let project_id = get(PROJECT_ID_VAR).ok_or(ConfigError {
            field: PROJECT_ID_VAR,
        })?;
        let secret_name = get(SECRET_NAME_VAR).ok_or(ConfigError {
            field: SECRET_NAME_VAR,
        })?;
        let secret_version = get(SECRET_VERSION_VAR).unwrap_or_else(|| DEFAULT_VERSION.to_string());

        debug!(
            project = %project_id,
            secret = %secret_name,
            version = %secret_version,
            "resolved secret configuration"
        );

        Ok(Self {
            project_id,
            secret_name,
            secret_version,
        })
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn secret_name(&self) -> &str {
        &self.secret_name
    }

    pub fn secret_version(&self) -> &str {
        &self.secret_version
    }

    /// Fully-qualified name of the configured secret version.
    pub fn resource_name(&self) -> ResourceName {
        ResourceName::new(&self.project_id, &self.secret_name, &self.secret_version)
    }
}
