//! Secret Manager client.
//!
//! Pairs a resolved [`SecretConfig`] with an open [`SecretAccess`]
//! connection. One fetch per call: no retries, no caching.

use std::time::Duration;

use tracing::debug;
use zeroize::Zeroizing;

use crate::core::access::{AccessFactory, GcloudFactory, SecretAccess};
use crate::core::config::SecretConfig;
use crate::core::env::{self, EnvSink, ProcessEnv};
use crate::error::{Error, Result};

/// Upper bound on a single secret fetch.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for one configured secret.
pub struct Client {
    access: Box<dyn SecretAccess>,
    config: SecretConfig,
}

impl Client {
    /// Resolve configuration from the environment and connect through gcloud.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if a required variable is missing, or
    /// `Error::Connect` if gcloud cannot be found.
    pub async fn connect() -> Result<Self> {
        let config = SecretConfig::from_env()?;
        Self::connect_with(config, &GcloudFactory::default()).await
    }

    /// Connect using an explicit configuration and factory.
    pub async fn connect_with(config: SecretConfig, factory: &dyn AccessFactory) -> Result<Self> {
        let access = factory.connect().await.map_err(Error::Connect)?;
        Ok(Self::from_access(config, access))
    }

    /// Wrap an already open connection.
    pub fn from_access(config: SecretConfig, access: Box<dyn SecretAccess>) -> Self {
        Self { access, config }
    }

    pub fn config(&self) -> &SecretConfig {
        &self.config
    }

    /// Fetch the raw secret payload.
    ///
    /// The request is abandoned after [`FETCH_TIMEOUT`]. Dropping the future
    /// cancels it as well.
    pub async fn fetch_secret_bytes(&self) -> Result<Vec<u8>> {
        let name = self.config.resource_name();
        debug!(resource = %name, "fetching secret");

        let payload = tokio::time::timeout(FETCH_TIMEOUT, self.access.access_secret_version(&name))
            .await
            .map_err(|_| Error::Timeout(FETCH_TIMEOUT))?
            .map_err(Error::Access)?;

        debug!(resource = %name, payload_len = payload.len(), "fetched secret");
        Ok(payload)
    }

    /// Fetch the secret payload as text.
    pub async fn fetch_secret(&self) -> Result<String> {
        let payload = self.fetch_secret_bytes().await?;
        Ok(String::from_utf8(payload)?)
    }

    /// Fetch the secret and write each `KEY=VALUE` line into the process
    /// environment.
    ///
    /// Must not run concurrently with other environment writers. Entries set
    /// before a failing line stay set.
    pub async fn load_secret_to_env(&self) -> Result<usize> {
        self.load_secret_into(&mut ProcessEnv).await
    }

    /// Fetch the secret and write each `KEY=VALUE` line into `sink`.
    ///
    /// Returns the number of entries written.
    pub async fn load_secret_into(&self, sink: &mut dyn EnvSink) -> Result<usize> {
        let payload = Zeroizing::new(
            self.fetch_secret_bytes()
                .await
                .map_err(|e| Error::Retrieve(Box::new(e)))?,
        );

        env::load_from_reader(payload.as_slice(), sink)
    }

    /// Release the connection.
    pub async fn close(mut self) -> Result<()> {
        self.access.close().await.map_err(Error::Close)
    }
}
