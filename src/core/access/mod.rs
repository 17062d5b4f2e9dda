//! Remote secret access.
//!
//! The client never talks to Secret Manager directly. It goes through
//! [`SecretAccess`], acquired from an [`AccessFactory`], so tests and
//! alternative transports can stand in for the real service.
//!
//! ## Backends
//!
//! - **gcloud**: Default. Shells out to the `gcloud` CLI, reusing whatever
//!   credentials it is logged in with.
//!
//! ## Adding a New Backend
//!
//! 1. Implement `SecretAccess` for the connection type
//! 2. Implement `AccessFactory` to build it
//! 3. Pass the factory to `Client::connect_with`

use async_trait::async_trait;

use crate::core::resource::ResourceName;
use crate::error::BoxError;

mod gcloud;

pub use gcloud::{Gcloud, GcloudFactory};

/// An open connection to a secret store.
#[async_trait]
pub trait SecretAccess: Send + Sync {
    /// Read the payload of one secret version.
    ///
    /// Dropping the returned future must abandon the request.
    async fn access_secret_version(&self, name: &ResourceName) -> Result<Vec<u8>, BoxError>;

    /// Release the connection.
    async fn close(&mut self) -> Result<(), BoxError>;
}

/// Builds [`SecretAccess`] connections.
#[async_trait]
pub trait AccessFactory: Send + Sync {
    async fn connect(&self) -> Result<Box<dyn SecretAccess>, BoxError>;
}
