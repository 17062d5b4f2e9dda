//! Secret Manager resource names.

use std::fmt;
use std::str::FromStr;

/// Fully-qualified name of one secret version:
/// `projects/{project}/secrets/{secret}/versions/{version}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceName {
    project: String,
    secret: String,
    version: String,
}

impl ResourceName {
    pub fn new(project: &str, secret: &str, version: &str) -> Self {
        Self {
            project: project.to_string(),
            secret: secret.to_string(),
            version: version.to_string(),
        }
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "projects/{}/secrets/{}/versions/{}",
            self.project, self.secret, self.version
        )
    }
}

/// Error parsing a [`ResourceName`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid secret resource name: {0}")]
pub struct InvalidResourceName(pub String);

impl FromStr for ResourceName {
    type Err = InvalidResourceName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('/').collect();

        if parts.len() != 6
            || parts[0] != "projects"
            || parts[2] != "secrets"
            || parts[4] != "versions"
            || [parts[1], parts[3], parts[5]].iter().any(|p| p.is_empty())
        {
            return Err(InvalidResourceName(s.to_string()));
        }

        Ok(Self::new(parts[1], parts[3], parts[5]))
    }
}
