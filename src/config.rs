//! Endpoint configuration supplied by the host.
//!
//! The action does not read files or environment variables itself; the
//! invoking process hands it a [`JenkinsConfig`] resolved by its own
//! configuration subsystem.

use crate::auth::SecretString;
use crate::error::{Error, Result};
use serde::Deserialize;

/// One Jenkins controller entry.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JenkinsInstance {
    /// Absolute URL of the controller, with or without a trailing slash.
    pub base_url: String,
    pub username: String,
    pub api_key: SecretString,
}

/// Ordered list of configured Jenkins instances.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct JenkinsConfig {
    #[serde(default)]
    pub instances: Vec<JenkinsInstance>,
}

impl JenkinsConfig {
    #[must_use]
    pub fn new(instances: Vec<JenkinsInstance>) -> Self {
        Self { instances }
    }

    /// The instance the action talks to.
    ///
    /// Current policy: always the first configured entry. Callers that need
    /// a different controller reorder the list they pass in.
    pub(crate) fn primary(&self) -> Result<&JenkinsInstance> {
        self.instances.first().ok_or(Error::NoInstancesConfigured)
    }
}
