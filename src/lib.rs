//! Trigger parameterized Jenkins jobs from a workflow engine.
//!
//! The crate exposes one integration action, registered under
//! [`ACTION_ID`]: given a job name and a parameter record it issues a
//! single authenticated `POST /job/<name>/buildWithParameters` against the
//! first configured Jenkins instance and returns the job's viewable URL.
//!
//! ```no_run
//! use jenkins_trigger::{JenkinsConfig, JenkinsInstance, TriggerInput, TriggerJobAction};
//!
//! # async fn demo() -> jenkins_trigger::Result<()> {
//! let config = JenkinsConfig::new(vec![JenkinsInstance {
//!     base_url: "https://ci.example.com".into(),
//!     username: "bot".into(),
//!     api_key: "api-key".into(),
//! }]);
//!
//! let action = TriggerJobAction::new(config)?;
//! let output = action
//!     .invoke(TriggerInput {
//!         job_name: "build-app".into(),
//!         parameters: serde_json::Map::new(),
//!     })
//!     .await?;
//! println!("started: {}", output.job_url);
//! # Ok(())
//! # }
//! ```

pub mod action;
pub mod auth;
pub mod config;
pub mod error;
mod util;

pub use action::{ACTION_ID, TriggerInput, TriggerJobAction, TriggerOutput, WorkflowAction};
pub use auth::{BasicAuth, SecretString};
pub use config::{JenkinsConfig, JenkinsInstance};
pub use error::{Error, ErrorKind, Result, TransportErrorKind};
