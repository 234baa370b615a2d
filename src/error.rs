use http::{Method, StatusCode};
use std::error::Error as StdError;
use thiserror::Error;
use url::Url;

pub type Result<T> = std::result::Result<T, Error>;

/// Broad classification of [`Error`] for callers that match on category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    Configuration,
    Remote,
    Transport,
    Payload,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum TransportErrorKind {
    Timeout,
    Connect,
    Other,
}

/// All errors returned by the action.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The host configuration supplied an empty instance list.
    #[error("no Jenkins instances configured")]
    NoInstancesConfigured,

    #[error("invalid configuration: {message}")]
    InvalidConfig {
        message: Box<str>,
        #[source]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },

    /// Non-2xx HTTP response from the Jenkins controller.
    #[error("failed to trigger Jenkins job: HTTP {status} ({method} {url})")]
    Remote {
        status: StatusCode,
        method: Method,
        url: Box<Url>,
    },

    /// Transport failure before a status line was received.
    #[error("failed to trigger Jenkins job: {source}")]
    Transport {
        method: Method,
        url: Box<Url>,
        kind: TransportErrorKind,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// Engine payload could not be deserialized or serialized.
    #[error("invalid action payload: {0}")]
    Payload(#[from] serde_json::Error),
}

impl Error {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NoInstancesConfigured | Self::InvalidConfig { .. } => ErrorKind::Configuration,
            Self::Remote { .. } => ErrorKind::Remote,
            Self::Transport { .. } => ErrorKind::Transport,
            Self::Payload(_) => ErrorKind::Payload,
        }
    }

    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}
