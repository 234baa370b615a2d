//! The `jenkins:job:trigger` action.

use crate::auth::BasicAuth;
use crate::config::JenkinsConfig;
use crate::error::{Error, Result, TransportErrorKind};
use crate::util::url::{join_segments, normalize_base_url};
use async_trait::async_trait;
use http::{Method, header::AUTHORIZATION};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::info;
use url::Url;

/// Identifier under which the workflow engine registers this action.
pub const ACTION_ID: &str = "jenkins:job:trigger";

const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Input contract from the invoking workflow engine.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerInput {
    /// Name of the job to trigger. Not validated locally; the controller is
    /// the arbiter of job naming.
    pub job_name: String,
    /// Build parameters. Values are stringified before transmission.
    #[serde(default)]
    pub parameters: Map<String, Value>,
}

/// Output contract: where to watch the triggered job.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerOutput {
    pub job_url: String,
}

/// Port through which a workflow engine dispatches integration actions.
#[async_trait]
pub trait WorkflowAction: Send + Sync {
    /// Stable identifier the engine routes on.
    fn id(&self) -> &'static str;

    /// Run the action against an untyped engine payload.
    async fn run(&self, input: Value) -> Result<Value>;
}

#[cfg(feature = "rustls")]
fn ensure_rustls_provider() {
    static ONCE: std::sync::Once = std::sync::Once::new();
    ONCE.call_once(|| {
        let _ = rustls::crypto::ring::default_provider().install_default();
    });
}

#[cfg(not(feature = "rustls"))]
fn ensure_rustls_provider() {}

/// Triggers a parameterized Jenkins job and reports its viewable URL.
///
/// One [`invoke`](TriggerJobAction::invoke) is a single request/response
/// exchange: no retries, no crumb handshake, no state kept between calls.
/// The value is cheap to clone and safe to share across concurrent
/// invocations.
#[derive(Clone)]
pub struct TriggerJobAction {
    config: JenkinsConfig,
    http: reqwest::Client,
}

impl TriggerJobAction {
    /// Build the action with a default HTTP client.
    ///
    /// No request timeout is configured; the transport default applies. Use
    /// [`with_http_client`](Self::with_http_client) to tune the transport.
    pub fn new(config: JenkinsConfig) -> Result<Self> {
        ensure_rustls_provider();

        let http = reqwest::Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .build()
            .map_err(|err| Error::InvalidConfig {
                message: "failed to build HTTP client".into(),
                source: Some(Box::new(err)),
            })?;

        Ok(Self { config, http })
    }

    /// Build the action around a caller-supplied HTTP client.
    #[must_use]
    pub fn with_http_client(config: JenkinsConfig, http: reqwest::Client) -> Self {
        Self { config, http }
    }

    /// Trigger `input.job_name` on the first configured instance.
    ///
    /// `POST {baseUrl}/job/{name}/buildWithParameters` with basic auth and a
    /// form-encoded parameter body. Returns `{baseUrl}/job/{name}` on any
    /// 2xx response; everything else is an error.
    pub async fn invoke(&self, input: TriggerInput) -> Result<TriggerOutput> {
        let instance = self.config.primary()?;
        let base = normalize_base_url(&instance.base_url)?;

        let trigger_url = join_segments(
            &base,
            ["job", input.job_name.as_str(), "buildWithParameters"],
        )?;
        let auth =
            BasicAuth::new(instance.username.as_str(), instance.api_key.clone()).header_value()?;
        let form = form_fields(&input.parameters);

        info!(job = %input.job_name, "triggering Jenkins job");
        info!(parameters = %serde_json::Value::Object(input.parameters), "job parameters");

        let response = self
            .http
            .post(trigger_url.clone())
            .header(AUTHORIZATION, auth)
            .form(&form)
            .send()
            .await
            .map_err(|err| transport_error(trigger_url.clone(), err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Remote {
                status,
                method: Method::POST,
                url: Box::new(trigger_url),
            });
        }

        let job_url = join_segments(&base, ["job", input.job_name.as_str()])?;
        info!(job_url = %job_url, "triggered Jenkins job");

        Ok(TriggerOutput {
            job_url: String::from(job_url),
        })
    }
}

#[async_trait]
impl WorkflowAction for TriggerJobAction {
    fn id(&self) -> &'static str {
        ACTION_ID
    }

    async fn run(&self, input: Value) -> Result<Value> {
        let input: TriggerInput = serde_json::from_value(input)?;
        let output = self.invoke(input).await?;
        Ok(serde_json::to_value(output)?)
    }
}

/// Values go on the wire as strings: strings verbatim, everything else in
/// its canonical JSON rendering (`3`, `true`, ...).
fn form_fields(parameters: &Map<String, Value>) -> Vec<(String, String)> {
    parameters
        .iter()
        .map(|(key, value)| {
            let value = value
                .as_str()
                .map(ToOwned::to_owned)
                .unwrap_or_else(|| value.to_string());
            (key.clone(), value)
        })
        .collect()
}

fn transport_error(url: Url, err: reqwest::Error) -> Error {
    let kind = if err.is_timeout() {
        TransportErrorKind::Timeout
    } else if err.is_connect() {
        TransportErrorKind::Connect
    } else {
        TransportErrorKind::Other
    };
    Error::Transport {
        method: Method::POST,
        url: Box::new(url),
        kind,
        source: Box::new(err),
    }
}
