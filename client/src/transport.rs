//! # HTTP Transport
//!
//! One node, one connection pool, one protocol version. Every command
//! travels as a `POST` to the node root with the `X-VELA-API-Version: 1`
//! header; the header set is composed once at construction and applied to
//! every request by the underlying client, so no call site can forget it.
//!
//! ## Status Contract
//!
//! The node speaks a narrow dialect of HTTP, and [`unpack`] holds the whole
//! mapping:
//!
//! | Status        | Meaning                        | Result                          |
//! |---------------|--------------------------------|---------------------------------|
//! | 200           | command accepted               | decoded payload                 |
//! | 400           | node rejected the command      | [`ClientError::BadRequest`]     |
//! | 401, 500      | node refused the call          | [`ClientError::Access`]         |
//! | anything else | outside the node's contract    | [`ClientError::UnexpectedStatus`]|
//!
//! Failures before any status exists (refused connection, timeout, broken
//! stream) surface as [`ClientError::Transport`].

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, warn};
use url::Url;

use crate::commands::Command;
use crate::error::ClientError;

// ---------------------------------------------------------------------------
// Wire constants
// ---------------------------------------------------------------------------

/// Protocol version header, lowercase as it travels on the wire. Appears to
/// the node as `X-VELA-API-Version`.
pub const API_VERSION_HEADER: &str = "x-vela-api-version";

/// The one protocol version this client speaks.
pub const API_VERSION: &str = "1";

/// Default node scheme.
pub const DEFAULT_PROTOCOL: &str = "http";

/// Default node host.
pub const DEFAULT_HOST: &str = "localhost";

/// Default node command port.
pub const DEFAULT_PORT: u16 = 9750;

/// Default connect and request timeout. Heavy tangle queries can run for
/// minutes, so the client waits rather than second-guessing the node.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5000;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Where the node lives and how long we wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    /// URL scheme, `http` or `https`.
    pub protocol: String,
    /// Node hostname or address.
    pub host: String,
    /// Node command port.
    pub port: u16,
    /// TCP connect timeout.
    pub connect_timeout: Duration,
    /// Whole-request timeout, connect included.
    pub request_timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            protocol: DEFAULT_PROTOCOL.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            connect_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl TransportConfig {
    /// Assembles the node endpoint URL from protocol, host and port.
    pub fn endpoint(&self) -> Result<Url, url::ParseError> {
        Url::parse(&format!("{}://{}:{}", self.protocol, self.host, self.port))
    }
}

// ---------------------------------------------------------------------------
// Transport
// ---------------------------------------------------------------------------

/// The HTTP adapter between command values and the node.
///
/// Owns a pooled [`reqwest::Client`] carrying the version header as a
/// default, plus the resolved endpoint. Cheap to share: the facade clones
/// the inner client handle, never the pool.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
    endpoint: Url,
}

impl HttpTransport {
    /// Builds the transport: resolves the endpoint, composes the default
    /// header set and configures the connection pool.
    pub fn new(config: &TransportConfig) -> Result<Self, ClientError> {
        let endpoint = config.endpoint()?;

        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static(API_VERSION_HEADER),
            HeaderValue::from_static(API_VERSION),
        );

        let http = Client::builder()
            .default_headers(headers)
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()?;

        info!(node = %endpoint, "vela command gateway initialised");

        Ok(Self { http, endpoint })
    }

    /// The node URL this transport posts to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Sends one command to the node. Exactly one POST per call; any I/O
    /// failure comes back as [`ClientError::Transport`].
    pub async fn execute(&self, command: &Command) -> Result<reqwest::Response, ClientError> {
        debug!(command = command.name(), "dispatching command");

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(command)
            .send()
            .await
            .map_err(|err| {
                error!(node = %self.endpoint, %err, "node not reachable");
                ClientError::from(err)
            })?;

        Ok(response)
    }
}

// ---------------------------------------------------------------------------
// Response classification
// ---------------------------------------------------------------------------

/// Turns a raw node response into a typed payload or a classified error.
///
/// This is the single place HTTP statuses are interpreted; the facade never
/// sees a status code. A 200 body that fails to decode is a transport
/// failure, not a success.
pub(crate) async fn unpack<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status().as_u16();
    match status {
        200 => Ok(response.json::<T>().await?),
        400 => {
            let message = response.text().await?;
            Err(ClientError::BadRequest { message })
        }
        401 | 500 => {
            let message = response.text().await?;
            Err(ClientError::Access { status, message })
        }
        other => {
            let body = response.text().await?;
            warn!(status = other, "node answered outside its status contract");
            Err(ClientError::UnexpectedStatus {
                status: other,
                body,
            })
        }
    }
}
