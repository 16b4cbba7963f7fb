//! # Client Facade
//!
//! [`VelaClient`] is the front door: one method per node command, plus the
//! convenience variants operators actually reach for. The division of
//! labour is strict. The facade validates hash arguments *before* anything
//! touches the wire, [`crate::commands`] shapes the payloads, and
//! [`crate::transport`] moves them and classifies what comes back.
//!
//! The client holds no per-call state and clones cheaply (the connection
//! pool is shared, not copied), so one instance can serve any number of
//! concurrent tasks.
//!
//! ```no_run
//! use vela_client::api::VelaClient;
//!
//! # async fn demo() -> Result<(), vela_client::error::ClientError> {
//! let client = VelaClient::builder().host("node.vela.example").build()?;
//! let info = client.get_node_info().await?;
//! println!("{} {}", info.app_name, info.app_version);
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::warn;
use url::Url;

use crate::commands::Command;
use crate::error::ClientError;
use crate::pow::LocalPow;
use crate::responses::{
    AddNeighborsResponse, FindTransactionsResponse, InclusionStatesResponse, NeighborsResponse,
    NodeInfo, RemoveNeighborsResponse, TipsResponse, TransactionsToApproveResponse,
    TrytesResponse,
};
use crate::transport::{
    self, HttpTransport, TransportConfig, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_PROTOCOL,
};
use crate::trytes;

// ---------------------------------------------------------------------------
// Environment
// ---------------------------------------------------------------------------

/// Environment variable naming the node scheme (`http`/`https`).
pub const ENV_NODE_PROTOCOL: &str = "VELA_NODE_PROTOCOL";

/// Environment variable naming the node host.
pub const ENV_NODE_HOST: &str = "VELA_NODE_HOST";

/// Environment variable naming the node command port.
pub const ENV_NODE_PORT: &str = "VELA_NODE_PORT";

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Assembles a [`VelaClient`] from parts, every one of them optional.
pub struct VelaClientBuilder {
    config: TransportConfig,
    local_pow: Option<Arc<dyn LocalPow>>,
}

impl VelaClientBuilder {
    /// Starts from the defaults: `http://localhost:9750`, generous timeouts,
    /// no local proof-of-work.
    pub fn new() -> Self {
        Self {
            config: TransportConfig::default(),
            local_pow: None,
        }
    }

    /// Starts from the environment instead: `VELA_NODE_PROTOCOL`,
    /// `VELA_NODE_HOST` and `VELA_NODE_PORT`, each falling back to its
    /// default (with a warning) when unset or unusable.
    pub fn from_env() -> Self {
        let config = TransportConfig {
            protocol: env_or(ENV_NODE_PROTOCOL, DEFAULT_PROTOCOL),
            host: env_or(ENV_NODE_HOST, DEFAULT_HOST),
            port: env_port_or(ENV_NODE_PORT, DEFAULT_PORT),
            ..TransportConfig::default()
        };

        Self {
            config,
            local_pow: None,
        }
    }

    /// Node URL scheme, `http` or `https`.
    pub fn protocol(mut self, protocol: impl Into<String>) -> Self {
        self.config.protocol = protocol.into();
        self
    }

    /// Node hostname or address.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// Node command port.
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// TCP connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Whole-request timeout.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.config.request_timeout = timeout;
        self
    }

    /// Client-side proof-of-work implementation, for callers that attach
    /// transactions themselves.
    pub fn local_pow(mut self, pow: Arc<dyn LocalPow>) -> Self {
        self.local_pow = Some(pow);
        self
    }

    /// Resolves the endpoint and builds the connection pool. Fails if the
    /// configured parts do not form a valid URL.
    pub fn build(self) -> Result<VelaClient, ClientError> {
        let transport = HttpTransport::new(&self.config)?;
        Ok(VelaClient {
            transport,
            config: self.config,
            local_pow: self.local_pow,
        })
    }
}

impl Default for VelaClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for VelaClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VelaClientBuilder")
            .field("config", &self.config)
            .field("local_pow", &self.local_pow.is_some())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Gateway to one VELA node's command API.
#[derive(Clone)]
pub struct VelaClient {
    transport: HttpTransport,
    config: TransportConfig,
    local_pow: Option<Arc<dyn LocalPow>>,
}

impl VelaClient {
    /// Entry point: `VelaClient::builder().host(...).build()`.
    pub fn builder() -> VelaClientBuilder {
        VelaClientBuilder::new()
    }

    /// The node URL every command is posted to.
    pub fn endpoint(&self) -> &Url {
        self.transport.endpoint()
    }

    /// The transport configuration this client was built from.
    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    /// The configured local proof-of-work implementation, if any. The
    /// command surface never calls it; it is held for the attachment
    /// layers above this crate.
    pub fn local_pow(&self) -> Option<&dyn LocalPow> {
        self.local_pow.as_deref()
    }

    /// One command, one POST, one classified outcome.
    async fn call<T: DeserializeOwned>(&self, command: Command) -> Result<T, ClientError> {
        let response = self.transport.execute(&command).await?;
        transport::unpack(response).await
    }

    // -----------------------------------------------------------------------
    // Node administration
    // -----------------------------------------------------------------------

    /// `getNodeInfo` — the node's status summary.
    pub async fn get_node_info(&self) -> Result<NodeInfo, ClientError> {
        self.call(Command::node_info()).await
    }

    /// `getNeighbors` — the node's gossip peers and their counters.
    pub async fn get_neighbors(&self) -> Result<NeighborsResponse, ClientError> {
        self.call(Command::neighbors()).await
    }

    /// `addNeighbors` — add peers by URI. The change lasts until the node
    /// restarts.
    pub async fn add_neighbors(&self, uris: &[&str]) -> Result<AddNeighborsResponse, ClientError> {
        self.call(Command::add_neighbors(uris)).await
    }

    /// `removeNeighbors` — remove peers by URI.
    pub async fn remove_neighbors(
        &self,
        uris: &[&str],
    ) -> Result<RemoveNeighborsResponse, ClientError> {
        self.call(Command::remove_neighbors(uris)).await
    }

    // -----------------------------------------------------------------------
    // Tangle queries
    // -----------------------------------------------------------------------

    /// `getTips` — every tip the node currently knows.
    pub async fn get_tips(&self) -> Result<TipsResponse, ClientError> {
        self.call(Command::tips()).await
    }

    /// `findTransactions` — search by any combination of the four filters.
    /// Empty slices mean "filter absent". How the node combines several
    /// filters is its contract, not ours.
    pub async fn find_transactions(
        &self,
        addresses: &[&str],
        tags: &[&str],
        approvees: &[&str],
        bundles: &[&str],
    ) -> Result<FindTransactionsResponse, ClientError> {
        self.call(Command::find_transactions(addresses, tags, approvees, bundles))
            .await
    }

    /// `findTransactions` by address. Checksummed 90-tryte addresses are
    /// accepted and sent in their bare 81-tryte form, since that is the
    /// form the node indexes.
    pub async fn find_transactions_by_addresses(
        &self,
        addresses: &[&str],
    ) -> Result<FindTransactionsResponse, ClientError> {
        let bare: Vec<&str> = addresses
            .iter()
            .map(|address| trytes::strip_checksum(address))
            .collect();
        self.find_transactions(&bare, &[], &[], &[]).await
    }

    /// `findTransactions` by digest. Digests travel in the tag filter.
    pub async fn find_transactions_by_digests(
        &self,
        digests: &[&str],
    ) -> Result<FindTransactionsResponse, ClientError> {
        self.find_transactions(&[], digests, &[], &[]).await
    }

    /// `findTransactions` by approvee.
    pub async fn find_transactions_by_approvees(
        &self,
        approvees: &[&str],
    ) -> Result<FindTransactionsResponse, ClientError> {
        self.find_transactions(&[], &[], approvees, &[]).await
    }

    /// `findTransactions` by bundle hash.
    pub async fn find_transactions_by_bundles(
        &self,
        bundles: &[&str],
    ) -> Result<FindTransactionsResponse, ClientError> {
        self.find_transactions(&[], &[], &[], bundles).await
    }

    // -----------------------------------------------------------------------
    // Confirmation and content
    // -----------------------------------------------------------------------

    /// `getInclusionStates` — whether each transaction is confirmed as of
    /// the given tips. Both arguments must be well-formed 81-tryte hashes;
    /// malformed input fails here, before any request is made.
    pub async fn get_inclusion_states(
        &self,
        transactions: &[&str],
        tips: &[&str],
    ) -> Result<InclusionStatesResponse, ClientError> {
        ensure_hashes("transactions", transactions)?;
        ensure_hashes("tips", tips)?;
        self.call(Command::inclusion_states(transactions, tips)).await
    }

    /// `getTrytes` — raw transaction trytes by hash. Malformed hashes fail
    /// here, before any request is made.
    pub async fn get_trytes(&self, hashes: &[&str]) -> Result<TrytesResponse, ClientError> {
        ensure_hashes("hashes", hashes)?;
        self.call(Command::trytes(hashes)).await
    }

    /// `getTransactionsToApprove` — tip selection. `reference`, when given,
    /// anchors the walk so the returned pair approves it; when `None` it is
    /// omitted from the request entirely.
    pub async fn get_transactions_to_approve(
        &self,
        depth: u32,
        reference: Option<&str>,
    ) -> Result<TransactionsToApproveResponse, ClientError> {
        self.call(Command::transactions_to_approve(depth, reference))
            .await
    }
}

impl fmt::Debug for VelaClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VelaClient")
            .field("endpoint", &self.transport.endpoint().as_str())
            .field("local_pow", &self.local_pow.is_some())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Gate for hash-taking commands: reject before a command is even built.
fn ensure_hashes(argument: &'static str, values: &[&str]) -> Result<(), ClientError> {
    if trytes::is_array_of_hashes(values) {
        Ok(())
    } else {
        Err(ClientError::InvalidHashes { argument })
    }
}

/// Environment lookup with a warned fallback.
fn env_or(name: &str, fallback: &str) -> String {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => value,
        _ => {
            warn!(
                variable = name,
                fallback, "environment variable unset, using default"
            );
            fallback.to_string()
        }
    }
}

/// Like [`env_or`] but parses a port, warning on garbage as well.
fn env_port_or(name: &str, fallback: u16) -> u16 {
    match std::env::var(name) {
        Ok(value) => match value.parse::<u16>() {
            Ok(port) => port,
            Err(_) => {
                warn!(
                    variable = name,
                    value, fallback, "environment variable is not a port, using default"
                );
                fallback
            }
        },
        Err(_) => {
            warn!(
                variable = name,
                fallback, "environment variable unset, using default"
            );
            fallback
        }
    }
}
