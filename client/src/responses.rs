//! # Response Payloads
//!
//! Typed views of the node's JSON replies, one struct per command. Field
//! names follow the node's camelCase wire contract via serde renames, so
//! the Rust side stays snake_case.
//!
//! Every reply carries a `duration` — the node-side processing time in
//! milliseconds. It is diagnostic only; nothing in this crate acts on it.

use serde::{Deserialize, Serialize};

/// Status summary returned by `getNodeInfo`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeInfo {
    /// Node software name, e.g. `VELA`.
    pub app_name: String,
    /// Node software version.
    pub app_version: String,
    /// Hash of the latest milestone the node has seen.
    pub latest_milestone: String,
    pub latest_milestone_index: u32,
    /// Hash of the latest milestone with a fully solid past cone. Inclusion
    /// queries are answered relative to this one.
    pub latest_solid_subtangle_milestone: String,
    pub latest_solid_subtangle_milestone_index: u32,
    /// Number of connected neighbors.
    pub neighbors: u32,
    pub packets_queue_size: u32,
    /// Node clock, milliseconds since the Unix epoch.
    pub time: u64,
    /// Number of tips currently known.
    pub tips: u32,
    pub transactions_to_request: u32,
    pub duration: u64,
}

/// One gossip peer, as reported by `getNeighbors`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Neighbor {
    /// Peer address, e.g. `10.0.0.3:14700`.
    pub address: String,
    pub number_of_all_transactions: u64,
    pub number_of_invalid_transactions: u64,
    pub number_of_new_transactions: u64,
    /// Transport scheme the neighbor was added with (`udp` or `tcp`).
    pub connection_type: String,
}

/// Reply to `getNeighbors`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NeighborsResponse {
    pub neighbors: Vec<Neighbor>,
    pub duration: u64,
}

/// Reply to `addNeighbors`: how many URIs the node actually added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddNeighborsResponse {
    pub added_neighbors: u32,
    pub duration: u64,
}

/// Reply to `removeNeighbors`: how many URIs the node actually removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveNeighborsResponse {
    pub removed_neighbors: u32,
    pub duration: u64,
}

/// Reply to `getTips`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TipsResponse {
    pub hashes: Vec<String>,
    pub duration: u64,
}

/// Reply to `findTransactions`: hashes matching the supplied filters. An
/// empty list is a legitimate "nothing matched", not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindTransactionsResponse {
    pub hashes: Vec<String>,
    pub duration: u64,
}

/// Reply to `getInclusionStates`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InclusionStatesResponse {
    /// One flag per queried transaction, in query order.
    pub states: Vec<bool>,
    pub duration: u64,
}

/// Reply to `getTrytes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrytesResponse {
    /// Raw transaction trytes, one entry per queried hash, in query order.
    pub trytes: Vec<String>,
    pub duration: u64,
}

/// Reply to `getTransactionsToApprove`: the trunk/branch pair a new
/// transaction should reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionsToApproveResponse {
    pub trunk_transaction: String,
    pub branch_transaction: String,
    pub duration: u64,
}
