//! # Node Commands
//!
//! Typed builders for the VELA node's command protocol. Every request body
//! is a JSON object whose `command` field names the operation — the node
//! dispatches on that string, so the spellings here are wire contract, not
//! style.
//!
//! ## Command Index
//!
//! | Command                    | Purpose                                   |
//! |----------------------------|-------------------------------------------|
//! | `getNodeInfo`              | Node software/tangle status summary       |
//! | `getNeighbors`             | Peers the node gossips with               |
//! | `addNeighbors`             | Add peers by URI                          |
//! | `removeNeighbors`          | Remove peers by URI                       |
//! | `getTips`                  | Unconfirmed transactions (approval targets)|
//! | `findTransactions`         | Search by address/tag/approvee/bundle     |
//! | `getInclusionStates`       | Confirmation state of transactions        |
//! | `getTrytes`                | Raw transaction trytes by hash            |
//! | `getTransactionsToApprove` | Tip selection for a new transaction       |
//!
//! Builders are pure constructors: they never validate and never fail.
//! Format validation for hash inputs happens at the facade, before the
//! command is even built (see [`crate::api`]).

use serde::{Deserialize, Serialize};

/// A single command payload for the node, immutable once built.
///
/// Serializes to the node's wire shape: the variant name becomes the
/// `command` discriminator and the remaining fields sit beside it in the
/// same JSON object. Optional fields are *omitted* when absent — never sent
/// as `null` or as an empty value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command")]
pub enum Command {
    /// Ask the node for its status summary.
    #[serde(rename = "getNodeInfo")]
    GetNodeInfo,

    /// List the node's configured neighbors and their traffic counters.
    #[serde(rename = "getNeighbors")]
    GetNeighbors,

    /// Add neighbors by URI (e.g. `udp://10.0.0.3:14700`).
    #[serde(rename = "addNeighbors")]
    AddNeighbors {
        /// Neighbor URIs to add.
        uris: Vec<String>,
    },

    /// Remove previously added neighbors by URI.
    #[serde(rename = "removeNeighbors")]
    RemoveNeighbors {
        /// Neighbor URIs to remove.
        uris: Vec<String>,
    },

    /// List the node's current tips.
    #[serde(rename = "getTips")]
    GetTips,

    /// Search for transactions by any combination of the four filters.
    ///
    /// Each filter travels as its own field and is omitted entirely when
    /// not supplied. Whether the node combines supplied filters with AND or
    /// OR is the node's contract — nothing in this client assumes either.
    #[serde(rename = "findTransactions")]
    FindTransactions {
        /// Addresses to match (bare 81-tryte form).
        #[serde(default, skip_serializing_if = "Option::is_none")]
        addresses: Option<Vec<String>>,
        /// Tags to match.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        tags: Option<Vec<String>>,
        /// Transactions that must be approved by the results.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        approvees: Option<Vec<String>>,
        /// Bundle hashes to match.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bundles: Option<Vec<String>>,
    },

    /// Ask whether each transaction is confirmed as of the given tips.
    #[serde(rename = "getInclusionStates")]
    GetInclusionStates {
        /// Transaction hashes to check.
        transactions: Vec<String>,
        /// Tips (including milestones) defining "as of when".
        tips: Vec<String>,
    },

    /// Fetch the raw trytes of transactions by hash.
    #[serde(rename = "getTrytes")]
    GetTrytes {
        /// Transaction hashes to fetch.
        hashes: Vec<String>,
    },

    /// Run tip selection: returns a trunk/branch pair to approve.
    #[serde(rename = "getTransactionsToApprove")]
    GetTransactionsToApprove {
        /// How many bundles the random walk traverses back before selecting.
        depth: u32,
        /// Optional transaction hash anchoring the walk, so the returned
        /// tips reference it in their past. Omitted from the wire when
        /// absent.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        reference: Option<String>,
    },
}

impl Command {
    /// Builds a `getNodeInfo` command.
    pub fn node_info() -> Self {
        Command::GetNodeInfo
    }

    /// Builds a `getNeighbors` command.
    pub fn neighbors() -> Self {
        Command::GetNeighbors
    }

    /// Builds an `addNeighbors` command for the given URIs.
    pub fn add_neighbors(uris: &[&str]) -> Self {
        Command::AddNeighbors { uris: owned(uris) }
    }

    /// Builds a `removeNeighbors` command for the given URIs.
    pub fn remove_neighbors(uris: &[&str]) -> Self {
        Command::RemoveNeighbors { uris: owned(uris) }
    }

    /// Builds a `getTips` command.
    pub fn tips() -> Self {
        Command::GetTips
    }

    /// Builds a `findTransactions` command carrying whichever filters were
    /// supplied. An empty slice means "filter absent" and does not appear
    /// in the payload at all.
    pub fn find_transactions(
        addresses: &[&str],
        tags: &[&str],
        approvees: &[&str],
        bundles: &[&str],
    ) -> Self {
        Command::FindTransactions {
            addresses: non_empty(addresses),
            tags: non_empty(tags),
            approvees: non_empty(approvees),
            bundles: non_empty(bundles),
        }
    }

    /// Builds a `getInclusionStates` command.
    pub fn inclusion_states(transactions: &[&str], tips: &[&str]) -> Self {
        Command::GetInclusionStates {
            transactions: owned(transactions),
            tips: owned(tips),
        }
    }

    /// Builds a `getTrytes` command.
    pub fn trytes(hashes: &[&str]) -> Self {
        Command::GetTrytes {
            hashes: owned(hashes),
        }
    }

    /// Builds a `getTransactionsToApprove` command. A `None` reference is
    /// omitted from the payload entirely.
    pub fn transactions_to_approve(depth: u32, reference: Option<&str>) -> Self {
        Command::GetTransactionsToApprove {
            depth,
            reference: reference.map(str::to_string),
        }
    }

    /// The wire discriminator for this command, mainly for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Command::GetNodeInfo => "getNodeInfo",
            Command::GetNeighbors => "getNeighbors",
            Command::AddNeighbors { .. } => "addNeighbors",
            Command::RemoveNeighbors { .. } => "removeNeighbors",
            Command::GetTips => "getTips",
            Command::FindTransactions { .. } => "findTransactions",
            Command::GetInclusionStates { .. } => "getInclusionStates",
            Command::GetTrytes { .. } => "getTrytes",
            Command::GetTransactionsToApprove { .. } => "getTransactionsToApprove",
        }
    }
}

/// Clones a borrowed slice into owned strings for the payload.
fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Empty slice → absent field; anything else → owned copy.
fn non_empty(items: &[&str]) -> Option<Vec<String>> {
    if items.is_empty() {
        None
    } else {
        Some(owned(items))
    }
}
