//! # CLI Interface
//!
//! Defines the command-line argument structure for `vela` using `clap`
//! derive. One subcommand per node command, plus `version`. Connection
//! flags are global, so they can sit before or after the subcommand and
//! every one of them can come from the environment instead.

use clap::{Parser, Subcommand};

/// VELA node command-line client.
///
/// A terminal front-end to the VELA gateway library. Every subcommand is
/// one round trip against the configured node's command API. Results are
/// printed to stdout; logs go to stderr.
#[derive(Parser, Debug)]
#[command(
    name = "vela",
    about = "VELA node command-line client",
    version,
    propagate_version = true
)]
pub struct VelaCli {
    /// Connection settings shared by every subcommand.
    #[command(flatten)]
    pub node: NodeArgs,

    /// Log output format: "pretty" or "json".
    #[arg(long, env = "VELA_LOG_FORMAT", default_value = "pretty", global = true)]
    pub log_format: String,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Where the node lives. Defaults mirror the library's own:
/// `http://localhost:9750`.
#[derive(Parser, Debug)]
pub struct NodeArgs {
    /// Node URL scheme, `http` or `https`.
    #[arg(long, env = "VELA_NODE_PROTOCOL", default_value = "http", global = true)]
    pub protocol: String,

    /// Node hostname or address.
    #[arg(long, env = "VELA_NODE_HOST", default_value = "localhost", global = true)]
    pub host: String,

    /// Node command port.
    #[arg(long, env = "VELA_NODE_PORT", default_value_t = 9750, global = true)]
    pub port: u16,

    /// Connect and request timeout in seconds.
    ///
    /// The library waits almost indefinitely by design; a terminal session
    /// should not. Raise this for heavy tangle queries.
    #[arg(
        long,
        env = "VELA_TIMEOUT",
        default_value_t = 60,
        value_name = "SECS",
        global = true
    )]
    pub timeout: u64,
}

/// Top-level subcommands for the `vela` binary.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the node's status summary.
    Status(StatusArgs),
    /// Inspect or change the node's neighbor set.
    #[command(subcommand)]
    Neighbors(NeighborsCommand),
    /// List every tip the node currently knows.
    Tips,
    /// Search for transactions by address, tag, approvee, or bundle.
    Find(FindArgs),
    /// Fetch the raw trytes of transactions by hash.
    Trytes(TrytesArgs),
    /// Check whether transactions are confirmed as of the given tips.
    Inclusion(InclusionArgs),
    /// Run tip selection: ask for a trunk/branch pair to approve.
    Approve(ApproveArgs),
    /// Print version information and exit.
    Version,
}

/// Arguments for the `status` subcommand.
#[derive(Parser, Debug)]
pub struct StatusArgs {
    /// Print the raw `getNodeInfo` response as JSON instead of the summary.
    #[arg(long)]
    pub json: bool,
}

/// Neighbor management subcommands.
#[derive(Subcommand, Debug)]
pub enum NeighborsCommand {
    /// List the node's neighbors and their traffic counters.
    List,
    /// Add neighbors by URI. The change lasts until the node restarts.
    Add(NeighborUris),
    /// Remove previously added neighbors by URI.
    Remove(NeighborUris),
}

/// One or more neighbor URIs.
#[derive(Parser, Debug)]
pub struct NeighborUris {
    /// Neighbor URIs, e.g. `udp://10.0.0.3:14700`.
    #[arg(required = true, value_name = "URI")]
    pub uris: Vec<String>,
}

/// Arguments for the `find` subcommand. Any combination of the four
/// filters may be supplied; each flag is repeatable. How the node combines
/// different filter kinds is the node's contract.
#[derive(Parser, Debug)]
pub struct FindArgs {
    /// An address to match. The checksummed 90-tryte form is accepted and
    /// sent bare.
    #[arg(long = "address", value_name = "HASH")]
    pub addresses: Vec<String>,

    /// A tag to match.
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// A transaction the results must approve.
    #[arg(long = "approvee", value_name = "HASH")]
    pub approvees: Vec<String>,

    /// A bundle hash to match.
    #[arg(long = "bundle", value_name = "HASH")]
    pub bundles: Vec<String>,
}

/// Arguments for the `trytes` subcommand.
#[derive(Parser, Debug)]
pub struct TrytesArgs {
    /// Transaction hashes to fetch.
    #[arg(required = true, value_name = "HASH")]
    pub hashes: Vec<String>,
}

/// Arguments for the `inclusion` subcommand.
#[derive(Parser, Debug)]
pub struct InclusionArgs {
    /// Transaction hashes to check.
    #[arg(required = true, value_name = "HASH")]
    pub transactions: Vec<String>,

    /// A tip (or milestone) defining "as of when". Repeatable.
    #[arg(long = "tip", value_name = "HASH")]
    pub tips: Vec<String>,
}

/// Arguments for the `approve` subcommand.
#[derive(Parser, Debug)]
pub struct ApproveArgs {
    /// How many bundles the tip-selection walk goes back.
    #[arg(long, default_value_t = 3)]
    pub depth: u32,

    /// Transaction hash the returned tips must reference in their past.
    #[arg(long, value_name = "HASH")]
    pub reference: Option<String>,
}
