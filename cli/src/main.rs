// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # VELA Command-Line Client
//!
//! Entry point for the `vela` binary: a thin terminal front-end to the
//! [`vela_client`] gateway library. Parses arguments, initializes logging,
//! and dispatches exactly one command against the configured node.
//!
//! Results go to stdout — a human-readable summary for `status`, pretty
//! JSON for everything else — and every log line goes to stderr, so output
//! pipes cleanly.
//!
//! The binary supports eight subcommands:
//!
//! - `status`    — node status summary
//! - `neighbors` — list, add, or remove gossip peers
//! - `tips`      — list the node's current tips
//! - `find`      — search transactions by filter
//! - `trytes`    — fetch raw transaction trytes
//! - `inclusion` — check transaction confirmation
//! - `approve`   — run tip selection
//! - `version`   — print build version information

mod cli;
mod logging;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use vela_client::api::VelaClient;
use vela_client::trytes;

use cli::{
    ApproveArgs, Commands, FindArgs, InclusionArgs, NeighborsCommand, NodeArgs, StatusArgs,
    TrytesArgs, VelaCli,
};
use logging::LogFormat;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = VelaCli::parse();

    logging::init_logging(
        "vela=info,vela_client=info",
        LogFormat::from_str_lossy(&cli.log_format),
    );

    match cli.command {
        Commands::Status(args) => show_status(&cli.node, args).await,
        Commands::Neighbors(command) => manage_neighbors(&cli.node, command).await,
        Commands::Tips => list_tips(&cli.node).await,
        Commands::Find(args) => find_transactions(&cli.node, args).await,
        Commands::Trytes(args) => fetch_trytes(&cli.node, args).await,
        Commands::Inclusion(args) => check_inclusion(&cli.node, args).await,
        Commands::Approve(args) => run_tip_selection(&cli.node, args).await,
        Commands::Version => {
            print_version();
            Ok(())
        }
    }
}

/// Builds a gateway client for the configured node. The CLI applies its own
/// timeout to both connect and request; Ctrl+C remains the escape hatch.
fn connect(node: &NodeArgs) -> Result<VelaClient> {
    let timeout = Duration::from_secs(node.timeout);
    VelaClient::builder()
        .protocol(node.protocol.as_str())
        .host(node.host.as_str())
        .port(node.port)
        .connect_timeout(timeout)
        .request_timeout(timeout)
        .build()
        .with_context(|| {
            format!(
                "invalid node endpoint {}://{}:{}",
                node.protocol, node.host, node.port
            )
        })
}

/// `status` — fetches `getNodeInfo` and prints a summary.
async fn show_status(node: &NodeArgs, args: StatusArgs) -> Result<()> {
    let client = connect(node)?;
    let info = client.get_node_info().await.context("getNodeInfo failed")?;

    if args.json {
        return print_json(&info);
    }

    println!("VELA node at {}", client.endpoint());
    println!("  App              : {} {}", info.app_name, info.app_version);
    println!("  Node time        : {}", format_node_time(info.time));
    println!(
        "  Latest milestone : #{} {}",
        info.latest_milestone_index, info.latest_milestone
    );
    println!(
        "  Solid milestone  : #{} {}",
        info.latest_solid_subtangle_milestone_index, info.latest_solid_subtangle_milestone
    );
    println!("  Neighbors        : {}", info.neighbors);
    println!("  Known tips       : {}", info.tips);
    println!("  Queued packets   : {}", info.packets_queue_size);
    println!("  To request       : {}", info.transactions_to_request);

    Ok(())
}

/// `neighbors` — lists, adds, or removes gossip peers.
async fn manage_neighbors(node: &NodeArgs, command: NeighborsCommand) -> Result<()> {
    let client = connect(node)?;

    match command {
        NeighborsCommand::List => {
            let listed = client.get_neighbors().await.context("getNeighbors failed")?;
            print_json(&listed)
        }
        NeighborsCommand::Add(args) => {
            let uris = as_strs(&args.uris);
            let added = client
                .add_neighbors(&uris)
                .await
                .context("addNeighbors failed")?;
            print_json(&added)
        }
        NeighborsCommand::Remove(args) => {
            let uris = as_strs(&args.uris);
            let removed = client
                .remove_neighbors(&uris)
                .await
                .context("removeNeighbors failed")?;
            print_json(&removed)
        }
    }
}

/// `tips` — lists every tip the node currently knows.
async fn list_tips(node: &NodeArgs) -> Result<()> {
    let client = connect(node)?;
    let tips = client.get_tips().await.context("getTips failed")?;
    print_json(&tips)
}

/// `find` — searches transactions by any combination of the four filters.
async fn find_transactions(node: &NodeArgs, args: FindArgs) -> Result<()> {
    let client = connect(node)?;

    // Addresses may be pasted in checksummed 90-tryte form; the node
    // indexes the bare 81-tryte form.
    let addresses: Vec<&str> = args
        .addresses
        .iter()
        .map(|address| trytes::strip_checksum(address))
        .collect();
    let tags = as_strs(&args.tags);
    let approvees = as_strs(&args.approvees);
    let bundles = as_strs(&args.bundles);

    let found = client
        .find_transactions(&addresses, &tags, &approvees, &bundles)
        .await
        .context("findTransactions failed")?;
    print_json(&found)
}

/// `trytes` — fetches raw transaction trytes by hash.
async fn fetch_trytes(node: &NodeArgs, args: TrytesArgs) -> Result<()> {
    let client = connect(node)?;
    let hashes = as_strs(&args.hashes);

    let fetched = client.get_trytes(&hashes).await.context("getTrytes failed")?;
    print_json(&fetched)
}

/// `inclusion` — checks confirmation of transactions as of the given tips.
/// States come back in query order.
async fn check_inclusion(node: &NodeArgs, args: InclusionArgs) -> Result<()> {
    let client = connect(node)?;
    let transactions = as_strs(&args.transactions);
    let tips = as_strs(&args.tips);

    let states = client
        .get_inclusion_states(&transactions, &tips)
        .await
        .context("getInclusionStates failed")?;
    print_json(&states)
}

/// `approve` — asks the node for a trunk/branch pair to approve.
async fn run_tip_selection(node: &NodeArgs, args: ApproveArgs) -> Result<()> {
    let client = connect(node)?;
    let pair = client
        .get_transactions_to_approve(args.depth, args.reference.as_deref())
        .await
        .context("getTransactionsToApprove failed")?;
    print_json(&pair)
}

/// Prints version information to stdout.
fn print_version() {
    println!("vela  {}", env!("CARGO_PKG_VERSION"));
    println!("api   {}", vela_client::transport::API_VERSION);
    println!("rustc {}", rustc_version());
}

/// Returns the Rust compiler version used to build this binary.
fn rustc_version() -> &'static str {
    option_env!("RUSTC_VERSION").unwrap_or("unknown")
}

/// Pretty-prints a response payload to stdout.
fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered =
        serde_json::to_string_pretty(value).context("response could not be rendered as JSON")?;
    println!("{rendered}");
    Ok(())
}

/// Borrows owned argument lists as string slices for the client API.
fn as_strs(values: &[String]) -> Vec<&str> {
    values.iter().map(String::as_str).collect()
}

/// Renders the node's epoch-millisecond clock as UTC, falling back to the
/// raw value when it is out of range.
fn format_node_time(millis: u64) -> String {
    chrono::DateTime::from_timestamp_millis(millis as i64)
        .map(|time| time.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| format!("{millis} ms since epoch"))
}
