//! Queries a VELA node and prints its status summary.
//!
//! Run with:
//!   cargo run --example node_status
//!
//! Point it at another node via VELA_NODE_PROTOCOL / VELA_NODE_HOST /
//! VELA_NODE_PORT.

use vela_client::api::VelaClientBuilder;
use vela_client::error::ClientError;

#[tokio::main]
async fn main() -> Result<(), ClientError> {
    let client = VelaClientBuilder::from_env().build()?;

    let info = client.get_node_info().await?;

    println!("node      {} {}", info.app_name, info.app_version);
    println!("endpoint  {}", client.endpoint());
    println!(
        "milestone #{} (solid #{})",
        info.latest_milestone_index, info.latest_solid_subtangle_milestone_index
    );
    println!("neighbors {}", info.neighbors);
    println!("tips      {}", info.tips);

    Ok(())
}
