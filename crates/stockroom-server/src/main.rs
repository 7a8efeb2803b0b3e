//! Stockroom - role-gated inventory administration service
//!
//! Mock-auth admin backend: a fixed credential allow-list issues opaque
//! session tokens, a file-backed session store survives restarts, and an
//! in-memory product catalog is gated by the Manager / Store Keeper
//! policy table.
//!
//! ## Architecture
//!
//! - Domain layer: entities, policy table, validation, ports (stockroom-domain)
//! - Application layer: auth and catalog use cases (stockroom-application)
//! - Infrastructure: config, logging, adapters (stockroom-infrastructure)
//! - Server: Rocket transport layer (stockroom-server)

use clap::Parser;
use stockroom_server::run;

/// Command line interface for the Stockroom server
#[derive(Parser, Debug)]
#[command(name = "stockroom")]
#[command(about = "Stockroom - role-gated inventory administration server")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Override the configured listen port
    #[arg(short, long)]
    pub port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    run(cli.config.as_deref(), cli.port).await
}
