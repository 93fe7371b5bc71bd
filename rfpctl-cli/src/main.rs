//! rfpctl - terminal client for the RFP management service
//!
//! One-shot subcommands cover every server operation (create/list RFPs,
//! vendor roster, dispatch, proposal comparison); `rfpctl tui` opens the
//! three-pane workflow screen. All state lives on the server - this client
//! holds nothing beyond the current invocation.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use rfpctl_core::{ApiClient, RfpctlConfig};

mod commands;
mod tracing_setup;
mod tui;

#[derive(Parser, Debug)]
#[command(
    name = "rfpctl",
    author,
    version,
    about = "Terminal client for the AI RFP management service",
    long_about = "Draft RFPs, maintain a vendor roster, dispatch RFPs to selected vendors, \
                  and view server-computed proposal comparisons. The server owns all data; \
                  rfpctl is a stateless front end."
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Override the server base URL (also: RFPCTL_BASE_URL)
    #[arg(long, global = true, value_name = "URL")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create and list RFPs
    Rfp(commands::rfp::RfpArgs),
    /// Vendor roster operations (list, add)
    Vendors(commands::vendors::VendorsArgs),
    /// Dispatch an RFP to selected vendors (accepted for background delivery)
    Send(commands::send::SendArgs),
    /// Fetch the server's comparison of proposals for an RFP
    Compare(commands::compare::CompareArgs),
    /// List raw proposals received for an RFP
    Proposals(commands::compare::ProposalsArgs),
    /// Manage rfpctl configuration (init, show, path)
    Config(commands::config::ConfigArgs),
    /// Open the three-pane TUI (composer, roster, comparator)
    Tui,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig {
        debug: cli.debug,
        tui: matches!(cli.command, Commands::Tui),
    })?;

    let mut config = RfpctlConfig::load().context("failed to load configuration")?;
    if let Some(url) = cli.base_url {
        config.server.base_url = url;
    }
    debug!(base_url = %config.server.base_url, "using RFP service");

    match cli.command {
        // Config subcommands never touch the network
        Commands::Config(args) => commands::config::run(args, &config),
        command => {
            let client = ApiClient::with_timeout(
                &config.server.base_url,
                Duration::from_secs(config.client.request_timeout_secs),
            )
            .context("failed to build HTTP client")?;

            match command {
                Commands::Rfp(args) => commands::rfp::run(args, &client).await,
                Commands::Vendors(args) => commands::vendors::run(args, &client).await,
                Commands::Send(args) => commands::send::run(args, &client).await,
                Commands::Compare(args) => commands::compare::run_compare(args, &client).await,
                Commands::Proposals(args) => commands::compare::run_proposals(args, &client).await,
                Commands::Tui => tui::run(client, &config).await,
                Commands::Config(_) => unreachable!("handled above"),
            }
        }
    }
}
