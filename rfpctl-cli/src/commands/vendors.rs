//! `rfpctl vendors` - roster operations

use anyhow::Result;
use clap::{Parser, Subcommand};
use rfpctl_core::{ApiClient, Vendor};

#[derive(Parser, Debug)]
pub struct VendorsArgs {
    #[command(subcommand)]
    command: VendorsCommand,
}

#[derive(Subcommand, Debug)]
enum VendorsCommand {
    /// List the full vendor roster
    List,
    /// Add a vendor, then print the refreshed roster
    Add {
        /// Vendor display name
        #[arg(long)]
        name: String,

        /// Contact email for RFP dispatches
        #[arg(long)]
        email: String,
    },
}

pub async fn run(args: VendorsArgs, client: &ApiClient) -> Result<()> {
    match args.command {
        VendorsCommand::List => {
            print_roster(&client.list_vendors().await?);
        }
        VendorsCommand::Add { name, email } => {
            client.add_vendor(&name, &email).await?;
            // The add response is unconsumed; the roster is the truth
            print_roster(&client.list_vendors().await?);
        }
    }
    Ok(())
}

fn print_roster(vendors: &[Vendor]) {
    if vendors.is_empty() {
        println!("No vendors on the roster yet.");
        return;
    }
    for v in vendors {
        println!("{:>6}  {}  <{}>", v.id, v.name, v.email);
    }
}
