//! `rfpctl rfp` - create and list RFPs

use std::io::Read;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rfpctl_core::ApiClient;

#[derive(Parser, Debug)]
pub struct RfpArgs {
    #[command(subcommand)]
    command: RfpCommand,
}

#[derive(Subcommand, Debug)]
enum RfpCommand {
    /// Create an RFP from free-form text and print the server's record
    Create {
        /// RFP text; pass "-" to read from stdin
        text: String,
    },
    /// List every RFP the server knows about
    List,
}

pub async fn run(args: RfpArgs, client: &ApiClient) -> Result<()> {
    match args.command {
        RfpCommand::Create { text } => {
            let text = if text == "-" {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("failed to read RFP text from stdin")?;
                buf
            } else {
                text
            };

            // Empty text is legal and forwarded as-is; the server decides
            let record = client.create_rfp(&text).await?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        RfpCommand::List => {
            let rfps = client.list_rfps().await?;
            println!("{}", serde_json::to_string_pretty(&rfps)?);
        }
    }
    Ok(())
}
