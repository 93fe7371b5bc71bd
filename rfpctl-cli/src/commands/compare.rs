//! `rfpctl compare` and `rfpctl proposals` - pass-through viewers for
//! server-computed payloads. No interpretation happens client-side.

use anyhow::Result;
use clap::Parser;
use rfpctl_core::{parse_rfp_id, ApiClient};

#[derive(Parser, Debug)]
pub struct CompareArgs {
    /// RFP id whose proposals should be compared
    #[arg(value_name = "RFP_ID")]
    rfp_id: String,
}

#[derive(Parser, Debug)]
pub struct ProposalsArgs {
    /// RFP id whose raw proposals should be listed
    #[arg(value_name = "RFP_ID")]
    rfp_id: String,
}

pub async fn run_compare(args: CompareArgs, client: &ApiClient) -> Result<()> {
    // The id is free text: it rides as a path segment the server interprets
    let result = client.compare(&args.rfp_id).await?;
    // Rendered verbatim; "no proposals" is whatever the server encoded
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

pub async fn run_proposals(args: ProposalsArgs, client: &ApiClient) -> Result<()> {
    let rfp_id = parse_rfp_id(&args.rfp_id)?;
    let proposals = client.list_proposals(rfp_id).await?;
    println!("{}", serde_json::to_string_pretty(&proposals)?);
    Ok(())
}
