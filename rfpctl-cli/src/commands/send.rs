//! `rfpctl send` - dispatch an RFP to selected vendors

use anyhow::Result;
use clap::Parser;
use rfpctl_core::{parse_rfp_id, ApiClient};

#[derive(Parser, Debug)]
pub struct SendArgs {
    /// RFP id to dispatch (must be an integer)
    #[arg(long = "rfp-id", value_name = "ID")]
    rfp_id: String,

    /// Vendor id to include; repeatable. No ids at all is a valid
    /// (empty) dispatch the server accepts without error.
    #[arg(long = "vendor-id", value_name = "ID")]
    vendor_ids: Vec<i64>,
}

pub async fn run(args: SendArgs, client: &ApiClient) -> Result<()> {
    let rfp_id = parse_rfp_id(&args.rfp_id)?;

    let ack = client.send_rfp(&args.vendor_ids, rfp_id).await?;

    // Acceptance only: the server delivers in the background, so a good
    // ack does not mean any vendor has been notified yet.
    println!(
        "Dispatch of RFP {rfp_id} accepted for background delivery (ok: {})",
        ack.ok
    );
    if ack.sent_to.is_empty() {
        println!("Queued for: (nobody - empty selection)");
    } else {
        println!("Queued for: {}", ack.sent_to.join(", "));
    }
    Ok(())
}
