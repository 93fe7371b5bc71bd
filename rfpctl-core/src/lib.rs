pub mod api;
pub mod client;
pub mod config;
pub mod error;

pub use api::{parse_rfp_id, AddVendorBody, CreateRfpBody, DispatchAck, SendRfpBody, Vendor};
pub use client::ApiClient;
pub use config::RfpctlConfig;
pub use error::{Result, RfpError};
