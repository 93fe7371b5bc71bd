//! HTTP client for the RFP management service.
//!
//! Thin typed wrapper over `reqwest`: one method per server operation, no
//! retries, no caching. Failures come back as structured [`RfpError`]s; the
//! caller decides what (if anything) to do about them.

use std::time::Duration;

use reqwest::{Client, Response};
use serde_json::Value;
use tracing::debug;

use crate::api::{AddVendorBody, CreateRfpBody, CreateRfpResponse, DispatchAck, SendRfpBody, Vendor};
use crate::error::{Result, RfpError};

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client for the RFP service REST API
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given base URL (e.g. `http://localhost:8000`)
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a client with an explicit request timeout
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    /// The base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Create an RFP from free-form text and return the server's full record.
    ///
    /// The record is opaque: the server attaches derived fields (title,
    /// parsed structure) that are passed through for display untouched.
    pub async fn create_rfp(&self, text: &str) -> Result<Value> {
        debug!(len = text.len(), "creating RFP");
        let body = CreateRfpBody {
            text: text.to_string(),
        };
        let resp = self.http.post(self.url("/rfp")).json(&body).send().await?;
        let resp = check("create rfp", resp).await?;
        let envelope: CreateRfpResponse = resp.json().await?;
        Ok(envelope.rfp)
    }

    /// List every RFP the server knows about (opaque records)
    pub async fn list_rfps(&self) -> Result<Vec<Value>> {
        let resp = self.http.get(self.url("/rfp")).send().await?;
        let resp = check("list rfps", resp).await?;
        Ok(resp.json().await?)
    }

    /// Fetch the full vendor roster. Always a complete set, never a page.
    pub async fn list_vendors(&self) -> Result<Vec<Vendor>> {
        let resp = self.http.get(self.url("/vendors")).send().await?;
        let resp = check("list vendors", resp).await?;
        Ok(resp.json().await?)
    }

    /// Add a vendor. The response body is unconsumed: callers re-fetch the
    /// roster afterwards rather than patching it incrementally.
    pub async fn add_vendor(&self, name: &str, email: &str) -> Result<()> {
        debug!(name, email, "adding vendor");
        let body = AddVendorBody {
            name: name.to_string(),
            email: email.to_string(),
        };
        let resp = self
            .http
            .post(self.url("/vendors"))
            .json(&body)
            .send()
            .await?;
        check("add vendor", resp).await?;
        Ok(())
    }

    /// Dispatch an RFP to a set of vendors.
    ///
    /// The server queues delivery in the background; the returned ack means
    /// the request was accepted, not that any vendor has been notified.
    /// An empty `vendor_ids` slice is a valid dispatch.
    pub async fn send_rfp(&self, vendor_ids: &[i64], rfp_id: i64) -> Result<DispatchAck> {
        debug!(?vendor_ids, rfp_id, "dispatching RFP");
        let body = SendRfpBody {
            vendor_ids: vendor_ids.to_vec(),
            rfp_id,
        };
        let resp = self
            .http
            .post(self.url("/vendors/send-rfp"))
            .json(&body)
            .send()
            .await?;
        let resp = check("send rfp", resp).await?;
        Ok(resp.json().await?)
    }

    /// Fetch the server-computed comparison for an RFP's proposals.
    ///
    /// The id is free text: it becomes a path segment and the server
    /// interprets it, so non-numeric input is forwarded, not rejected.
    /// The payload is server-shaped and rendered verbatim; "no proposals"
    /// is whatever the server encodes it as, with no client special case.
    pub async fn compare(&self, rfp_id: &str) -> Result<Value> {
        let resp = self
            .http
            .get(self.url(&format!("/compare/{}", urlencoding::encode(rfp_id))))
            .send()
            .await?;
        let resp = check("compare proposals", resp).await?;
        Ok(resp.json().await?)
    }

    /// List raw proposals received for an RFP (opaque records)
    pub async fn list_proposals(&self, rfp_id: i64) -> Result<Vec<Value>> {
        let resp = self
            .http
            .get(self.url(&format!("/proposals/{rfp_id}")))
            .send()
            .await?;
        let resp = check("list proposals", resp).await?;
        Ok(resp.json().await?)
    }
}

/// Turn a non-2xx response into a structured API error
async fn check(operation: &str, resp: Response) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(RfpError::api(operation, status.as_u16(), body))
}
