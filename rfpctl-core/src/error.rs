/// Structured error types for rfpctl-core.
///
/// Uses `thiserror` for better API surface and error composition.
/// The binary crate (rfpctl-cli) can still use `anyhow` for convenience,
/// but library consumers get structured, composable errors.

use thiserror::Error;

/// Main error type for rfpctl-core operations
#[derive(Error, Debug)]
pub enum RfpError {
    /// Transport-level failure (connection refused, timeout, TLS, ...)
    #[error("HTTP request failed: {source}")]
    Http {
        #[from]
        source: reqwest::Error,
    },

    /// Server answered with a non-2xx status
    #[error("server returned {status} for {operation}: {body}")]
    Api {
        operation: String,
        status: u16,
        body: String,
    },

    /// User-supplied RFP id is not an integer
    #[error("invalid RFP id '{input}': expected an integer")]
    InvalidRfpId { input: String },

    /// JSON parsing or serialization failed
    #[error("JSON error at {context}: {source}")]
    Json {
        context: String,
        source: serde_json::Error,
    },

    /// Configuration error
    #[error("configuration error: {reason}")]
    Config { reason: String },
}

/// Result type alias for rfpctl-core operations
pub type Result<T> = std::result::Result<T, RfpError>;

impl RfpError {
    /// Create an API error from an operation name, status and response body
    pub fn api(operation: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        Self::Api {
            operation: operation.into(),
            status,
            body: body.into(),
        }
    }

    /// Create an invalid RFP id error
    pub fn invalid_rfp_id(input: impl Into<String>) -> Self {
        Self::InvalidRfpId {
            input: input.into(),
        }
    }

    /// Create a JSON error with context
    pub fn json(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            context: context.into(),
            source,
        }
    }

    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Whether retrying the same request could plausibly succeed.
    ///
    /// Transport failures and 5xx responses are transient; 4xx responses
    /// and local validation failures are not.
    pub fn is_transient(&self) -> bool {
        match self {
            RfpError::Http { .. } => true,
            RfpError::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }
}
