//! Wire-level data model for the RFP management service.
//!
//! The server owns every entity; the client keeps only transient copies.
//! `Vendor` is the one fully typed record (the roster renders its fields) —
//! RFP records, proposals and comparison results stay opaque `Value`s that
//! are displayed verbatim.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, RfpError};

/// A vendor contact eligible to receive RFP dispatches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Request body for POST /rfp. Empty text is allowed and forwarded as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRfpBody {
    pub text: String,
}

/// Response envelope for POST /rfp; the record inside is server-shaped
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRfpResponse {
    pub rfp: Value,
}

/// Request body for POST /vendors. Name and email are unconstrained strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddVendorBody {
    pub name: String,
    pub email: String,
}

/// Request body for POST /vendors/send-rfp.
///
/// Field names and types are part of the wire contract: `vendor_ids` may be
/// empty (a valid dispatch to nobody), `rfp_id` must already be a parsed
/// integer — see [`parse_rfp_id`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendRfpBody {
    pub vendor_ids: Vec<i64>,
    pub rfp_id: i64,
}

/// Acknowledgment of a dispatch request.
///
/// The server processes delivery in the background: this confirms acceptance
/// only, never that any vendor was actually notified.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DispatchAck {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub sent_to: Vec<String>,
}

/// Parse a user-entered RFP id.
///
/// The source system coerced free text to a number and forwarded whatever
/// came out, including not-a-number sentinels; server-side handling of that
/// is unspecified, so non-numeric input is rejected here instead.
pub fn parse_rfp_id(input: &str) -> Result<i64> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| RfpError::invalid_rfp_id(input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_body_is_exactly_text_field() {
        let body = CreateRfpBody {
            text: "Need 10 laptops".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"text": "Need 10 laptops"})
        );

        // Empty submission is legal and keeps the same shape
        let empty = CreateRfpBody {
            text: String::new(),
        };
        assert_eq!(serde_json::to_value(&empty).unwrap(), json!({"text": ""}));
    }

    #[test]
    fn send_body_matches_wire_contract() {
        let body = SendRfpBody {
            vendor_ids: vec![3, 5],
            rfp_id: 7,
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"vendor_ids":[3,5],"rfp_id":7}"#
        );
    }

    #[test]
    fn send_body_allows_empty_selection() {
        let body = SendRfpBody {
            vendor_ids: vec![],
            rfp_id: 7,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"vendor_ids": [], "rfp_id": 7})
        );
    }

    #[test]
    fn vendor_roundtrip() {
        let v: Vendor =
            serde_json::from_value(json!({"id": 3, "name": "Acme", "email": "a@acme.com"}))
                .unwrap();
        assert_eq!(v.id, 3);
        assert_eq!(v.name, "Acme");
        assert_eq!(v.email, "a@acme.com");
    }

    #[test]
    fn dispatch_ack_tolerates_missing_fields() {
        // Older server builds answer with a bare object
        let ack: DispatchAck = serde_json::from_value(json!({})).unwrap();
        assert!(!ack.ok);
        assert!(ack.sent_to.is_empty());

        let ack: DispatchAck =
            serde_json::from_value(json!({"ok": true, "sent_to": ["a@acme.com"]})).unwrap();
        assert!(ack.ok);
        assert_eq!(ack.sent_to, vec!["a@acme.com"]);
    }

    #[test]
    fn parse_rfp_id_accepts_integers_only() {
        assert_eq!(parse_rfp_id("7").unwrap(), 7);
        assert_eq!(parse_rfp_id("  42 ").unwrap(), 42);
        assert!(matches!(
            parse_rfp_id("seven"),
            Err(RfpError::InvalidRfpId { .. })
        ));
        assert!(matches!(parse_rfp_id(""), Err(RfpError::InvalidRfpId { .. })));
        assert!(matches!(
            parse_rfp_id("7.5"),
            Err(RfpError::InvalidRfpId { .. })
        ));
    }
}
