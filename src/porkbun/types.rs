//! Porkbun wire types.
//!
//! Everything in the Porkbun record format is a string, TTL and priority
//! included; the translation layer ([`super::translate`]) is the only place
//! these strings are parsed.

use serde::{Deserialize, Serialize};

/// Application-level response status, decoded structurally.
///
/// Porkbun reports `"SUCCESS"` or `"ERROR"`; anything else fails JSON
/// decoding (and surfaces as a `Parse` error) instead of being silently
/// mistaken for a failure by a string comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) enum ApiStatus {
    #[serde(rename = "SUCCESS")]
    Success,
    #[serde(rename = "ERROR")]
    Error,
}

/// Credential pair embedded in every request body.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct Credentials {
    pub apikey: String,
    pub secretapikey: String,
}

/// A DNS record as Porkbun returns it.
///
/// The API also returns a free-text `notes` field; it has no bearing on
/// record semantics and is ignored here.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct WireRecord {
    pub content: String,
    /// Provider-assigned identifier. Unreliable on creation.
    #[serde(default)]
    pub id: Option<String>,
    /// Absolute owner name as the provider returns it.
    pub name: String,
    /// String-encoded integer priority; only meaningful for MX/SRV.
    #[serde(default)]
    pub prio: Option<String>,
    /// String-encoded TTL in seconds.
    pub ttl: String,
    #[serde(rename = "type")]
    pub rtype: String,
}

/// Response of `/dns/retrieve/{domain}` and `/dns/retrieveByNameType/…`.
#[derive(Debug, Deserialize)]
pub(crate) struct RecordsResponse {
    pub status: ApiStatus,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub records: Vec<WireRecord>,
}

/// Response of the write endpoints (`create`/`edit`/`delete`).
///
/// The create endpoint is documented to return the new record's id but does
/// not do so reliably; identifier recovery happens by follow-up lookup
/// instead (see `provider.rs`).
#[derive(Debug, Deserialize)]
pub(crate) struct StatusResponse {
    pub status: ApiStatus,
    #[serde(default)]
    pub message: Option<String>,
}

/// Response of `/ping`.
#[derive(Debug, Deserialize)]
pub(crate) struct PingResponse {
    pub status: ApiStatus,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(rename = "yourIp", default)]
    pub your_ip: Option<String>,
}

/// Request body for `/dns/create/{domain}` and `/dns/edit/{domain}/{id}`.
#[derive(Debug, Serialize)]
pub(crate) struct RecordPayload<'a> {
    #[serde(flatten)]
    pub credentials: &'a Credentials,
    /// Zone-relative name; the apex is the empty string on the wire.
    pub name: String,
    #[serde(rename = "type")]
    pub rtype: String,
    pub content: String,
    /// Whole seconds, stringly typed like everything else on this API.
    pub ttl: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prio: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_decodes_structurally() {
        let ok: ApiStatus = serde_json::from_str("\"SUCCESS\"").unwrap();
        assert_eq!(ok, ApiStatus::Success);
        let err: ApiStatus = serde_json::from_str("\"ERROR\"").unwrap();
        assert_eq!(err, ApiStatus::Error);
        // Casing drift must be a decode failure, not a silent mismatch.
        assert!(serde_json::from_str::<ApiStatus>("\"Success\"").is_err());
    }

    #[test]
    fn wire_record_decodes_listing_shape() {
        let json = r#"{
            "id": "106926652",
            "name": "www.example.com",
            "type": "A",
            "content": "1.2.3.4",
            "ttl": "600",
            "prio": "0",
            "notes": ""
        }"#;
        let record: WireRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id.as_deref(), Some("106926652"));
        assert_eq!(record.rtype, "A");
        assert_eq!(record.ttl, "600");
    }

    #[test]
    fn wire_record_tolerates_missing_id_and_prio() {
        let json = r#"{"name":"example.com","type":"TXT","content":"v=spf1","ttl":"300"}"#;
        let record: WireRecord = serde_json::from_str(json).unwrap();
        assert!(record.id.is_none());
        assert!(record.prio.is_none());
    }

    #[test]
    fn payload_flattens_credentials() {
        let credentials = Credentials {
            apikey: "pk1_x".to_string(),
            secretapikey: "sk1_y".to_string(),
        };
        let payload = RecordPayload {
            credentials: &credentials,
            name: String::new(),
            rtype: "TXT".to_string(),
            content: "hello".to_string(),
            ttl: "600".to_string(),
            prio: None,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["apikey"], "pk1_x");
        assert_eq!(json["secretapikey"], "sk1_y");
        assert_eq!(json["name"], "");
        assert!(json.get("prio").is_none());
    }

    #[test]
    fn records_response_defaults_empty() {
        let json = r#"{"status":"SUCCESS"}"#;
        let resp: RecordsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.status, ApiStatus::Success);
        assert!(resp.records.is_empty());
        assert!(resp.message.is_none());
    }
}
