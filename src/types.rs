use std::net::{Ipv4Addr, Ipv6Addr};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Type-safe representation of DNS record data.
///
/// Each variant carries only the fields relevant to that record type; the
/// wire format's flat string `content` is split apart exactly once, at the
/// translation boundary, and never re-parsed in business logic.
///
/// Record types without a richer mapping (MX, NS, ALIAS, …) flow through
/// [`Generic`](Self::Generic) so that one exotic record never fails a
/// whole-zone listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content")]
pub enum RecordData {
    /// A record — maps a hostname to an IPv4 address.
    A {
        /// IPv4 address.
        address: Ipv4Addr,
    },

    /// AAAA record — maps a hostname to an IPv6 address.
    AAAA {
        /// IPv6 address.
        address: Ipv6Addr,
    },

    /// CNAME record — alias from one name to another.
    ///
    /// The target is carried verbatim; no trailing-dot normalization is
    /// added or removed.
    CNAME {
        /// Target hostname.
        target: String,
    },

    /// TXT record — arbitrary text data, carried verbatim.
    TXT {
        /// Text content.
        text: String,
    },

    /// SRV record — service locator.
    ///
    /// Service and transport are carried as separate fields here, so the
    /// owning [`Record::name`] is the owner name *without* the
    /// `_service._transport.` prefix.
    SRV {
        /// Service label, without the leading underscore (e.g. `"imaps"`).
        service: String,
        /// Transport label, without the leading underscore (e.g. `"tcp"`).
        transport: String,
        /// Priority (lower = preferred).
        priority: u16,
        /// Weight for load balancing among same-priority targets.
        weight: u16,
        /// TCP/UDP port number.
        port: u16,
        /// Target hostname providing the service.
        target: String,
    },

    /// CAA record — Certificate Authority Authorization.
    CAA {
        /// Issuer critical flag (0 or 128).
        flags: u8,
        /// Property tag (`"issue"`, `"issuewild"`, or `"iodef"`).
        tag: String,
        /// CA domain or reporting URI. May contain embedded spaces; they are
        /// significant and unescaped.
        value: String,
    },

    /// Fallback for record types without a richer translation.
    Generic {
        /// DNS record type string as the provider reports it.
        rtype: String,
        /// Raw record value, verbatim.
        value: String,
    },
}

impl RecordData {
    /// Returns the DNS record type string for this record data
    /// (`"A"`, `"AAAA"`, `"SRV"`, …).
    pub fn record_type(&self) -> &str {
        match self {
            Self::A { .. } => "A",
            Self::AAAA { .. } => "AAAA",
            Self::CNAME { .. } => "CNAME",
            Self::TXT { .. } => "TXT",
            Self::SRV { .. } => "SRV",
            Self::CAA { .. } => "CAA",
            Self::Generic { rtype, .. } => rtype,
        }
    }

    /// Returns the primary value for display (the IP address for A/AAAA,
    /// the target for CNAME/SRV, the text for TXT, and so on).
    pub fn display_value(&self) -> String {
        match self {
            Self::A { address } => address.to_string(),
            Self::AAAA { address } => address.to_string(),
            Self::CNAME { target } | Self::SRV { target, .. } => target.clone(),
            Self::TXT { text } => text.clone(),
            Self::CAA { value, .. } | Self::Generic { value, .. } => value.clone(),
        }
    }
}

/// A normalized DNS record, addressed relative to its zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Provider-assigned record identifier, when known.
    ///
    /// Porkbun does not reliably return the identifier on creation, so a
    /// freshly created record may come back with `id: None` even on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Zone-relative record name; `"@"` denotes the zone apex.
    ///
    /// For SRV records this is the owner name with the
    /// `_service._transport.` prefix stripped — service and transport live
    /// in [`RecordData::SRV`].
    pub name: String,

    /// Time to live. Serialized to the provider as whole seconds; values
    /// below the provider minimum of 600 seconds are raised to 600 before
    /// being sent.
    pub ttl: Duration,

    /// Type-specific record data.
    pub data: RecordData,
}

impl Record {
    /// Best-effort identity key: the (zone-relative name, record type) pair.
    ///
    /// Used to match input records against listed provider records when no
    /// stable identifier is available. DNS names compare case-insensitively,
    /// so the name is folded to ASCII lowercase.
    pub(crate) fn coordinate(&self) -> (String, String) {
        (
            self.name.to_ascii_lowercase(),
            self.data.record_type().to_ascii_uppercase(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_type_strings() {
        assert_eq!(
            RecordData::A {
                address: Ipv4Addr::new(1, 2, 3, 4)
            }
            .record_type(),
            "A"
        );
        assert_eq!(
            RecordData::SRV {
                service: "imaps".into(),
                transport: "tcp".into(),
                priority: 0,
                weight: 0,
                port: 0,
                target: ".".into(),
            }
            .record_type(),
            "SRV"
        );
        assert_eq!(
            RecordData::Generic {
                rtype: "MX".into(),
                value: "mail.example.com".into(),
            }
            .record_type(),
            "MX"
        );
    }

    #[test]
    fn display_values() {
        assert_eq!(
            RecordData::AAAA {
                address: "2001:db8::1".parse().unwrap()
            }
            .display_value(),
            "2001:db8::1"
        );
        assert_eq!(
            RecordData::CAA {
                flags: 0,
                tag: "issue".into(),
                value: "letsencrypt.org".into(),
            }
            .display_value(),
            "letsencrypt.org"
        );
    }

    #[test]
    fn coordinate_folds_name_case() {
        let a = Record {
            id: None,
            name: "WWW".to_string(),
            ttl: Duration::from_secs(600),
            data: RecordData::TXT { text: "x".into() },
        };
        let b = Record {
            id: Some("42".to_string()),
            name: "www".to_string(),
            ttl: Duration::from_secs(300),
            data: RecordData::TXT { text: "y".into() },
        };
        assert_eq!(a.coordinate(), b.coordinate());
    }

    #[test]
    fn coordinate_distinguishes_type() {
        let txt = Record {
            id: None,
            name: "www".to_string(),
            ttl: Duration::from_secs(600),
            data: RecordData::TXT { text: "x".into() },
        };
        let a = Record {
            id: None,
            name: "www".to_string(),
            ttl: Duration::from_secs(600),
            data: RecordData::A {
                address: Ipv4Addr::new(1, 2, 3, 4),
            },
        };
        assert_ne!(txt.coordinate(), a.coordinate());
    }

    #[test]
    fn record_data_serde_round_trip() {
        let data = RecordData::SRV {
            service: "imaps".to_string(),
            transport: "tcp".to_string(),
            priority: 10,
            weight: 1,
            port: 993,
            target: "imap.example.com".to_string(),
        };
        let json = serde_json::to_string(&data).unwrap();
        let back: RecordData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn record_serde_skips_missing_id() {
        let record = Record {
            id: None,
            name: "@".to_string(),
            ttl: Duration::from_secs(600),
            data: RecordData::TXT {
                text: "hello".into(),
            },
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("\"id\""));
    }
}
