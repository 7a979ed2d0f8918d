//! Wire ↔ normalized record translation.
//!
//! The only place the wire format's flat strings are parsed or assembled.
//! One direction per record type, strict on recognized types (a malformed
//! TTL, IP literal, or SRV/CAA content shape is an error), tolerant on
//! unrecognized types (they become [`RecordData::Generic`]).

use std::net::{Ipv4Addr, Ipv6Addr};
use std::time::Duration;

use crate::error::{ProviderError, Result};
use crate::types::{Record, RecordData};

use super::{MIN_TTL, WireRecord};

fn translation_error(record_type: &str, detail: impl Into<String>) -> ProviderError {
    ProviderError::Translation {
        record_type: record_type.to_string(),
        detail: detail.into(),
    }
}

/// Strips the trailing dot from a zone name.
pub(crate) fn trim_zone(zone: &str) -> &str {
    zone.trim_end_matches('.')
}

/// Computes the zone-relative name of an owner name.
///
/// The zone suffix is matched ASCII case-insensitively (standard DNS name
/// comparison); an owner name equal to the zone maps to the apex sentinel
/// `"@"`. Names outside the zone are returned unchanged.
pub(crate) fn relative_name(full: &str, zone: &str) -> String {
    let full = full.trim_end_matches('.');
    let zone = trim_zone(zone);

    if full.eq_ignore_ascii_case(zone) {
        return "@".to_string();
    }

    let suffix_len = zone.len() + 1; // ".zone"
    if full.len() > suffix_len && full.is_char_boundary(full.len() - suffix_len) {
        let (head, tail) = full.split_at(full.len() - suffix_len);
        if tail.starts_with('.') && tail[1..].eq_ignore_ascii_case(zone) {
            return head.to_string();
        }
    }

    full.to_string()
}

/// Maps a zone-relative name to the shape a target endpoint expects.
///
/// Endpoints that follow the root-as-empty convention (create/edit bodies,
/// the `…ByNameType` path segments) get `""` for the apex; otherwise the
/// relative label is passed through verbatim.
pub(crate) fn wire_name(relative: &str, root_as_empty: bool) -> String {
    if root_as_empty && relative == "@" {
        String::new()
    } else {
        relative.to_string()
    }
}

/// Parses the string-seconds TTL field.
pub(crate) fn parse_ttl(ttl: &str, record_type: &str) -> Result<Duration> {
    ttl.trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|_| translation_error(record_type, format!("malformed TTL '{ttl}'")))
}

/// Serializes a TTL for a write request, enforcing the 600 second floor.
pub(crate) fn wire_ttl(ttl: Duration) -> String {
    ttl.max(MIN_TTL).as_secs().to_string()
}

/// Lenient priority parse: a missing or non-numeric `prio` is zero, never an
/// error, so one odd record cannot block a full listing.
fn parse_prio(prio: Option<&str>) -> u16 {
    prio.and_then(|p| p.trim().parse().ok()).unwrap_or(0)
}

/// Translates one wire record into the normalized model.
pub(crate) fn from_wire(wire: &WireRecord, zone: &str) -> Result<Record> {
    let ttl = parse_ttl(&wire.ttl, &wire.rtype)?;
    let id = wire.id.clone().filter(|id| !id.is_empty());

    let (name, data) = match wire.rtype.to_ascii_uppercase().as_str() {
        "A" => {
            let address: Ipv4Addr = wire
                .content
                .trim()
                .parse()
                .map_err(|_| translation_error("A", format!("malformed IPv4 '{}'", wire.content)))?;
            (
                relative_name(&wire.name, zone),
                RecordData::A { address },
            )
        }
        "AAAA" => {
            let address: Ipv6Addr = wire.content.trim().parse().map_err(|_| {
                translation_error("AAAA", format!("malformed IPv6 '{}'", wire.content))
            })?;
            (
                relative_name(&wire.name, zone),
                RecordData::AAAA { address },
            )
        }
        "CNAME" => (
            relative_name(&wire.name, zone),
            RecordData::CNAME {
                target: wire.content.clone(),
            },
        ),
        "TXT" => (
            relative_name(&wire.name, zone),
            RecordData::TXT {
                text: wire.content.clone(),
            },
        ),
        "SRV" => srv_from_wire(wire, zone)?,
        "CAA" => {
            let parts: Vec<&str> = wire.content.splitn(3, ' ').collect();
            if parts.len() != 3 {
                return Err(translation_error(
                    "CAA",
                    format!("expected 'flags tag value', got '{}'", wire.content),
                ));
            }
            let flags: u8 = parts[0].parse().map_err(|_| {
                translation_error("CAA", format!("non-numeric flags '{}'", parts[0]))
            })?;
            (
                relative_name(&wire.name, zone),
                RecordData::CAA {
                    flags,
                    tag: parts[1].to_string(),
                    value: parts[2].to_string(),
                },
            )
        }
        _ => (
            relative_name(&wire.name, zone),
            RecordData::Generic {
                rtype: wire.rtype.to_ascii_uppercase(),
                value: wire.content.clone(),
            },
        ),
    };

    Ok(Record {
        id,
        name,
        ttl,
        data,
    })
}

/// SRV translation: content is `"<weight> <port> <target>"`, priority comes
/// from `prio`, and the owner name carries `_service._transport.` as its
/// first two labels — those move into the data, the rest becomes the name.
fn srv_from_wire(wire: &WireRecord, zone: &str) -> Result<(String, RecordData)> {
    let mut labels = wire.name.splitn(3, '.');
    let (Some(service_label), Some(transport_label)) = (labels.next(), labels.next()) else {
        return Err(translation_error(
            "SRV",
            format!("owner name '{}' lacks service/transport labels", wire.name),
        ));
    };
    let (Some(service), Some(transport)) = (
        service_label.strip_prefix('_'),
        transport_label.strip_prefix('_'),
    ) else {
        return Err(translation_error(
            "SRV",
            format!(
                "owner name '{}' must start with '_service._transport.'",
                wire.name
            ),
        ));
    };
    let rest = labels.next().unwrap_or("");

    let parts: Vec<&str> = wire.content.split(' ').filter(|p| !p.is_empty()).collect();
    if parts.len() != 3 {
        return Err(translation_error(
            "SRV",
            format!("expected 'weight port target', got '{}'", wire.content),
        ));
    }
    let weight: u16 = parts[0]
        .parse()
        .map_err(|_| translation_error("SRV", format!("malformed weight '{}'", parts[0])))?;
    let port: u16 = parts[1]
        .parse()
        .map_err(|_| translation_error("SRV", format!("malformed port '{}'", parts[1])))?;

    let name = if rest.is_empty() {
        "@".to_string()
    } else {
        relative_name(rest, zone)
    };

    Ok((
        name,
        RecordData::SRV {
            service: service.to_string(),
            transport: transport.to_string(),
            priority: parse_prio(wire.prio.as_deref()),
            weight,
            port,
            target: parts[2].to_string(),
        },
    ))
}

/// Assembles the wire `content` and `prio` fields for a write request.
pub(crate) fn wire_content(data: &RecordData) -> (String, Option<String>) {
    match data {
        RecordData::A { address } => (address.to_string(), None),
        RecordData::AAAA { address } => (address.to_string(), None),
        RecordData::CNAME { target } => (target.clone(), None),
        RecordData::TXT { text } => (text.clone(), None),
        RecordData::SRV {
            priority,
            weight,
            port,
            target,
            ..
        } => (
            format!("{weight} {port} {target}"),
            Some(priority.to_string()),
        ),
        RecordData::CAA { flags, tag, value } => (format!("{flags} {tag} {value}"), None),
        RecordData::Generic { value, .. } => (value.clone(), None),
    }
}

/// Builds the record name a write request wants: the zone-relative label with
/// the apex as the empty string, and for SRV the `_service._transport.`
/// prefix re-joined in front of it.
pub(crate) fn request_name(record: &Record) -> String {
    match &record.data {
        RecordData::SRV {
            service, transport, ..
        } => {
            if record.name == "@" || record.name.is_empty() {
                format!("_{service}._{transport}")
            } else {
                format!("_{service}._{transport}.{}", record.name)
            }
        }
        _ => wire_name(&record.name, true),
    }
}
