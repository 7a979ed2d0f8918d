//! Log sanitization utilities
//!
//! Porkbun carries the API key pair in every request body, so bodies must be
//! scrubbed before they reach debug logs. Response bodies are additionally
//! truncated so a large zone listing doesn't flood the log.

/// Maximum number of characters to include in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

/// MSRV-compatible replacement for `str::floor_char_boundary` (stable since 1.91.0).
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a string for safe logging.
///
/// Returns the original string if it's within the limit, otherwise the first
/// `TRUNCATE_LIMIT` characters with a suffix indicating the total length.
pub(crate) fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Mask the `apikey`/`secretapikey` fields of a JSON request body.
///
/// Bodies that don't parse as JSON objects are truncated instead of logged
/// verbatim, on the assumption that anything malformed here could still
/// contain key material.
pub(crate) fn redact_credentials(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(mut value) => {
            if let Some(object) = value.as_object_mut() {
                for key in ["apikey", "secretapikey"] {
                    if let Some(slot) = object.get_mut(key) {
                        *slot = serde_json::Value::String("<redacted>".to_string());
                    }
                }
            }
            truncate_for_log(&value.to_string())
        }
        Err(_) => truncate_for_log(body),
    }
}
