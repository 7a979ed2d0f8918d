use serde::{Deserialize, Serialize};

use crate::types::Record;

/// Unified error type for all Porkbun operations.
///
/// Variants map one-to-one onto the failure modes of a single API round trip
/// plus the two failure modes of the reconciliation layer (translation and
/// ambiguous matching). All variants are serializable for structured error
/// reporting.
///
/// There is no retry and no backoff anywhere in this crate: every error
/// propagates to the caller of the operation that produced it, and a failure
/// inside a batch stops further work (see [`BatchError`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection
    /// refused, TLS failure, etc.).
    Network {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out at the transport boundary.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The API answered with a non-2xx HTTP status.
    ///
    /// The raw response body is preserved for diagnostics; Porkbun sometimes
    /// puts useful text in error pages that never decode as JSON.
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// Raw response body text.
        body: String,
    },

    /// The response body is not valid JSON or does not match the expected
    /// shape (including an unrecognized `status` marker).
    Parse {
        /// Details about the decode failure.
        detail: String,
    },

    /// A request body could not be serialized.
    Serialization {
        /// Details about the encode failure.
        detail: String,
    },

    /// The API answered 2xx but the decoded `status` field signals failure.
    Api {
        /// The optional `message` field of the response, when present.
        message: Option<String>,
    },

    /// A wire record could not be mapped to a normalized record
    /// (malformed TTL, IP literal, or SRV/CAA content shape).
    Translation {
        /// DNS record type of the offending record.
        record_type: String,
        /// What was malformed.
        detail: String,
    },

    /// A name+type lookup that must resolve exactly one record matched more
    /// than one. Raised on the update path of `set_records`, where guessing
    /// which record to edit would be worse than failing.
    AmbiguousMatch {
        /// Zone-relative record name.
        name: String,
        /// DNS record type.
        record_type: String,
        /// How many records matched.
        matches: usize,
    },
}

impl ProviderError {
    /// 是否为预期行为（translation 拒绝、业务失败等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::Api { .. } | Self::Translation { .. } | Self::AmbiguousMatch { .. }
        )
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network { detail } => write!(f, "Network error: {detail}"),
            Self::Timeout { detail } => write!(f, "Request timeout: {detail}"),
            Self::HttpStatus { status, body } => {
                write!(f, "Unexpected HTTP status {status}: {body}")
            }
            Self::Parse { detail } => write!(f, "Parse error: {detail}"),
            Self::Serialization { detail } => write!(f, "Serialization error: {detail}"),
            Self::Api { message } => {
                if let Some(msg) = message {
                    write!(f, "Porkbun API error: {msg}")
                } else {
                    write!(f, "Porkbun API error")
                }
            }
            Self::Translation {
                record_type,
                detail,
            } => {
                write!(f, "Cannot translate {record_type} record: {detail}")
            }
            Self::AmbiguousMatch {
                name,
                record_type,
                matches,
            } => {
                write!(
                    f,
                    "Lookup for {record_type} record '{name}' matched {matches} records, expected exactly one"
                )
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;

/// Error returned by batch-shaped operations (append/set/delete).
///
/// The first failure inside a batch stops further work; the records that had
/// already been applied travel with the error so partial success stays
/// visible to the caller.
#[derive(Debug)]
pub struct BatchError {
    /// Records successfully applied before the failure, in input order.
    pub completed: Vec<Record>,
    /// The error that stopped the batch.
    pub source: ProviderError,
}

impl BatchError {
    pub(crate) fn new(completed: Vec<Record>, source: ProviderError) -> Self {
        Self { completed, source }
    }
}

impl std::fmt::Display for BatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (after {} record(s) were applied)",
            self.source,
            self.completed.len()
        )
    }
}

impl std::error::Error for BatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

impl From<ProviderError> for BatchError {
    fn from(source: ProviderError) -> Self {
        Self {
            completed: Vec::new(),
            source,
        }
    }
}
