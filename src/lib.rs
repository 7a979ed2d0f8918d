//! # porkbun-dns-provider
//!
//! An async client library for managing DNS records on
//! [Porkbun](https://porkbun.com/) through its v3 JSON API.
//!
//! Records are exposed through a normalized, strongly typed model
//! ([`Record`] / [`RecordData`]) instead of the API's flat string fields:
//! names are zone-relative with `"@"` for the apex, TTLs are [`std::time::Duration`],
//! and SRV / CAA data is parsed into structured fields. The translation layer
//! is strict for recognized record types and falls back to
//! [`RecordData::Generic`] for everything else, so a listing never silently
//! drops a record.
//!
//! ## Feature Flags
//!
//! ### TLS Backend
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation and musl targets.
//!
//! ## Quick Start
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! porkbun-dns-provider = "0.1"
//! ```
//!
//! ```rust,no_run
//! use porkbun_dns_provider::{DnsProvider, PorkbunProvider};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = PorkbunProvider::new(
//!         "pk1_…".to_string(),
//!         "sk1_…".to_string(),
//!     );
//!
//!     // Verify credentials against the remote API
//!     provider.check_credentials().await?;
//!
//!     // List every record of a zone
//!     let records = provider.get_records("example.com").await?;
//!     for record in &records {
//!         println!(
//!             "{} {} -> {}",
//!             record.name,
//!             record.data.record_type(),
//!             record.data.display_value()
//!         );
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Writing Records
//!
//! ```rust,no_run
//! # use porkbun_dns_provider::*;
//! # use std::time::Duration;
//! # async fn example(provider: PorkbunProvider) -> std::result::Result<(), BatchError> {
//! let record = Record {
//!     id: None,
//!     name: "www".to_string(),
//!     ttl: Duration::from_secs(600),
//!     data: RecordData::A { address: "1.2.3.4".parse().unwrap() },
//! };
//!
//! // Upsert: update the record holding (www, A) in place, or create it
//! let applied = provider.set_records("example.com", vec![record]).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Single-shot operations return [`Result<T, ProviderError>`](ProviderError);
//! batch operations ([`DnsProvider::append_records`] and friends) return
//! [`BatchError`] on failure, which carries the records already applied
//! before the batch stopped. Notable variants:
//!
//! - [`ProviderError::Api`] — the service answered with its `"ERROR"` status
//! - [`ProviderError::Translation`] — a record could not be mapped between
//!   the wire format and the normalized model
//! - [`ProviderError::AmbiguousMatch`] — an upsert coordinate matched more
//!   than one existing record
//!
//! There is no internal retry: every record operation is exactly one HTTP
//! round trip, and transient failures surface as [`ProviderError::Network`]
//! or [`ProviderError::Timeout`] for the caller to handle.

mod error;
mod http_client;
mod porkbun;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{BatchError, ProviderError, Result};

// Re-export core trait
pub use traits::DnsProvider;

// Re-export the normalized record model
pub use types::{Record, RecordData};

// Re-export the concrete provider
pub use porkbun::{PorkbunProvider, PorkbunProviderBuilder};
