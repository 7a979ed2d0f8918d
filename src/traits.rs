use async_trait::async_trait;

use crate::error::{BatchError, Result};
use crate::types::Record;

/// The provider-agnostic DNS record interface.
///
/// Zones are passed by name (a trailing dot is tolerated and stripped);
/// records are addressed relative to the zone. All operations run their HTTP
/// round trips sequentially, in input order, with no internal parallelism —
/// ordering within a batch is deterministic, but individual record operations
/// are not atomic with respect to each other or to any listing read that
/// preceded them.
///
/// Batch-shaped operations stop at the first failure and return a
/// [`BatchError`] carrying whatever was applied before it.
///
/// Every method is a plain `Future`: dropping it cancels the operation at
/// the next await point, and the HTTP client's connect/request timeouts bound
/// each round trip.
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// Provider identifier (e.g. `"porkbun"`).
    fn id(&self) -> &'static str;

    /// Lists all records in the zone, in the order the provider returns them
    /// (no sort is guaranteed).
    ///
    /// A record that cannot be translated fails the entire call; record
    /// *types* without a richer mapping are tolerated via
    /// [`RecordData::Generic`](crate::RecordData::Generic).
    async fn get_records(&self, zone: &str) -> Result<Vec<Record>>;

    /// Creates the given records in the zone, one create call per record, in
    /// input order. Returns the records created, each augmented with its
    /// provider identifier when it could be recovered.
    async fn append_records(
        &self,
        zone: &str,
        records: Vec<Record>,
    ) -> std::result::Result<Vec<Record>, BatchError>;

    /// Upserts the given records: for each (name, type) coordinate, updates
    /// the existing record in place or creates a new one. Creates run before
    /// updates, each phase in input order. Records present on the provider
    /// but absent from the input are left untouched — this is never a
    /// full-zone sync.
    async fn set_records(
        &self,
        zone: &str,
        records: Vec<Record>,
    ) -> std::result::Result<Vec<Record>, BatchError>;

    /// Deletes the given records, by identifier when present, otherwise by
    /// (name, type) lookup. A lookup matching several records deletes all of
    /// them; a lookup matching none is a no-op for that input record.
    /// Returns the records actually deleted.
    async fn delete_records(
        &self,
        zone: &str,
        records: Vec<Record>,
    ) -> std::result::Result<Vec<Record>, BatchError>;
}
