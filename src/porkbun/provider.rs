//! [`DnsProvider`] implementation for Porkbun.
//!
//! Each record operation maps to one HTTP round trip against the v3 JSON
//! API; batch methods run them sequentially in input order and stop at the
//! first failure, reporting partial progress through [`BatchError`].

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::{BatchError, ProviderError, Result};
use crate::traits::DnsProvider;
use crate::types::Record;

use super::http::ensure_success;
use super::translate::{self, request_name, trim_zone, wire_ttl};
use super::{
    Credentials, PingResponse, PorkbunProvider, RecordPayload, RecordsResponse, StatusResponse,
};

fn payload<'a>(credentials: &'a Credentials, record: &Record) -> RecordPayload<'a> {
    let (content, prio) = translate::wire_content(&record.data);
    RecordPayload {
        credentials,
        name: request_name(record),
        rtype: record.data.record_type().to_string(),
        content,
        ttl: wire_ttl(record.ttl),
        prio,
    }
}

impl PorkbunProvider {
    /// Verifies the configured credentials against the `/ping` endpoint.
    ///
    /// Returns the caller's public IP as reported by the service, when it
    /// includes one.
    ///
    /// # Errors
    /// * [`ProviderError::Api`] — the credentials were rejected
    /// * network / decode errors as for any other call
    pub async fn check_credentials(&self) -> Result<Option<String>> {
        let response: PingResponse = self.post("/ping", &self.credentials()).await?;
        ensure_success(response.status, response.message)?;
        Ok(response.your_ip)
    }

    /// Fetches and translates every record of `zone`.
    async fn retrieve_all(&self, zone: &str) -> Result<Vec<Record>> {
        let endpoint = format!("/dns/retrieve/{zone}");
        let response: RecordsResponse = self.post(&endpoint, &self.credentials()).await?;
        ensure_success(response.status, response.message)?;

        response
            .records
            .iter()
            .map(|wire| translate::from_wire(wire, zone))
            .collect()
    }

    /// Fetches the records matching one (name, type) coordinate.
    ///
    /// The owner name goes into the URL path with the apex as an empty
    /// segment, matching the service's routing.
    async fn retrieve_by_name_type(
        &self,
        zone: &str,
        rtype: &str,
        owner: &str,
    ) -> Result<Vec<Record>> {
        let endpoint = format!("/dns/retrieveByNameType/{zone}/{rtype}/{owner}");
        let response: RecordsResponse = self.post(&endpoint, &self.credentials()).await?;
        ensure_success(response.status, response.message)?;

        response
            .records
            .iter()
            .map(|wire| translate::from_wire(wire, zone))
            .collect()
    }

    /// Creates one record and returns it with the floored TTL and, when it
    /// can be recovered unambiguously, its provider identifier.
    async fn create_record(&self, zone: &str, record: &Record) -> Result<Record> {
        let credentials = self.credentials();
        let body = payload(&credentials, record);
        let endpoint = format!("/dns/create/{zone}");
        let response: StatusResponse = self.post(&endpoint, &body).await?;
        ensure_success(response.status, response.message)?;

        let mut created = record.clone();
        created.ttl = created.ttl.max(super::MIN_TTL);

        // Best effort: a follow-up lookup recovers the new record's id when
        // the coordinate resolves to exactly one record. A lookup failure or
        // an ambiguous coordinate leaves the id unset.
        match self
            .retrieve_by_name_type(zone, &body.rtype, &body.name)
            .await
        {
            Ok(matches) if matches.len() == 1 => {
                created.id = matches.into_iter().next().and_then(|r| r.id);
            }
            Ok(matches) => {
                log::debug!(
                    "Skipping id recovery for {}/{}: {} matches",
                    body.name,
                    body.rtype,
                    matches.len()
                );
            }
            Err(e) => {
                log::warn!(
                    "Id recovery lookup failed for {}/{}: {e}",
                    body.name,
                    body.rtype
                );
            }
        }

        Ok(created)
    }

    /// Overwrites the record with identifier `id` in place.
    async fn edit_record(&self, zone: &str, id: &str, record: &Record) -> Result<Record> {
        let credentials = self.credentials();
        let body = payload(&credentials, record);
        let endpoint = format!("/dns/edit/{zone}/{id}");
        let response: StatusResponse = self.post(&endpoint, &body).await?;
        ensure_success(response.status, response.message)?;

        let mut updated = record.clone();
        updated.ttl = updated.ttl.max(super::MIN_TTL);
        updated.id = Some(id.to_string());
        Ok(updated)
    }

    async fn delete_by_id(&self, zone: &str, id: &str) -> Result<()> {
        let endpoint = format!("/dns/delete/{zone}/{id}");
        let response: StatusResponse = self.post(&endpoint, &self.credentials()).await?;
        ensure_success(response.status, response.message)
    }
}

#[async_trait]
impl DnsProvider for PorkbunProvider {
    fn id(&self) -> &'static str {
        "porkbun"
    }

    async fn get_records(&self, zone: &str) -> Result<Vec<Record>> {
        let zone = trim_zone(zone);
        log::debug!("Listing records for zone {zone}");
        self.retrieve_all(zone).await
    }

    async fn append_records(
        &self,
        zone: &str,
        records: Vec<Record>,
    ) -> std::result::Result<Vec<Record>, BatchError> {
        let zone = trim_zone(zone);
        let mut completed = Vec::with_capacity(records.len());

        for record in &records {
            match self.create_record(zone, record).await {
                Ok(created) => completed.push(created),
                Err(e) => return Err(BatchError::new(completed, e)),
            }
        }

        Ok(completed)
    }

    async fn set_records(
        &self,
        zone: &str,
        records: Vec<Record>,
    ) -> std::result::Result<Vec<Record>, BatchError> {
        let zone = trim_zone(zone);

        // One listing up front resolves every (name, type) coordinate to the
        // identifiers currently holding it. The map is a snapshot: records
        // created or deleted concurrently are not reflected.
        let existing = match self.retrieve_all(zone).await {
            Ok(existing) => existing,
            Err(e) => return Err(BatchError::new(Vec::new(), e)),
        };
        let mut ids_by_coordinate: HashMap<(String, String), Vec<String>> = HashMap::new();
        for record in &existing {
            if let Some(id) = &record.id {
                ids_by_coordinate
                    .entry(record.coordinate())
                    .or_default()
                    .push(id.clone());
            }
        }

        // Partition: a record whose coordinate is unknown (and which carries
        // no explicit id) is a create; everything else is an update. Creates
        // run first, then updates, each phase in input order.
        let (updates, creates): (Vec<&Record>, Vec<&Record>) = records.iter().partition(|r| {
            r.id.is_some() || ids_by_coordinate.contains_key(&r.coordinate())
        });

        let mut completed = Vec::with_capacity(records.len());
        for record in creates {
            match self.create_record(zone, record).await {
                Ok(created) => completed.push(created),
                Err(e) => return Err(BatchError::new(completed, e)),
            }
        }

        for record in updates {
            let ids = match &record.id {
                Some(id) => std::slice::from_ref(id),
                None => ids_by_coordinate
                    .get(&record.coordinate())
                    .map(Vec::as_slice)
                    .unwrap_or_default(),
            };

            let result = match ids {
                [] => self.create_record(zone, record).await,
                [id] => self.edit_record(zone, id, record).await,
                many => {
                    let (name, record_type) = record.coordinate();
                    Err(ProviderError::AmbiguousMatch {
                        name,
                        record_type,
                        matches: many.len(),
                    })
                }
            };

            match result {
                Ok(updated) => completed.push(updated),
                Err(e) => return Err(BatchError::new(completed, e)),
            }
        }

        Ok(completed)
    }

    async fn delete_records(
        &self,
        zone: &str,
        records: Vec<Record>,
    ) -> std::result::Result<Vec<Record>, BatchError> {
        let zone = trim_zone(zone);
        let mut completed = Vec::new();

        for record in &records {
            if let Some(id) = &record.id {
                if let Err(e) = self.delete_by_id(zone, id).await {
                    return Err(BatchError::new(completed, e));
                }
                completed.push(record.clone());
                continue;
            }

            // No identifier: resolve the coordinate and delete every match.
            // Zero matches is a no-op for this input record.
            let owner = request_name(record);
            let matches = match self
                .retrieve_by_name_type(zone, record.data.record_type(), &owner)
                .await
            {
                Ok(matches) => matches,
                Err(e) => return Err(BatchError::new(completed, e)),
            };

            for matched in matches {
                let Some(id) = matched.id.clone() else {
                    continue;
                };
                if let Err(e) = self.delete_by_id(zone, &id).await {
                    return Err(BatchError::new(completed, e));
                }
                completed.push(matched);
            }
        }

        Ok(completed)
    }
}
