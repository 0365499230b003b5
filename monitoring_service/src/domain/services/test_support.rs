//! Fake port implementations shared by the service-level tests.

use models_minerals::{Filing, Property, PropertyLink, StrLocation};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use thiserror::Error;

use crate::domain::models::PortfolioKey;
use crate::domain::ports::{PortfolioCache, RecordsGateway, ReplicaStorage};

#[derive(Debug, Error)]
#[error("fake store error")]
pub(crate) struct FakeStoreError;

/// In-memory replica. `fail_probe` / `fail_reads` simulate an unreachable
/// store at the two failure points the resolver distinguishes.
#[derive(Default)]
pub(crate) struct FakeReplica {
    pub known_record_ids: Vec<String>,
    pub well_links: Vec<PropertyLink>,
    pub document_links: Vec<PropertyLink>,
    pub filings: Vec<Filing>,
    pub fail_probe: bool,
    pub fail_reads: bool,
}

impl ReplicaStorage for Arc<FakeReplica> {
    type Error = FakeStoreError;

    async fn known_property_record_ids(
        &self,
        record_ids: &[String],
    ) -> Result<Vec<String>, Self::Error> {
        if self.fail_probe {
            return Err(FakeStoreError);
        }
        Ok(self
            .known_record_ids
            .iter()
            .filter(|known| record_ids.contains(known))
            .cloned()
            .collect())
    }

    async fn well_links_by_locations(
        &self,
        _locations: &[StrLocation],
    ) -> Result<Vec<PropertyLink>, Self::Error> {
        if self.fail_reads {
            return Err(FakeStoreError);
        }
        Ok(self.well_links.clone())
    }

    async fn document_links_by_locations(
        &self,
        _locations: &[StrLocation],
    ) -> Result<Vec<PropertyLink>, Self::Error> {
        if self.fail_reads {
            return Err(FakeStoreError);
        }
        Ok(self.document_links.clone())
    }

    async fn filings_by_locations(
        &self,
        _primary: &[StrLocation],
        _additional: &[StrLocation],
    ) -> Result<Vec<Filing>, Self::Error> {
        if self.fail_reads {
            return Err(FakeStoreError);
        }
        Ok(self.filings.clone())
    }
}

/// In-memory Recordbook. Counts portfolio reads so cache behavior is
/// observable.
#[derive(Default)]
pub(crate) struct FakeRecordsInner {
    pub portfolio: Vec<Property>,
    pub well_links: Vec<PropertyLink>,
    pub document_links: Vec<PropertyLink>,
    pub filings: Vec<Filing>,
    pub fail_portfolio: bool,
    pub fail_reads: bool,
    pub portfolio_reads: AtomicUsize,
}

#[derive(Clone, Default)]
pub(crate) struct FakeRecords(pub Arc<FakeRecordsInner>);

impl RecordsGateway for FakeRecords {
    type Error = FakeStoreError;

    async fn list_properties(
        &self,
        _user_id: &str,
        _organization_id: Option<i64>,
    ) -> Result<Vec<Property>, Self::Error> {
        self.0.portfolio_reads.fetch_add(1, Ordering::SeqCst);
        if self.0.fail_portfolio {
            return Err(FakeStoreError);
        }
        Ok(self.0.portfolio.clone())
    }

    async fn well_links_for_properties(
        &self,
        _property_record_ids: &[String],
    ) -> Result<Vec<PropertyLink>, Self::Error> {
        if self.0.fail_reads {
            return Err(FakeStoreError);
        }
        Ok(self.0.well_links.clone())
    }

    async fn document_links_for_properties(
        &self,
        _property_record_ids: &[String],
    ) -> Result<Vec<PropertyLink>, Self::Error> {
        if self.0.fail_reads {
            return Err(FakeStoreError);
        }
        Ok(self.0.document_links.clone())
    }

    async fn filings_by_locations(
        &self,
        _primary: &[StrLocation],
        _additional: &[StrLocation],
    ) -> Result<Vec<Filing>, Self::Error> {
        if self.0.fail_reads {
            return Err(FakeStoreError);
        }
        Ok(self.0.filings.clone())
    }
}

/// In-memory cache with failure injection for the write path.
#[derive(Default)]
pub(crate) struct FakeCacheInner {
    pub entries: Mutex<HashMap<String, Vec<Property>>>,
    pub fail_puts: bool,
}

#[derive(Clone, Default)]
pub(crate) struct FakeCache(pub Arc<FakeCacheInner>);

impl PortfolioCache for FakeCache {
    async fn get(&self, key: &PortfolioKey) -> anyhow::Result<Option<Vec<Property>>> {
        Ok(self.0.entries.lock().unwrap().get(&key.to_string()).cloned())
    }

    async fn put(&self, key: &PortfolioKey, properties: &[Property]) -> anyhow::Result<()> {
        if self.0.fail_puts {
            anyhow::bail!("fake cache write failure");
        }
        self.0
            .entries
            .lock()
            .unwrap()
            .insert(key.to_string(), properties.to_vec());
        Ok(())
    }
}

pub(crate) fn location(section: i32) -> StrLocation {
    StrLocation::new(section, "9N", "5W", "IM").unwrap()
}

pub(crate) fn property(record_id: &str, section: Option<i32>) -> Property {
    Property {
        record_id: record_id.to_string(),
        user_id: "auth0|owner".to_string(),
        organization_id: None,
        name: None,
        location: section.map(location),
    }
}

pub(crate) fn link(id: &str, property_record_id: &str) -> PropertyLink {
    PropertyLink {
        id: id.to_string(),
        property_record_id: property_record_id.to_string(),
    }
}
