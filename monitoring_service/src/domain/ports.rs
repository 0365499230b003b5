//! Ports - the interfaces the monitoring engine reads through.

use models_minerals::{Filing, Property, PropertyLink, StrLocation};

use crate::domain::models::PortfolioKey;

/// Read port for the SQL replica.
///
/// Every location-driven read is chunked around the replica's statement and
/// parameter limits by the implementation; a failed or timed-out chunk
/// degrades to an empty contribution rather than an error. A method-level
/// error means the replica itself is unusable for this read.
pub trait ReplicaStorage: Send + Sync + 'static {
    /// Error type for replica operations
    type Error: std::error::Error + Send + Sync + 'static;

    /// Which of the given property record ids the replica knows about. Used
    /// to detect a replica that is missing the portfolio entirely.
    fn known_property_record_ids(
        &self,
        record_ids: &[String],
    ) -> impl std::future::Future<Output = Result<Vec<String>, Self::Error>> + Send;

    /// Active well links whose well sits in one of the given sections. Rows
    /// are raw: duplicates across overlapping chunks are the caller's to
    /// drop.
    fn well_links_by_locations(
        &self,
        locations: &[StrLocation],
    ) -> impl std::future::Future<Output = Result<Vec<PropertyLink>, Self::Error>> + Send;

    /// Active case-document links whose document sits in one of the given
    /// sections.
    fn document_links_by_locations(
        &self,
        locations: &[StrLocation],
    ) -> impl std::future::Future<Output = Result<Vec<PropertyLink>, Self::Error>> + Send;

    /// Filings whose primary STR is in `primary`, plus filings whose
    /// additional-section list contains one of `additional`.
    fn filings_by_locations(
        &self,
        primary: &[StrLocation],
        additional: &[StrLocation],
    ) -> impl std::future::Future<Output = Result<Vec<Filing>, Self::Error>> + Send;
}

/// Read port for the Recordbook, the authoritative store.
pub trait RecordsGateway: Send + Sync + 'static {
    /// Error type for gateway operations
    type Error: std::error::Error + Send + Sync + 'static;

    fn list_properties(
        &self,
        user_id: &str,
        organization_id: Option<i64>,
    ) -> impl std::future::Future<Output = Result<Vec<Property>, Self::Error>> + Send;

    fn well_links_for_properties(
        &self,
        property_record_ids: &[String],
    ) -> impl std::future::Future<Output = Result<Vec<PropertyLink>, Self::Error>> + Send;

    fn document_links_for_properties(
        &self,
        property_record_ids: &[String],
    ) -> impl std::future::Future<Output = Result<Vec<PropertyLink>, Self::Error>> + Send;

    fn filings_by_locations(
        &self,
        primary: &[StrLocation],
        additional: &[StrLocation],
    ) -> impl std::future::Future<Output = Result<Vec<Filing>, Self::Error>> + Send;
}

/// Best-effort portfolio cache. Errors are for the caller to log and ignore;
/// a broken cache must never break a read.
pub trait PortfolioCache: Send + Sync + 'static {
    fn get(
        &self,
        key: &PortfolioKey,
    ) -> impl std::future::Future<Output = anyhow::Result<Option<Vec<Property>>>> + Send;

    fn put(
        &self,
        key: &PortfolioKey,
        properties: &[Property],
    ) -> impl std::future::Future<Output = anyhow::Result<()>> + Send;
}
