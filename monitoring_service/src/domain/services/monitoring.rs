//! Orchestrates one portfolio aggregation request.


use models_minerals::{Property, StrLocation, UserContext};
use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::error::{MonitoringError, Result};
use crate::domain::models::{LinkedActivityReport, PassSources};
use crate::domain::ports::{PortfolioCache, RecordsGateway, ReplicaStorage};
use crate::domain::services::aggregator;
use crate::domain::services::portfolio::PortfolioReader;
use crate::domain::services::resolver::DualStoreResolver;

/// The monitoring engine: portfolio in, per-property link counts out.
pub struct MonitoringServiceImpl<R, G, C> {
    resolver: Arc<DualStoreResolver<R, G>>,
    portfolio: PortfolioReader<G, C>,
}

impl<R, G, C> MonitoringServiceImpl<R, G, C>
where
    R: ReplicaStorage,
    G: RecordsGateway + Clone,
    C: PortfolioCache,
{
    pub fn new(replica: Option<R>, records: G, cache: C) -> Self {
        Self {
            resolver: Arc::new(DualStoreResolver::new(replica, records.clone())),
            portfolio: PortfolioReader::new(records, cache),
        }
    }

    /// Computes link counts for the caller's whole portfolio in one call.
    ///
    /// The three entity kinds are looked up concurrently; each pass degrades
    /// independently (a failed store read lowers counts, it does not fail the
    /// request). Only an unreadable portfolio is an error.
    pub async fn linked_activity(&self, user_context: &UserContext) -> Result<LinkedActivityReport> {
        let properties = self.portfolio.portfolio(user_context).await?;

        let record_ids: Vec<String> = properties
            .iter()
            .map(|property| property.record_id.clone())
            .collect();

        let (direct, footprint) = portfolio_footprint(&properties);

        tracing::info!(
            properties = properties.len(),
            located = direct.len(),
            footprint = footprint.len(),
            "computing linked activity"
        );

        let mode = self.resolver.select_mode(&record_ids).await;

        let resolver = self.resolver.clone();
        let locations = footprint.clone();
        let ids = record_ids.clone();
        let wells =
            tokio::spawn(async move { resolver.well_links(mode, &locations, &ids).await });

        let resolver = self.resolver.clone();
        let locations = footprint.clone();
        let ids = record_ids.clone();
        let documents =
            tokio::spawn(async move { resolver.document_links(mode, &locations, &ids).await });

        let resolver = self.resolver.clone();
        let primary = footprint;
        let additional = direct;
        let filings =
            tokio::spawn(async move { resolver.filings(mode, &primary, &additional).await });

        let (wells, documents, filings) = tokio::try_join!(wells, documents, filings)
            .map_err(|e| MonitoringError::Internal(anyhow::anyhow!("lookup task failed: {e:?}")))?;

        let counts = aggregator::aggregate(
            &properties,
            &wells.value,
            &documents.value,
            &filings.value,
        );

        Ok(LinkedActivityReport {
            counts,
            sources: PassSources {
                wells: wells.source,
                documents: documents.source,
                filings: filings.source,
            },
        })
    }
}

/// The portfolio's geography: the distinct sections its properties sit in,
/// and those plus their in-block neighbors.
///
/// Properties without a location contribute nothing here; they still get a
/// zeroed entry from the aggregator.
fn portfolio_footprint(properties: &[Property]) -> (Vec<StrLocation>, Vec<StrLocation>) {
    let mut direct_set: HashSet<StrLocation> = HashSet::new();
    for property in properties {
        if let Some(location) = &property.location {
            direct_set.insert(location.clone());
        }
    }

    let mut footprint_set = direct_set.clone();
    for location in &direct_set {
        footprint_set.extend(location.neighbors());
    }

    (
        direct_set.into_iter().collect(),
        footprint_set.into_iter().collect(),
    )
}
