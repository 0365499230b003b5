//! Read-through portfolio cache.

use models_minerals::{Property, UserContext};

use crate::domain::error::{MonitoringError, Result};
use crate::domain::models::PortfolioKey;
use crate::domain::ports::{PortfolioCache, RecordsGateway};

/// Fetches a tenant's property portfolio, preferring the cache.
///
/// The cache keeps every member of an organization from re-reading the same
/// portfolio out of the rate-limited Recordbook; staleness up to the TTL is
/// accepted. Cache failures degrade to a Recordbook read.
pub struct PortfolioReader<G, C> {
    records: G,
    cache: C,
}

impl<G, C> PortfolioReader<G, C>
where
    G: RecordsGateway,
    C: PortfolioCache,
{
    pub fn new(records: G, cache: C) -> Self {
        Self { records, cache }
    }

    pub async fn portfolio(&self, user_context: &UserContext) -> Result<Vec<Property>> {
        let key = PortfolioKey::for_user(user_context);

        match self.cache.get(&key).await {
            Ok(Some(properties)) => {
                tracing::debug!(%key, properties = properties.len(), "portfolio cache hit");
                return Ok(properties);
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(%key, error = %e, "portfolio cache read failed");
            }
        }

        let properties = self
            .records
            .list_properties(&user_context.user_id, user_context.organization_id)
            .await
            .map_err(|e| MonitoringError::PortfolioUnavailable(anyhow::anyhow!(e)))?;

        if let Err(e) = self.cache.put(&key, &properties).await {
            tracing::warn!(%key, error = %e, "portfolio cache write failed");
        }

        Ok(properties)
    }
}
