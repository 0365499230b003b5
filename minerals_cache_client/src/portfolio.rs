//! Short-TTL cache of tenant property portfolios.
//!
//! Portfolios are cached per organization (or per user for callers without
//! one) so every member of an org shares one Recordbook read per TTL window.

use models_minerals::Property;
use redis::AsyncCommands;

use crate::MineralsCache;

pub static PORTFOLIO_KEY_PREFIX: &str = "portfolio:";

impl MineralsCache {
    /// Gets a cached portfolio, `None` on miss.
    pub async fn get_portfolio(&self, tenant_key: &str) -> anyhow::Result<Option<Vec<Property>>> {
        let key = format!("{PORTFOLIO_KEY_PREFIX}{tenant_key}");

        let mut conn = self.inner.get_multiplexed_async_connection().await?;
        let raw: Option<String> = conn.get(&key).await?;

        match raw {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Caches a portfolio for `ttl_seconds`. Concurrent writers for the same
    /// tenant race last-write-wins; both are re-derivations of the same
    /// authoritative data.
    pub async fn set_portfolio(
        &self,
        tenant_key: &str,
        properties: &[Property],
        ttl_seconds: u64,
    ) -> anyhow::Result<()> {
        let key = format!("{PORTFOLIO_KEY_PREFIX}{tenant_key}");
        let raw = serde_json::to_string(properties)?;

        let mut conn = self.inner.get_multiplexed_async_connection().await?;
        conn.set_ex::<_, _, ()>(&key, raw, ttl_seconds).await?;

        Ok(())
    }
}
