//! Redis implementation of the portfolio cache port.

use minerals_cache_client::MineralsCache;
use models_minerals::Property;

use crate::domain::models::PortfolioKey;
use crate::domain::ports::PortfolioCache;

/// Portfolio cache over redis. When redis is unconfigured the cache is
/// disabled: every get is a miss and every put a no-op.
#[derive(Clone)]
pub struct RedisPortfolioCache {
    inner: Option<MineralsCache>,
    ttl_seconds: u64,
}

impl RedisPortfolioCache {
    pub fn new(redis_uri: Option<&str>, ttl_seconds: u64) -> Self {
        Self {
            inner: redis_uri.map(MineralsCache::new),
            ttl_seconds,
        }
    }
}

impl PortfolioCache for RedisPortfolioCache {
    async fn get(&self, key: &PortfolioKey) -> anyhow::Result<Option<Vec<Property>>> {
        let Some(cache) = &self.inner else {
            return Ok(None);
        };
        cache.get_portfolio(&key.to_string()).await
    }

    async fn put(&self, key: &PortfolioKey, properties: &[Property]) -> anyhow::Result<()> {
        let Some(cache) = &self.inner else {
            return Ok(());
        };
        cache
            .set_portfolio(&key.to_string(), properties, self.ttl_seconds)
            .await
    }
}
