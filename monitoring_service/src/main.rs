use anyhow::Context;
use monitoring_service::config::{Config, Environment};
use monitoring_service::domain::services::MonitoringServiceImpl;
use monitoring_service::inbound::http::{setup_and_serve, ApiContext};
use monitoring_service::outbound::{
    QueryLimits, RecordbookGateway, RedisPortfolioCache, ReplicaPgStorage,
};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parse our configuration from the environment.
    let config = Config::from_env().context("expected to be able to generate config")?;

    tracing::info!("initialized config");

    let (min_connections, max_connections): (u32, u32) = match config.environment {
        Environment::Production => (5, 30),
        Environment::Develop => (3, 20),
        Environment::Local => (3, 10),
    };

    let limits = QueryLimits::from_config(&config);

    // Connect to the replica when one is configured; without it every read
    // falls back to the Recordbook.
    let replica = match &config.database_url {
        Some(database_url) => {
            let pool = PgPoolOptions::new()
                .min_connections(min_connections)
                .max_connections(max_connections)
                .connect(database_url)
                .await
                .context("could not connect to the replica")?;

            tracing::info!(
                min_connections,
                max_connections,
                "initialized replica connection"
            );

            Some(ReplicaPgStorage::new(pool, limits))
        }
        None => {
            tracing::warn!("replica is not configured, reads will fall back to the recordbook");
            None
        }
    };

    let recordbook = RecordbookGateway::new(recordbook_client::RecordbookClient::new(
        config.recordbook_api_key.clone(),
        config.recordbook_url.clone(),
    ));
    tracing::info!(
        recordbook_url = %config.recordbook_url,
        "initialized recordbook client"
    );

    let cache = RedisPortfolioCache::new(
        config.redis_uri.as_deref(),
        config.portfolio_cache_ttl_seconds,
    );
    if config.redis_uri.is_none() {
        tracing::warn!("redis is not configured, the portfolio cache is disabled");
    }

    let monitoring = Arc::new(MonitoringServiceImpl::new(replica, recordbook, cache));

    setup_and_serve(ApiContext {
        config: Arc::new(config),
        monitoring,
    })
    .await?;
    Ok(())
}
