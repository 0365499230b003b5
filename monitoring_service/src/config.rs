use std::str::FromStr;

/// The deployment environment we are in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Production,
    Develop,
    Local,
}

impl Environment {
    /// Reads `ENVIRONMENT`, defaulting to production when unset or
    /// unrecognized.
    pub fn new_or_prod() -> Self {
        match std::env::var("ENVIRONMENT").as_deref() {
            Ok("local") => Environment::Local,
            Ok("develop") => Environment::Develop,
            _ => Environment::Production,
        }
    }
}

/// Configuration parameters for the application.
#[derive(Debug)]
pub struct Config {
    /// The port to listen for HTTP requests on.
    pub port: usize,
    /// The environment we are in
    pub environment: Environment,
    /// The connection URL for the replica Postgres database. When absent the
    /// service runs without a replica and every read falls back to the
    /// Recordbook.
    pub database_url: Option<String>,
    /// Redis URI for the portfolio cache. When absent the cache is disabled
    /// and every portfolio read goes to the Recordbook.
    pub redis_uri: Option<String>,
    /// Base URL of the Recordbook API.
    pub recordbook_url: String,
    /// Api key for the Recordbook API.
    pub recordbook_api_key: String,
    /// Maximum bound parameters the replica accepts in a single statement.
    /// Varies by deployment; the query executor chunks around it.
    pub replica_max_bind_params: usize,
    /// Maximum statements the replica accepts in one batch call.
    pub replica_max_batch_statements: usize,
    /// How many replica chunk queries may be in flight at once.
    pub replica_query_concurrency: usize,
    /// Per-chunk query deadline in milliseconds.
    pub replica_query_timeout_ms: u64,
    /// How long a cached portfolio stays fresh.
    pub portfolio_cache_ttl_seconds: u64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let port: usize = std::env::var("PORT")
            .unwrap_or("8080".to_string())
            .parse::<usize>()
            .unwrap();
        let environment = Environment::new_or_prod();
        let database_url = std::env::var("DATABASE_URL").ok();
        let redis_uri = std::env::var("REDIS_URI").ok();
        let recordbook_url =
            std::env::var("RECORDBOOK_URL").expect("RECORDBOOK_URL must be provided");
        let recordbook_api_key =
            std::env::var("RECORDBOOK_API_KEY").expect("RECORDBOOK_API_KEY must be provided");

        Ok(Config {
            port,
            environment,
            database_url,
            redis_uri,
            recordbook_url,
            recordbook_api_key,
            replica_max_bind_params: env_or("REPLICA_MAX_BIND_PARAMS", 100),
            replica_max_batch_statements: env_or("REPLICA_MAX_BATCH_STATEMENTS", 10),
            replica_query_concurrency: env_or("REPLICA_QUERY_CONCURRENCY", 8),
            replica_query_timeout_ms: env_or("REPLICA_QUERY_TIMEOUT_MS", 5_000),
            portfolio_cache_ttl_seconds: env_or("PORTFOLIO_CACHE_TTL_SECONDS", 300),
        })
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|raw| raw.parse::<T>().ok())
        .unwrap_or(default)
}
