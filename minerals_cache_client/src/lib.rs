//! A crate used for common operations on the minerals cache.

pub mod portfolio;

#[derive(Clone)]
pub struct MineralsCache {
    inner: redis::Client,
}

impl MineralsCache {
    pub fn new(redis_uri: &str) -> Self {
        let inner = redis::Client::open(redis_uri).expect("could not connect to redis client");
        Self { inner }
    }
}
