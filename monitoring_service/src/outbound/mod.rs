//! Outbound adapters - implementations of the domain ports.

pub mod cache;
pub mod postgres;
pub mod recordbook;

pub use cache::RedisPortfolioCache;
pub use postgres::{QueryLimits, ReplicaPgStorage};
pub use recordbook::RecordbookGateway;
