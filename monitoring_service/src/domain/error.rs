//! Domain error types

use thiserror::Error;

/// Domain-level errors for monitoring operations.
///
/// Degraded sources (a failed chunk, an unreachable replica, a cache write
/// failure) are recovered locally and never reach this enum; the only hard
/// failure is being unable to read the portfolio at all.
#[derive(Debug, Error)]
pub enum MonitoringError {
    /// Neither the cache nor the Recordbook could produce the portfolio.
    #[error("portfolio unavailable: {0}")]
    PortfolioUnavailable(#[source] anyhow::Error),

    /// Internal error (task join failures and other plumbing)
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result type for domain operations
pub type Result<T> = std::result::Result<T, MonitoringError>;
