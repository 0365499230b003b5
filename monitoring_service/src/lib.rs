//! Monitoring Service library following hexagonal architecture pattern
//!
//! This library reports, per mineral-rights property, how many wells, case
//! documents, and docket filings are geographically linked to it, reading
//! from the SQL replica with Recordbook fallback.

pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;
