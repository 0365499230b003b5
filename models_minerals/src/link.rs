//! Property links and per-property link counts.

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Status of a property link. Rejected links are soft-deleted by the linking
/// pipeline and excluded from every count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LinkStatus {
    Active,
    Rejected,
}

impl fmt::Display for LinkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkStatus::Active => write!(f, "ACTIVE"),
            LinkStatus::Rejected => write!(f, "REJECTED"),
        }
    }
}

/// A link between a property and a well or case document.
///
/// The link names exactly one property; counting a linked record means
/// counting its link row. Read-only to this platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PropertyLink {
    /// Link identity, stable across stores.
    pub id: String,
    /// Recordbook id of the linked property.
    pub property_record_id: String,
}

/// Per-property aggregate returned to the caller. Constructed fresh per
/// request, never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LinkCounts {
    pub wells: u32,
    pub documents: u32,
    pub filings: u32,
}
