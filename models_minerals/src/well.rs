//! Oil and gas well records.

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

use crate::plss::StrLocation;

/// Lifecycle status of a well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(from = "String", into = "String")]
pub enum WellStatus {
    Active,
    Plugged,
    Other(String),
}

impl From<String> for WellStatus {
    fn from(raw: String) -> Self {
        match raw.to_uppercase().as_str() {
            "ACTIVE" => WellStatus::Active,
            "PLUGGED" => WellStatus::Plugged,
            _ => WellStatus::Other(raw),
        }
    }
}

impl From<WellStatus> for String {
    fn from(status: WellStatus) -> Self {
        status.to_string()
    }
}

impl fmt::Display for WellStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WellStatus::Active => write!(f, "ACTIVE"),
            WellStatus::Plugged => write!(f, "PLUGGED"),
            WellStatus::Other(raw) => write!(f, "{raw}"),
        }
    }
}

/// A well record. Read-only to this platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Well {
    /// Recordbook identity, stable across stores.
    pub record_id: String,
    /// Owning user, for access-control scoping.
    pub user_id: String,
    /// Owning organization, when present.
    pub organization_id: Option<i64>,
    /// Canonical STR location, when the source record carried one.
    pub location: Option<StrLocation>,
    pub status: WellStatus,
}
