//! Regulatory docket filings.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::plss::StrLocation;
use crate::relief::ReliefType;

/// A docket entry from the regulatory commission.
///
/// A filing names one primary STR location and may affect further sections;
/// those are carried as a first-class list and matched independently of the
/// primary location. Read-only to this platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Filing {
    /// Recordbook identity, stable across stores.
    pub record_id: String,
    /// The relief sought, e.g. pooling or spacing.
    pub relief_type: ReliefType,
    /// Primary STR location, when the docket entry carried one.
    pub location: Option<StrLocation>,
    /// Additional sections affected by the filing, beyond the primary one.
    #[serde(default)]
    pub additional_locations: Vec<StrLocation>,
}
