//! Mineral-rights property records.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::plss::StrLocation;

/// A legal land parcel tracked for a user or organization.
///
/// `record_id` is the Recordbook identity and is stable across stores; the
/// replica additionally mints its own local id, which never leaves the
/// replica adapter. Properties are created by the ingestion pipeline and are
/// read-only to this platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Property {
    /// Recordbook identity, stable across stores.
    pub record_id: String,
    /// Owning user.
    pub user_id: String,
    /// Owning organization, when the user belongs to one.
    pub organization_id: Option<i64>,
    /// Display name, e.g. the legal description.
    pub name: Option<String>,
    /// Canonical STR location. Either fully present or absent: a property
    /// without a location contributes zero location-based matches but still
    /// appears in every report.
    pub location: Option<StrLocation>,
}
