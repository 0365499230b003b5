//! Property reads.

use models_minerals::{Property, StrLocation};
use serde::Deserialize;

use crate::error::ClientError;
use crate::filter::Filter;
use crate::RecordbookClient;

#[derive(Debug, Deserialize)]
pub(crate) struct PropertyRecord {
    pub record_id: String,
    pub user_id: String,
    pub organization_id: Option<i64>,
    pub name: Option<String>,
    pub section: Option<i32>,
    pub township: Option<String>,
    pub range: Option<String>,
    pub meridian: Option<String>,
}

impl PropertyRecord {
    fn into_property(self) -> Property {
        let location = build_location(
            &self.record_id,
            self.section,
            self.township.as_deref(),
            self.range.as_deref(),
            self.meridian.as_deref(),
        );

        Property {
            record_id: self.record_id,
            user_id: self.user_id,
            organization_id: self.organization_id,
            name: self.name,
            location,
        }
    }
}

/// Normalizes the raw STR tokens of a record into a canonical location.
///
/// A record with no STR at all yields `None` silently; a record with a
/// partial or invalid STR also yields `None` but is logged, since it will
/// contribute zero location-based matches until the source data is repaired.
pub(crate) fn build_location(
    record_id: &str,
    section: Option<i32>,
    township: Option<&str>,
    range: Option<&str>,
    meridian: Option<&str>,
) -> Option<StrLocation> {
    match (section, township, range, meridian) {
        (None, None, None, None) => None,
        (Some(section), Some(township), Some(range), Some(meridian)) => {
            match StrLocation::new(section, township, range, meridian) {
                Ok(location) => Some(location),
                Err(e) => {
                    tracing::warn!(record_id, error = %e, "record has an invalid STR location");
                    None
                }
            }
        }
        _ => {
            tracing::warn!(record_id, "record has a partial STR location");
            None
        }
    }
}

impl RecordbookClient {
    /// Lists the properties owned by an organization, or by a user with no
    /// organization. This is the portfolio read backing the cache.
    #[tracing::instrument(skip(self))]
    pub async fn list_properties(
        &self,
        user_id: &str,
        organization_id: Option<i64>,
    ) -> Result<Vec<Property>, ClientError> {
        let filter = match organization_id {
            Some(org_id) => Filter::eq("organization_id", org_id),
            None => Filter::eq("user_id", user_id),
        };

        let records: Vec<PropertyRecord> = self.query_all("properties", &filter).await?;

        Ok(records
            .into_iter()
            .map(PropertyRecord::into_property)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_str_yields_no_location() {
        assert!(build_location("p1", Some(15), Some("9N"), None, Some("IM")).is_none());
        assert!(build_location("p1", None, None, None, None).is_none());
    }

    #[test]
    fn invalid_section_yields_no_location() {
        assert!(build_location("p1", Some(40), Some("9N"), Some("5W"), Some("IM")).is_none());
    }

    #[test]
    fn full_str_normalizes() {
        let location = build_location("p1", Some(15), Some("09 N"), Some("5w"), Some("im")).unwrap();
        assert_eq!(location, StrLocation::new(15, "9N", "5W", "IM").unwrap());
    }
}
