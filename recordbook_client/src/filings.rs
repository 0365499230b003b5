//! Docket filing reads.

use models_minerals::{Filing, ReliefType, StrLocation};
use serde::Deserialize;

use crate::constants::RECORDBOOK_MAX_FILTER_CLAUSES;
use crate::error::ClientError;
use crate::filter::{location_value, Filter};
use crate::properties::build_location;
use crate::RecordbookClient;

#[derive(Debug, Deserialize)]
struct FilingRecord {
    record_id: String,
    relief_type: String,
    section: Option<i32>,
    township: Option<String>,
    range: Option<String>,
    meridian: Option<String>,
    #[serde(default)]
    additional_locations: Vec<AdditionalLocationRecord>,
}

#[derive(Debug, Deserialize)]
struct AdditionalLocationRecord {
    section: i32,
    township: String,
    range: String,
    meridian: String,
}

impl FilingRecord {
    fn into_filing(self) -> Filing {
        let location = build_location(
            &self.record_id,
            self.section,
            self.township.as_deref(),
            self.range.as_deref(),
            self.meridian.as_deref(),
        );

        let additional_locations = self
            .additional_locations
            .into_iter()
            .filter_map(|additional| {
                match StrLocation::new(
                    additional.section,
                    &additional.township,
                    &additional.range,
                    &additional.meridian,
                ) {
                    Ok(location) => Some(location),
                    Err(e) => {
                        tracing::warn!(
                            record_id = %self.record_id,
                            error = %e,
                            "filing has an invalid additional location"
                        );
                        None
                    }
                }
            })
            .collect();

        Filing {
            record_id: self.record_id,
            relief_type: ReliefType::from(self.relief_type),
            location,
            additional_locations,
        }
    }
}

impl RecordbookClient {
    /// Filings whose primary STR is one of `primary`, plus filings whose
    /// additional-section list contains one of `additional`.
    ///
    /// Rows are returned as fetched; the two query families can return the
    /// same filing twice and the caller owns deduplication.
    #[tracing::instrument(
        skip(self, primary, additional),
        fields(primary = primary.len(), additional = additional.len())
    )]
    pub async fn filings_by_locations(
        &self,
        primary: &[StrLocation],
        additional: &[StrLocation],
    ) -> Result<Vec<Filing>, ClientError> {
        let mut filings = Vec::new();

        for chunk in primary.chunks(RECORDBOOK_MAX_FILTER_CLAUSES) {
            let filter = Filter::at_any_location(chunk);
            let records: Vec<FilingRecord> = self.query_all("filings", &filter).await?;
            filings.extend(records.into_iter().map(FilingRecord::into_filing));
        }

        for chunk in additional.chunks(RECORDBOOK_MAX_FILTER_CLAUSES) {
            let filter = Filter::or(
                chunk
                    .iter()
                    .map(|location| Filter::contains("additional_locations", location_value(location))),
            );
            let records: Vec<FilingRecord> = self.query_all("filings", &filter).await?;
            filings.extend(records.into_iter().map(FilingRecord::into_filing));
        }

        Ok(filings)
    }
}
