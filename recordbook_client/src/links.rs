//! Well-link and document-link reads.

use models_minerals::{LinkStatus, PropertyLink};
use serde::Deserialize;

use crate::constants::RECORDBOOK_MAX_FILTER_CLAUSES;
use crate::error::ClientError;
use crate::filter::Filter;
use crate::RecordbookClient;

#[derive(Debug, Deserialize)]
struct LinkRecord {
    record_id: String,
    property_record_id: String,
    status: String,
}

impl RecordbookClient {
    /// Active well links for the given properties.
    #[tracing::instrument(skip(self, property_record_ids), fields(properties = property_record_ids.len()))]
    pub async fn well_links_for_properties(
        &self,
        property_record_ids: &[String],
    ) -> Result<Vec<PropertyLink>, ClientError> {
        self.links_for_properties("well_links", property_record_ids)
            .await
    }

    /// Active case-document links for the given properties.
    #[tracing::instrument(skip(self, property_record_ids), fields(properties = property_record_ids.len()))]
    pub async fn document_links_for_properties(
        &self,
        property_record_ids: &[String],
    ) -> Result<Vec<PropertyLink>, ClientError> {
        self.links_for_properties("document_links", property_record_ids)
            .await
    }

    async fn links_for_properties(
        &self,
        table: &str,
        property_record_ids: &[String],
    ) -> Result<Vec<PropertyLink>, ClientError> {
        let mut links = Vec::new();

        // The Recordbook bounds filter width, so the id list is chunked and
        // the chunks fetched sequentially to stay inside its rate limits.
        for chunk in property_record_ids.chunks(RECORDBOOK_MAX_FILTER_CLAUSES) {
            let filter = Filter::and([
                Filter::is_in("property_record_id", chunk.iter().map(String::as_str)),
                Filter::eq("status", LinkStatus::Active.to_string()),
            ]);

            let records: Vec<LinkRecord> = self.query_all(table, &filter).await?;

            links.extend(records.into_iter().filter_map(|record| {
                if record.status != LinkStatus::Active.to_string() {
                    return None;
                }
                Some(PropertyLink {
                    id: record.record_id,
                    property_record_id: record.property_record_id,
                })
            }));
        }

        Ok(links)
    }
}
