//! Recordbook implementation of the records gateway port.

use models_minerals::{Filing, Property, PropertyLink, StrLocation};
use recordbook_client::error::ClientError;
use recordbook_client::RecordbookClient;
use std::sync::Arc;

use crate::domain::ports::RecordsGateway;

/// Records gateway over the Recordbook HTTP client.
#[derive(Clone)]
pub struct RecordbookGateway {
    client: Arc<RecordbookClient>,
}

impl RecordbookGateway {
    pub fn new(client: RecordbookClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

impl RecordsGateway for RecordbookGateway {
    type Error = ClientError;

    async fn list_properties(
        &self,
        user_id: &str,
        organization_id: Option<i64>,
    ) -> Result<Vec<Property>, Self::Error> {
        self.client.list_properties(user_id, organization_id).await
    }

    async fn well_links_for_properties(
        &self,
        property_record_ids: &[String],
    ) -> Result<Vec<PropertyLink>, Self::Error> {
        self.client
            .well_links_for_properties(property_record_ids)
            .await
    }

    async fn document_links_for_properties(
        &self,
        property_record_ids: &[String],
    ) -> Result<Vec<PropertyLink>, Self::Error> {
        self.client
            .document_links_for_properties(property_record_ids)
            .await
    }

    async fn filings_by_locations(
        &self,
        primary: &[StrLocation],
        additional: &[StrLocation],
    ) -> Result<Vec<Filing>, Self::Error> {
        self.client.filings_by_locations(primary, additional).await
    }
}
