//! Cursor-paged query plumbing shared by every table module.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::constants::RECORDBOOK_PAGE_SIZE;
use crate::error::{ClientError, ResponseExt};
use crate::filter::Filter;
use crate::RecordbookClient;

#[derive(Debug, Serialize)]
struct QueryRequest<'a> {
    filter: &'a Filter,
    page_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
struct QueryResponse<T> {
    records: Vec<T>,
    next_cursor: Option<String>,
}

impl RecordbookClient {
    /// Runs a filtered query against `table`, following the cursor until the
    /// result set is exhausted. Pages are requested sequentially; the
    /// Recordbook throttles aggressively and concurrent paging trips it.
    pub(crate) async fn query_all<T: DeserializeOwned>(
        &self,
        table: &str,
        filter: &Filter,
    ) -> Result<Vec<T>, ClientError> {
        let mut records = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let request = QueryRequest {
                filter,
                page_size: RECORDBOOK_PAGE_SIZE,
                cursor: cursor.take(),
            };

            let response = self
                .client
                .post(format!("{}/v1/{}/query", self.url, table))
                .json(&request)
                .send()
                .await
                .map_client_error()
                .await?;

            let page: QueryResponse<T> = response
                .json()
                .await
                .map_err(|e| ClientError::Generic(anyhow::anyhow!(e.to_string())))?;

            records.extend(page.records);

            match page.next_cursor {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }

        Ok(records)
    }
}
