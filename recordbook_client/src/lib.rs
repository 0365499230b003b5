//! Client for the Recordbook, the authoritative record store.
//!
//! The Recordbook is slow and externally rate-limited; callers are expected
//! to cache aggressively and to prefer the SQL replica for anything
//! latency-sensitive. Reads page through a cursor and every request carries
//! the tenant api key.

pub mod error;
pub mod filings;
pub mod filter;
pub mod links;
pub mod properties;

pub(crate) mod constants;
pub(crate) mod query;

use constants::RECORDBOOK_API_KEY_HEADER;

#[derive(Clone)]
pub struct RecordbookClient {
    url: String,
    client: reqwest::Client,
}

impl RecordbookClient {
    pub fn new(api_key: String, url: String) -> Self {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(RECORDBOOK_API_KEY_HEADER, api_key.parse().unwrap());

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .unwrap();

        Self { url, client }
    }
}
