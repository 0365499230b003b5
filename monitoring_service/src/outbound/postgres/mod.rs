//! Postgres implementation of the replica storage port.
//!
//! Location-driven reads are chunked around the replica's parameter and
//! batch-statement limits and fanned out with bounded concurrency. A failed
//! or timed-out chunk is logged and contributes nothing; partial data beats
//! total failure for a monitoring surface.

mod chunks;

use futures::future::BoxFuture;
use futures::stream::{self, StreamExt};
use futures::Future;
use models_minerals::{Filing, PropertyLink, ReliefType, StrLocation};
use serde::Deserialize;
use sqlx::prelude::FromRow;
use sqlx::types::Json;
use sqlx::{PgPool, Postgres, QueryBuilder};
use std::time::Duration;
use thiserror::Error;

use crate::config::Config;
use crate::domain::ports::ReplicaStorage;
use chunks::{effective_concurrency, location_chunks};

/// The replica's statement and batch bounds plus executor tuning. These vary
/// by deployment and always come from configuration.
#[derive(Debug, Clone, Copy)]
pub struct QueryLimits {
    pub max_bind_params: usize,
    pub max_batch_statements: usize,
    pub concurrency: usize,
    pub timeout: Duration,
}

impl QueryLimits {
    pub fn from_config(config: &Config) -> Self {
        QueryLimits {
            max_bind_params: config.replica_max_bind_params,
            max_batch_statements: config.replica_max_batch_statements,
            concurrency: config.replica_query_concurrency,
            timeout: Duration::from_millis(config.replica_query_timeout_ms),
        }
    }
}

/// Replica storage over a Postgres pool.
#[derive(Debug, Clone)]
pub struct ReplicaPgStorage {
    pool: PgPool,
    limits: QueryLimits,
}

/// Error type for replica storage operations
#[derive(Debug, Error)]
pub enum ReplicaStorageError {
    /// Database error
    #[error(transparent)]
    Db(#[from] sqlx::Error),
}

impl ReplicaPgStorage {
    pub fn new(pool: PgPool, limits: QueryLimits) -> Self {
        Self { pool, limits }
    }

    async fn links_by_locations(
        &self,
        sql_prefix: &'static str,
        label: &'static str,
        locations: &[StrLocation],
    ) -> Result<Vec<PropertyLink>, ReplicaStorageError> {
        if locations.is_empty() {
            return Ok(Vec::new());
        }

        let cap = effective_concurrency(self.limits.concurrency, self.limits.max_batch_statements);
        let statements: Vec<_> = location_chunks(locations, self.limits.max_bind_params)
            .map(|chunk| {
                link_chunk(
                    self.pool.clone(),
                    sql_prefix,
                    label,
                    chunk.to_vec(),
                    self.limits.timeout,
                )
            })
            .collect();

        let results: Vec<Vec<PropertyLink>> =
            stream::iter(statements).buffer_unordered(cap).collect().await;

        Ok(results.into_iter().flatten().collect())
    }
}

static WELL_LINKS_SQL: &str = "\
    SELECT wl.record_id AS link_id, p.record_id AS property_record_id \
    FROM well_links wl \
    JOIN properties p ON p.id = wl.property_id \
    JOIN wells w ON w.id = wl.well_id \
    WHERE wl.status = 'ACTIVE' \
      AND (w.section, w.township, w.range, w.meridian) IN ";

static DOCUMENT_LINKS_SQL: &str = "\
    SELECT dl.record_id AS link_id, p.record_id AS property_record_id \
    FROM document_links dl \
    JOIN properties p ON p.id = dl.property_id \
    JOIN case_documents d ON d.id = dl.document_id \
    WHERE dl.status = 'ACTIVE' \
      AND (d.section, d.township, d.range, d.meridian) IN ";

static FILINGS_SELECT_SQL: &str = "\
    SELECT record_id, relief_type, section, township, range, meridian, additional_locations \
    FROM filings";

impl ReplicaStorage for ReplicaPgStorage {
    type Error = ReplicaStorageError;

    async fn known_property_record_ids(
        &self,
        record_ids: &[String],
    ) -> Result<Vec<String>, Self::Error> {
        if record_ids.is_empty() {
            return Ok(Vec::new());
        }

        let known = sqlx::query_scalar::<_, String>(
            "SELECT record_id FROM properties WHERE record_id = ANY($1)",
        )
        .bind(record_ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(known)
    }

    async fn well_links_by_locations(
        &self,
        locations: &[StrLocation],
    ) -> Result<Vec<PropertyLink>, Self::Error> {
        self.links_by_locations(WELL_LINKS_SQL, "well_links", locations)
            .await
    }

    async fn document_links_by_locations(
        &self,
        locations: &[StrLocation],
    ) -> Result<Vec<PropertyLink>, Self::Error> {
        self.links_by_locations(DOCUMENT_LINKS_SQL, "document_links", locations)
            .await
    }

    async fn filings_by_locations(
        &self,
        primary: &[StrLocation],
        additional: &[StrLocation],
    ) -> Result<Vec<Filing>, Self::Error> {
        // Primary lookups ride tuple-IN chunks; additional-section lookups
        // need one containment probe per location. Both kinds flow through
        // the same bounded fan-out so no more than a batch's worth of
        // statements is ever in flight.
        let mut statements: Vec<BoxFuture<'static, Vec<Filing>>> = Vec::new();

        for chunk in location_chunks(primary, self.limits.max_bind_params) {
            statements.push(Box::pin(filings_primary_chunk(
                self.pool.clone(),
                chunk.to_vec(),
                self.limits.timeout,
            )));
        }

        for location in additional {
            statements.push(Box::pin(filings_additional_probe(
                self.pool.clone(),
                location.clone(),
                self.limits.timeout,
            )));
        }

        let cap = effective_concurrency(self.limits.concurrency, self.limits.max_batch_statements);
        let results: Vec<Vec<Filing>> =
            stream::iter(statements).buffer_unordered(cap).collect().await;

        Ok(results.into_iter().flatten().collect())
    }
}

// ===== Row Types =====

#[derive(FromRow)]
struct LinkRecord {
    link_id: String,
    property_record_id: String,
}

#[derive(Debug, Deserialize)]
struct ReplicaLocation {
    section: i32,
    township: String,
    range: String,
    meridian: String,
}

#[derive(FromRow)]
struct FilingRecord {
    record_id: String,
    relief_type: String,
    section: Option<i32>,
    township: Option<String>,
    range: Option<String>,
    meridian: Option<String>,
    additional_locations: Option<Json<Vec<ReplicaLocation>>>,
}

impl FilingRecord {
    fn into_filing(self) -> Filing {
        let location = match (self.section, &self.township, &self.range, &self.meridian) {
            (Some(section), Some(township), Some(range), Some(meridian)) => {
                match StrLocation::new(section, township, range, meridian) {
                    Ok(location) => Some(location),
                    Err(e) => {
                        tracing::warn!(
                            record_id = %self.record_id,
                            error = %e,
                            "replica filing has an invalid STR location"
                        );
                        None
                    }
                }
            }
            _ => None,
        };

        let additional_locations = self
            .additional_locations
            .map(|Json(raw)| {
                raw.into_iter()
                    .filter_map(|additional| {
                        StrLocation::new(
                            additional.section,
                            &additional.township,
                            &additional.range,
                            &additional.meridian,
                        )
                        .ok()
                    })
                    .collect()
            })
            .unwrap_or_default();

        Filing {
            record_id: self.record_id,
            relief_type: ReliefType::from(self.relief_type),
            location,
            additional_locations,
        }
    }
}

// ===== Chunk Execution =====

/// Runs one chunk statement under the configured deadline. Failures and
/// timeouts degrade to an empty contribution without touching siblings.
async fn run_chunk<T, F>(label: &'static str, timeout: Duration, query: F) -> Vec<T>
where
    F: Future<Output = Result<Vec<T>, sqlx::Error>>,
{
    match tokio::time::timeout(timeout, query).await {
        Ok(Ok(rows)) => rows,
        Ok(Err(e)) => {
            tracing::warn!(error = %e, label, "replica chunk query failed, counting it empty");
            Vec::new()
        }
        Err(_) => {
            tracing::warn!(label, "replica chunk query timed out, counting it empty");
            Vec::new()
        }
    }
}

async fn link_chunk(
    pool: PgPool,
    sql_prefix: &'static str,
    label: &'static str,
    chunk: Vec<StrLocation>,
    timeout: Duration,
) -> Vec<PropertyLink> {
    let rows = run_chunk(label, timeout, async {
        let mut builder = QueryBuilder::<Postgres>::new(sql_prefix);
        builder.push_tuples(chunk.iter(), |mut b, location| {
            b.push_bind(location.section as i32)
                .push_bind(location.township.clone())
                .push_bind(location.range.clone())
                .push_bind(location.meridian.clone());
        });

        builder
            .build_query_as::<LinkRecord>()
            .fetch_all(&pool)
            .await
    })
    .await;

    rows.into_iter()
        .map(|row| PropertyLink {
            id: row.link_id,
            property_record_id: row.property_record_id,
        })
        .collect()
}

async fn filings_primary_chunk(
    pool: PgPool,
    chunk: Vec<StrLocation>,
    timeout: Duration,
) -> Vec<Filing> {
    let rows = run_chunk("filings_primary", timeout, async {
        let mut builder = QueryBuilder::<Postgres>::new(FILINGS_SELECT_SQL);
        builder.push(" WHERE (section, township, range, meridian) IN ");
        builder.push_tuples(chunk.iter(), |mut b, location| {
            b.push_bind(location.section as i32)
                .push_bind(location.township.clone())
                .push_bind(location.range.clone())
                .push_bind(location.meridian.clone());
        });

        builder
            .build_query_as::<FilingRecord>()
            .fetch_all(&pool)
            .await
    })
    .await;

    rows.into_iter().map(FilingRecord::into_filing).collect()
}

async fn filings_additional_probe(
    pool: PgPool,
    location: StrLocation,
    timeout: Duration,
) -> Vec<Filing> {
    let probe = serde_json::json!([{
        "section": location.section,
        "township": location.township,
        "range": location.range,
        "meridian": location.meridian,
    }]);

    let sql = format!("{FILINGS_SELECT_SQL} WHERE additional_locations @> $1");
    let rows = run_chunk("filings_additional", timeout, async {
        sqlx::query_as::<_, FilingRecord>(&sql)
            .bind(Json(probe))
            .fetch_all(&pool)
            .await
    })
    .await;

    rows.into_iter().map(FilingRecord::into_filing).collect()
}
