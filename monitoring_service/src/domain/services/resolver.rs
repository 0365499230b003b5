//! The dual-store resolver.
//!
//! Reads default to the SQL replica and re-issue against the Recordbook when
//! the replica is unconfigured, unreachable, or visibly missing the
//! portfolio. Every result carries a provenance tag so a fallback is
//! observable instead of silently changing latency and consistency.

#[cfg(test)]
mod test;

use models_minerals::{Filing, PropertyLink, StrLocation};

use crate::domain::models::{ReadMode, ReadSource, Resolved};
use crate::domain::ports::{RecordsGateway, ReplicaStorage};

pub struct DualStoreResolver<R, G> {
    replica: Option<R>,
    records: G,
}

impl<R, G> DualStoreResolver<R, G>
where
    R: ReplicaStorage,
    G: RecordsGateway,
{
    pub fn new(replica: Option<R>, records: G) -> Self {
        Self { replica, records }
    }

    /// Picks the read mode for one aggregation request.
    ///
    /// Falls back when there is no replica, when the presence probe fails, or
    /// when the replica knows none of the portfolio's properties (a
    /// structurally valid but useless answer). A partially replicated
    /// portfolio stays on the replica; lag is the accepted tradeoff.
    pub async fn select_mode(&self, portfolio_record_ids: &[String]) -> ReadMode {
        let Some(replica) = &self.replica else {
            return ReadMode::Fallback;
        };

        if portfolio_record_ids.is_empty() {
            return ReadMode::ReplicaOnly;
        }

        match replica.known_property_record_ids(portfolio_record_ids).await {
            Ok(known) if known.is_empty() => {
                tracing::warn!(
                    portfolio = portfolio_record_ids.len(),
                    "replica has none of the portfolio's properties, falling back"
                );
                ReadMode::Fallback
            }
            Ok(known) => {
                if known.len() < portfolio_record_ids.len() {
                    tracing::debug!(
                        known = known.len(),
                        portfolio = portfolio_record_ids.len(),
                        "replica is missing part of the portfolio"
                    );
                }
                ReadMode::ReplicaOnly
            }
            Err(e) => {
                tracing::warn!(error = %e, "replica presence probe failed, falling back");
                ReadMode::Fallback
            }
        }
    }

    /// Well links for the portfolio footprint.
    pub async fn well_links(
        &self,
        mode: ReadMode,
        locations: &[StrLocation],
        portfolio_record_ids: &[String],
    ) -> Resolved<Vec<PropertyLink>> {
        if mode == ReadMode::ReplicaOnly {
            let replica = self.replica.as_ref().expect("replica mode without replica");
            match replica.well_links_by_locations(locations).await {
                Ok(links) => {
                    return Resolved {
                        value: links,
                        source: ReadSource::Replica,
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "replica well-link read failed, falling back");
                }
            }
        }

        let value = self
            .records
            .well_links_for_properties(portfolio_record_ids)
            .await
            .unwrap_or_else(|e| {
                tracing::error!(error = %e, "recordbook well-link read failed, counting none");
                Vec::new()
            });

        Resolved {
            value,
            source: ReadSource::Fallback,
        }
    }

    /// Case-document links for the portfolio footprint.
    pub async fn document_links(
        &self,
        mode: ReadMode,
        locations: &[StrLocation],
        portfolio_record_ids: &[String],
    ) -> Resolved<Vec<PropertyLink>> {
        if mode == ReadMode::ReplicaOnly {
            let replica = self.replica.as_ref().expect("replica mode without replica");
            match replica.document_links_by_locations(locations).await {
                Ok(links) => {
                    return Resolved {
                        value: links,
                        source: ReadSource::Replica,
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "replica document-link read failed, falling back");
                }
            }
        }

        let value = self
            .records
            .document_links_for_properties(portfolio_record_ids)
            .await
            .unwrap_or_else(|e| {
                tracing::error!(error = %e, "recordbook document-link read failed, counting none");
                Vec::new()
            });

        Resolved {
            value,
            source: ReadSource::Fallback,
        }
    }

    /// Filings touching the portfolio footprint, by primary STR or by their
    /// additional-section lists.
    pub async fn filings(
        &self,
        mode: ReadMode,
        primary: &[StrLocation],
        additional: &[StrLocation],
    ) -> Resolved<Vec<Filing>> {
        if mode == ReadMode::ReplicaOnly {
            let replica = self.replica.as_ref().expect("replica mode without replica");
            match replica.filings_by_locations(primary, additional).await {
                Ok(filings) => {
                    return Resolved {
                        value: filings,
                        source: ReadSource::Replica,
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "replica filing read failed, falling back");
                }
            }
        }

        let value = self
            .records
            .filings_by_locations(primary, additional)
            .await
            .unwrap_or_else(|e| {
                tracing::error!(error = %e, "recordbook filing read failed, counting none");
                Vec::new()
            });

        Resolved {
            value,
            source: ReadSource::Fallback,
        }
    }
}
