//! Tests for the dual-store resolver state machine.

use std::sync::Arc;

use super::*;
use crate::domain::services::test_support::{link, location, FakeRecords, FakeReplica};

fn ids(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn unconfigured_replica_means_fallback() {
    let resolver: DualStoreResolver<Arc<FakeReplica>, FakeRecords> =
        DualStoreResolver::new(None, FakeRecords::default());

    let mode = resolver.select_mode(&ids(&["prop_a"])).await;
    assert_eq!(mode, ReadMode::Fallback);
}

#[tokio::test]
async fn replica_missing_the_whole_portfolio_means_fallback() {
    let replica = Arc::new(FakeReplica {
        known_record_ids: vec![],
        ..FakeReplica::default()
    });
    let resolver = DualStoreResolver::new(Some(replica), FakeRecords::default());

    let mode = resolver.select_mode(&ids(&["prop_a", "prop_b"])).await;
    assert_eq!(mode, ReadMode::Fallback);
}

#[tokio::test]
async fn partially_replicated_portfolio_stays_on_the_replica() {
    let replica = Arc::new(FakeReplica {
        known_record_ids: ids(&["prop_a"]),
        ..FakeReplica::default()
    });
    let resolver = DualStoreResolver::new(Some(replica), FakeRecords::default());

    let mode = resolver.select_mode(&ids(&["prop_a", "prop_b"])).await;
    assert_eq!(mode, ReadMode::ReplicaOnly);
}

#[tokio::test]
async fn probe_failure_means_fallback() {
    let replica = Arc::new(FakeReplica {
        fail_probe: true,
        ..FakeReplica::default()
    });
    let resolver = DualStoreResolver::new(Some(replica), FakeRecords::default());

    let mode = resolver.select_mode(&ids(&["prop_a"])).await;
    assert_eq!(mode, ReadMode::Fallback);
}

#[tokio::test]
async fn replica_reads_are_tagged_with_replica_provenance() {
    let replica = Arc::new(FakeReplica {
        known_record_ids: ids(&["prop_a"]),
        well_links: vec![link("link_1", "prop_a")],
        ..FakeReplica::default()
    });
    let resolver = DualStoreResolver::new(Some(replica), FakeRecords::default());

    let resolved = resolver
        .well_links(ReadMode::ReplicaOnly, &[location(15)], &ids(&["prop_a"]))
        .await;

    assert_eq!(resolved.source, ReadSource::Replica);
    assert_eq!(resolved.value, vec![link("link_1", "prop_a")]);
}

#[tokio::test]
async fn replica_read_failure_reissues_against_the_recordbook() {
    let replica = Arc::new(FakeReplica {
        known_record_ids: ids(&["prop_a"]),
        fail_reads: true,
        ..FakeReplica::default()
    });
    let records = {
        let inner = crate::domain::services::test_support::FakeRecordsInner {
            well_links: vec![link("link_1", "prop_a")],
            ..Default::default()
        };
        FakeRecords(Arc::new(inner))
    };
    let resolver = DualStoreResolver::new(Some(replica), records);

    let resolved = resolver
        .well_links(ReadMode::ReplicaOnly, &[location(15)], &ids(&["prop_a"]))
        .await;

    assert_eq!(resolved.source, ReadSource::Fallback);
    assert_eq!(resolved.value, vec![link("link_1", "prop_a")]);
}

#[tokio::test]
async fn both_stores_failing_degrades_to_empty() {
    let replica = Arc::new(FakeReplica {
        known_record_ids: ids(&["prop_a"]),
        fail_reads: true,
        ..FakeReplica::default()
    });
    let records = FakeRecords(Arc::new(
        crate::domain::services::test_support::FakeRecordsInner {
            fail_reads: true,
            ..Default::default()
        },
    ));
    let resolver = DualStoreResolver::new(Some(replica), records);

    let resolved = resolver
        .document_links(ReadMode::ReplicaOnly, &[location(15)], &ids(&["prop_a"]))
        .await;

    assert_eq!(resolved.source, ReadSource::Fallback);
    assert!(resolved.value.is_empty());
}

#[tokio::test]
async fn fallback_mode_skips_the_replica_entirely() {
    // A replica that would fail its reads is never touched in fallback mode.
    let replica = Arc::new(FakeReplica {
        fail_reads: true,
        fail_probe: true,
        ..FakeReplica::default()
    });
    let records = FakeRecords(Arc::new(
        crate::domain::services::test_support::FakeRecordsInner {
            filings: vec![],
            ..Default::default()
        },
    ));
    let resolver = DualStoreResolver::new(Some(replica), records);

    let resolved = resolver
        .filings(ReadMode::Fallback, &[location(15)], &[location(15)])
        .await;

    assert_eq!(resolved.source, ReadSource::Fallback);
    assert!(resolved.value.is_empty());
}
