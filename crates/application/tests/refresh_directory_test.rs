mod helpers;

use helpers::{snapshot, v4, zone, MockDirectoryStore, MockPeerStatusSource, PeerBuilder};
use std::sync::Arc;
use std::time::Duration;
use tailnet_dns_application::ports::DirectoryStore;
use tailnet_dns_application::use_cases::RefreshDirectoryUseCase;
use tailnet_dns_domain::DomainError;

fn mesh() -> tailnet_dns_domain::PeerStatusSnapshot {
    snapshot(
        PeerBuilder::new("gateway").address("100.64.0.1").build(),
        vec![PeerBuilder::new("web")
            .address("100.64.0.2")
            .tag("tag:cname-www")
            .build()],
    )
}

fn setup() -> (
    Arc<MockPeerStatusSource>,
    Arc<MockDirectoryStore>,
    RefreshDirectoryUseCase,
) {
    let source = Arc::new(MockPeerStatusSource::with_snapshot(mesh()));
    let store = Arc::new(MockDirectoryStore::new());
    let use_case = RefreshDirectoryUseCase::new(source.clone(), store.clone(), zone());
    (source, store, use_case)
}

#[tokio::test]
async fn test_refresh_publishes_new_directory() {
    let (_source, store, use_case) = setup();

    let outcome = use_case.execute().await.unwrap();

    assert_eq!(outcome.generation, 1);
    assert_eq!(outcome.entries, 3);
    assert_eq!(outcome.hosts, 2);

    let current = store.current();
    assert_eq!(current.generation(), 1);
    assert_eq!(current.get("gateway").unwrap().a(), &[v4("100.64.0.1")]);
    assert!(current.get("www").unwrap().has_cname());
}

#[tokio::test]
async fn test_refresh_replaces_directory_wholesale() {
    let (source, store, use_case) = setup();
    use_case.execute().await.unwrap();

    source
        .set_snapshot(snapshot(
            PeerBuilder::new("gateway").address("100.64.0.1").build(),
            vec![],
        ))
        .await;
    let outcome = use_case.execute().await.unwrap();

    assert_eq!(outcome.generation, 2);
    let current = store.current();
    assert!(current.get("web").is_none());
    assert!(current.get("www").is_none());
}

#[tokio::test]
async fn test_fetch_failure_keeps_previous_directory() {
    let (source, store, use_case) = setup();
    use_case.execute().await.unwrap();

    source
        .set_failure(Some(DomainError::StatusFetchFailed("daemon down".into())))
        .await;
    let result = use_case.execute().await;

    assert!(matches!(result, Err(DomainError::StatusFetchFailed(_))));
    assert_eq!(store.publish_count(), 1);
    assert_eq!(store.current().generation(), 1);
    assert!(store.current().get("gateway").is_some());
}

#[tokio::test]
async fn test_failure_before_first_success_leaves_empty_directory() {
    let (source, store, use_case) = setup();
    source
        .set_failure(Some(DomainError::InvalidPeerStatus("garbage".into())))
        .await;

    assert!(use_case.execute().await.is_err());
    assert!(store.current().is_empty());
    assert!(use_case.last_success().await.is_none());
}

#[tokio::test]
async fn test_slow_source_times_out() {
    let (source, store, use_case) = setup();
    let use_case = use_case.with_fetch_timeout(Duration::from_millis(50));
    source.set_delay(Some(Duration::from_millis(500))).await;

    let err = use_case.execute().await.unwrap_err();

    assert_eq!(
        err,
        DomainError::StatusFetchTimeout(Duration::from_millis(50))
    );
    assert_eq!(err.to_string(), "Peer status fetch timed out after 50ms");
    assert_eq!(store.publish_count(), 0);
}

#[tokio::test]
async fn test_failure_counter_resets_on_success() {
    let (source, _store, use_case) = setup();
    source
        .set_failure(Some(DomainError::StatusFetchFailed("flaky".into())))
        .await;

    let _ = use_case.execute().await;
    let _ = use_case.execute().await;
    assert_eq!(use_case.consecutive_failures(), 2);

    source.set_failure(None).await;
    use_case.execute().await.unwrap();

    assert_eq!(use_case.consecutive_failures(), 0);
    assert!(use_case.last_success().await.is_some());
    assert_eq!(source.call_count(), 3);
}
