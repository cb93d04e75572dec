mod fixtures;

use filmpath_core::{
    CancellationToken, ConnectionSearch, NoopObserver, SearchConfig, SearchError, SearchPhase,
};
use fixtures::{CancellingCatalog, Event, RecordingObserver, dense_graph, fast_config};
use std::time::Duration;

#[tokio::test]
async fn test_cancelled_token_stops_before_first_lookup() {
    let search = ConnectionSearch::new(dense_graph(), fast_config(6));
    let token = CancellationToken::new();
    token.cancel();

    let result = search
        .find_connection_with("Person 0", "Nobody", &token, &NoopObserver)
        .await;

    assert!(matches!(result, Err(SearchError::Cancelled)));
    assert_eq!(search.catalog().lookup_count(), 0);
}

#[tokio::test]
async fn test_cancellation_takes_effect_at_next_lookup() {
    let token = CancellationToken::new();
    let catalog = CancellingCatalog {
        inner: dense_graph(),
        token: token.clone(),
        after: 3,
    };
    let search = ConnectionSearch::new(catalog, fast_config(6));
    let observer = RecordingObserver::default();

    let result = search
        .find_connection_with("Person 0", "Nobody", &token, &observer)
        .await;

    assert!(matches!(result, Err(SearchError::Cancelled)));
    assert_eq!(search.catalog().inner.lookup_count(), 3);

    let events = observer.events();
    assert_eq!(
        &events[events.len() - 2..],
        &[Event::Phase(SearchPhase::Terminated), Event::Finished]
    );
}

#[tokio::test]
async fn test_cancellation_interrupts_request_delay() {
    let token = CancellationToken::new();
    let catalog = CancellingCatalog {
        inner: dense_graph(),
        token: token.clone(),
        after: 2,
    };
    let config = SearchConfig {
        request_delay: Duration::from_secs(3600),
        ..SearchConfig::new(6)
    };
    let search = ConnectionSearch::new(catalog, config);

    let result = tokio::time::timeout(
        Duration::from_secs(5),
        search.find_connection_with("Person 0", "Nobody", &token, &NoopObserver),
    )
    .await
    .expect("cancellation should cut the pause short");

    assert!(matches!(result, Err(SearchError::Cancelled)));
    assert_eq!(search.catalog().inner.lookup_count(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_timeout_reports_cancellation() {
    let config = SearchConfig {
        request_delay: Duration::from_millis(200),
        timeout: Some(Duration::from_millis(500)),
        ..SearchConfig::new(6)
    };
    let search = ConnectionSearch::new(dense_graph(), config);

    let result = search.find_connection("Person 0", "Nobody").await;

    assert!(matches!(result, Err(SearchError::Cancelled)));
    // resolve, filmography and two casts fit before the deadline
    assert_eq!(search.catalog().lookup_count(), 4);
}

#[tokio::test]
async fn test_unrepresentable_timeout_means_no_deadline() {
    let config = SearchConfig {
        timeout: Some(Duration::from_secs(u64::MAX)),
        ..fast_config(6)
    };
    let search = ConnectionSearch::new(fixtures::shortest_path_graph(), config);

    let report = search.find_connection("A", "Target").await.unwrap();

    assert_eq!(report.path().map(|path| path.len()), Some(2));
}
