//! Full synchronizer lifecycle against the live mock server.
//!
//! Starts the mock server on a random port and exercises every operation
//! over real HTTP with the production transport. Writes are only visible
//! after a refresh, mirroring how the polling UI observes its own changes.

use board_core::Synchronizer;
use std::time::Duration;
use tokio::net::TcpListener;

async fn start_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        mock_server::run(listener).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn create_then_refresh_round_trip() {
    let base = start_server().await;
    let sync = Synchronizer::new(&base);

    sync.refresh().await;
    assert!(sync.snapshot().await.is_empty());

    let assigned = sync.create("hello board").await;
    assert_eq!(assigned, 0);
    // not visible until the next refresh
    assert!(sync.snapshot().await.is_empty());

    sync.refresh().await;
    let snapshot = sync.snapshot().await;
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].display_id, 0);
    assert_eq!(snapshot[0].message, "hello board");
    assert!(!snapshot[0].storage_id.is_empty());
}

#[tokio::test]
async fn remove_deletes_only_the_matched_record() {
    let base = start_server().await;
    let sync = Synchronizer::new(&base);

    sync.create("first").await;
    sync.refresh().await;
    sync.create("second").await;
    sync.refresh().await;
    assert_eq!(sync.snapshot().await.len(), 2);

    sync.remove("0").await;
    sync.refresh().await;

    let snapshot = sync.snapshot().await;
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].display_id, 1);
    assert_eq!(snapshot[0].message, "second");
}

#[tokio::test]
async fn update_overwrites_message_in_place() {
    let base = start_server().await;
    let sync = Synchronizer::new(&base);

    sync.create("original").await;
    sync.refresh().await;
    let before = sync.snapshot().await;

    sync.update("0", "edited").await;
    sync.refresh().await;

    let after = sync.snapshot().await;
    assert_eq!(after.len(), 1);
    assert_eq!(after[0].message, "edited");
    // storage id is immutable once assigned
    assert_eq!(after[0].storage_id, before[0].storage_id);
}

#[tokio::test]
async fn update_with_absent_display_id_changes_nothing() {
    let base = start_server().await;
    let sync = Synchronizer::new(&base);

    sync.create("original").await;
    sync.refresh().await;

    sync.update("5", "should not apply").await;
    sync.refresh().await;

    let snapshot = sync.snapshot().await;
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].message, "original");
}

#[tokio::test]
async fn remove_with_malformed_input_changes_nothing() {
    let base = start_server().await;
    let sync = Synchronizer::new(&base);

    sync.create("survivor").await;
    sync.refresh().await;

    sync.remove("definitely not a number").await;
    sync.refresh().await;

    assert_eq!(sync.snapshot().await.len(), 1);
}

#[tokio::test]
async fn deleted_display_id_is_reused_by_the_next_create() {
    let base = start_server().await;
    let sync = Synchronizer::new(&base);

    sync.create("a").await;
    sync.refresh().await;
    sync.create("b").await;
    sync.refresh().await;

    sync.remove("0").await;
    sync.refresh().await;

    let assigned = sync.create("c").await;
    assert_eq!(assigned, 0);
}

#[tokio::test]
async fn polling_lifecycle_over_real_http() {
    let base = start_server().await;
    let mut sync = Synchronizer::new(&base);

    sync.create("written before polling").await;
    sync.start();
    assert!(sync.is_polling());

    // the immediate refresh picks up the record well before the first tick
    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(sync.snapshot().await.len(), 1);

    sync.stop();
    assert!(!sync.is_polling());

    sync.create("written after stop").await;
    tokio::time::sleep(Duration::from_millis(1500)).await;
    // no poll ran, so the second record never became visible locally
    assert_eq!(sync.snapshot().await.len(), 1);
}
