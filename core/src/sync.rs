//! The Synchronizer: owns the local snapshot and the recurring poll task.
//!
//! # Design
//! Exactly two states, Stopped (no poll task) and Polling (task active),
//! tracked by the `poll_task` field. `start` transitions Stopped → Polling
//! and is a no-op while Polling; `stop` transitions back and is a no-op
//! while Stopped. Write operations are valid in either state and never
//! touch the snapshot: their effect becomes visible on a later poll.
//!
//! Failure policy follows the upstream UI's behavior: a failed poll keeps
//! the previous snapshot and the next tick is the retry; a failed write is
//! dropped. Both are logged (debug for polls, warn for writes) rather than
//! fully silent.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::client::{self, BoardClient};
use crate::http::HttpRequest;
use crate::transport::{ReqwestTransport, Transport};
use crate::types::{CreateRecord, DeleteRecord, Record, UpdateBody, UpdateRecord};

const POLL_INTERVAL: Duration = Duration::from_millis(1000);

/// State shared between the Synchronizer handle and its poll task.
struct Shared {
    client: BoardClient,
    transport: Arc<dyn Transport>,
    snapshot: RwLock<Vec<Record>>,
}

impl Shared {
    /// Fetch the full collection; on success replace the snapshot wholesale.
    async fn refresh(&self) {
        let result = match self.transport.execute(self.client.build_list()).await {
            Ok(response) => self.client.parse_list(response),
            Err(err) => Err(err),
        };
        match result {
            Ok(data) => *self.snapshot.write().await = data,
            Err(err) => {
                tracing::debug!(error = %err, "poll failed, keeping previous snapshot");
            }
        }
    }

    /// Execute a write request, ignoring the response body. Failures are
    /// logged and dropped; there is no retry outside the poll cycle.
    async fn send(&self, request: HttpRequest, op: &'static str) {
        match self.transport.execute(request).await {
            Ok(response) if (200..300).contains(&response.status) => {}
            Ok(response) => {
                tracing::warn!(op, status = response.status, "write rejected by server");
            }
            Err(err) => tracing::warn!(op, error = %err, "write request failed"),
        }
    }
}

/// Maintains a periodically-refreshed local copy of the remote record
/// collection and issues writes against it.
///
/// Instantiable: each Synchronizer owns its snapshot and timer handle, so
/// several can coexist in one process. Must be used within a tokio runtime
/// (`start` spawns the poll task).
pub struct Synchronizer {
    shared: Arc<Shared>,
    poll_task: Option<JoinHandle<()>>,
}

impl Synchronizer {
    /// Synchronizer against `base_url` using the production transport.
    pub fn new(base_url: &str) -> Self {
        Self::with_transport(BoardClient::new(base_url), Arc::new(ReqwestTransport::new()))
    }

    pub fn with_transport(client: BoardClient, transport: Arc<dyn Transport>) -> Self {
        Self {
            shared: Arc::new(Shared {
                client,
                transport,
                snapshot: RwLock::new(Vec::new()),
            }),
            poll_task: None,
        }
    }

    /// Begin polling: one immediate refresh, then one per second. Calling
    /// `start` while already polling does nothing — there is never more
    /// than one poll task.
    pub fn start(&mut self) {
        if self.poll_task.is_some() {
            return;
        }
        let shared = Arc::clone(&self.shared);
        self.poll_task = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(POLL_INTERVAL);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                // first tick completes immediately
                ticker.tick().await;
                shared.refresh().await;
            }
        }));
    }

    /// Cancel the poll task if one is active; no-op otherwise. An in-flight
    /// request is abandoned at its await point, so the snapshot is never
    /// written after `stop` returns.
    pub fn stop(&mut self) {
        if let Some(task) = self.poll_task.take() {
            task.abort();
        }
    }

    pub fn is_polling(&self) -> bool {
        self.poll_task.is_some()
    }

    /// One manual refresh, independent of the poll task.
    pub async fn refresh(&self) {
        self.shared.refresh().await;
    }

    /// Create a record with the given message, assigning the smallest
    /// display id not present in the current snapshot. Returns the assigned
    /// id. The record appears locally only after a subsequent poll.
    pub async fn create(&self, message: &str) -> u32 {
        let input = {
            let snapshot = self.shared.snapshot.read().await;
            CreateRecord {
                id: client::next_display_id(&snapshot),
                message: message.to_string(),
            }
        };
        let display_id = input.id;
        match self.shared.client.build_create(&input) {
            Ok(request) => self.shared.send(request, "create").await,
            Err(err) => tracing::warn!(error = %err, "create request not sent"),
        }
        display_id
    }

    /// Delete the record(s) whose display id equals the base-10 parse of
    /// `display_id` (leading digit run, `parseInt`-style). Input with no
    /// leading digit, or with no match, still sends the request with an
    /// all-null id mapping, which the backend ignores.
    pub async fn remove(&self, display_id: &str) {
        let input = {
            let snapshot = self.shared.snapshot.read().await;
            DeleteRecord {
                id: client::map_storage_ids(&snapshot, display_id),
            }
        };
        match self.shared.client.build_remove(&input) {
            Ok(request) => self.shared.send(request, "remove").await,
            Err(err) => tracing::warn!(error = %err, "remove request not sent"),
        }
    }

    /// Overwrite the message of the record(s) matching `display_id`, with
    /// the same resolution and no-op semantics as [`Self::remove`].
    pub async fn update(&self, display_id: &str, new_message: &str) {
        let input = {
            let snapshot = self.shared.snapshot.read().await;
            UpdateRecord {
                id: client::map_storage_ids(&snapshot, display_id),
                update: UpdateBody {
                    message: new_message.to_string(),
                },
            }
        };
        match self.shared.client.build_update(&input) {
            Ok(request) => self.shared.send(request, "update").await,
            Err(err) => tracing::warn!(error = %err, "update request not sent"),
        }
    }

    /// Clone of the current snapshot, for the rendering layer.
    pub async fn snapshot(&self) -> Vec<Record> {
        self.shared.snapshot.read().await.clone()
    }
}

impl Drop for Synchronizer {
    fn drop(&mut self) {
        self.stop();
    }
}
