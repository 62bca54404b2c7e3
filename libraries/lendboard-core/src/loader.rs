//! One-shot loading of the user list
//!
//! A loader issues exactly one fetch when mounted and never retries. Filter
//! and page changes work on the records it already holds.

use crate::traits::RecordSource;
use crate::types::{assign_ids, UserRecord};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Status of the list fetch as seen by the list view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    /// Human-readable reason, shown as a page-level message
    Error(String),
    Ready(Vec<UserRecord>),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn records(&self) -> Option<&[UserRecord]> {
        match self {
            LoadState::Ready(records) => Some(records),
            _ => None,
        }
    }
}

/// Owns the in-flight fetch for one list view.
///
/// `teardown` only marks the view as gone. The request keeps running, but its
/// result is dropped instead of being published.
pub struct UserListLoader {
    tx: Arc<watch::Sender<LoadState>>,
    state: watch::Receiver<LoadState>,
    cancelled: Arc<AtomicBool>,
    task: Option<JoinHandle<()>>,
}

/// Publish `next` unless the view was torn down.
///
/// The flag is read under the channel's write lock, and `teardown` sets it
/// under the same lock, so nothing is published once `teardown` returns.
fn publish(tx: &watch::Sender<LoadState>, cancelled: &AtomicBool, next: LoadState) -> bool {
    tx.send_if_modified(move |state| {
        if cancelled.load(Ordering::Acquire) {
            return false;
        }
        *state = next;
        true
    })
}

impl UserListLoader {
    /// Start the fetch. Must be called from within a tokio runtime.
    pub fn mount(source: Arc<dyn RecordSource>) -> Self {
        let (tx, rx) = watch::channel(LoadState::Loading);
        let tx = Arc::new(tx);
        let cancelled = Arc::new(AtomicBool::new(false));

        let task_tx = Arc::clone(&tx);
        let guard = Arc::clone(&cancelled);

        debug!("Fetching user list");

        let task = tokio::spawn(async move {
            let outcome = match source.list_users().await {
                Ok(users) => LoadState::Ready(assign_ids(users)),
                Err(e) => LoadState::Error(e.to_string()),
            };

            match &outcome {
                LoadState::Ready(records) => info!(count = records.len(), "User list loaded"),
                LoadState::Error(message) => warn!(error = %message, "User list failed to load"),
                LoadState::Loading => {}
            }

            if !publish(&task_tx, &guard, outcome) {
                debug!("List view torn down, discarding fetch result");
            }
        });

        Self {
            tx,
            state: rx,
            cancelled,
            task: Some(task),
        }
    }

    /// Current state
    pub fn state(&self) -> LoadState {
        self.state.borrow().clone()
    }

    /// A receiver that is notified when the fetch settles
    pub fn subscribe(&self) -> watch::Receiver<LoadState> {
        self.state.clone()
    }

    /// Mark the owning view as gone. Later results are discarded.
    pub fn teardown(&self) {
        self.tx.send_if_modified(|_| {
            self.cancelled.store(true, Ordering::Release);
            false
        });
    }

    pub fn is_torn_down(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Wait for the fetch to finish and return the resulting state.
    ///
    /// A fetch task that dies without answering publishes an error. After
    /// teardown this still waits, and the state stays as it was.
    pub async fn wait(&mut self) -> LoadState {
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                warn!(error = %e, "User list fetch task failed");
                publish(
                    &self.tx,
                    &self.cancelled,
                    LoadState::Error("Failed to fetch users".to_string()),
                );
            }
        }
        self.state()
    }
}

impl Drop for UserListLoader {
    fn drop(&mut self) {
        self.teardown();
    }
}
