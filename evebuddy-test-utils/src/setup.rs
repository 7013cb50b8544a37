use std::{sync::Arc, time::Duration};

use evebuddy::app::{
    service::memory::{MemoryStore, Snapshot},
    status::StatusCache,
    view::{spawn_view, ViewConfig, ViewHandle, ViewModel},
    AppContext,
};
use tokio::sync::watch;

use crate::error::TestError;

/// How long [`TestSetup::wait_for`] waits for a matching snapshot.
const WAIT_TIMEOUT: Duration = Duration::from_secs(5);

/// Test environment with an in-memory store behind an application context.
pub struct TestSetup {
    pub ctx: AppContext,
    pub store: Arc<MemoryStore>,
    /// Data the store was loaded from.
    pub snapshot: Snapshot,
}

impl TestSetup {
    pub fn new(snapshot: Snapshot, view_config: ViewConfig) -> Self {
        let store = Arc::new(MemoryStore::new(snapshot.clone()));
        let status = StatusCache::new();
        store.init_status_cache(&status);
        let ctx =
            AppContext::new(store.clone(), store.clone(), status).with_view_config(view_config);

        Self {
            ctx,
            store,
            snapshot,
        }
    }

    /// Start a view on the test context.
    pub fn spawn<M: ViewModel>(&self, model: M) -> ViewHandle<M> {
        spawn_view(model, self.ctx.clone())
    }

    /// Wait until a snapshot of a view matches a predicate.
    ///
    /// # Arguments
    /// - `receiver` - Snapshot receiver of the view, see [`ViewHandle::subscribe`]
    /// - `predicate` - Returns `true` for the awaited snapshot
    ///
    /// # Returns
    /// - `Ok(S)` - The first matching snapshot
    /// - `Err(TestError::Timeout)` - No matching snapshot within 5 seconds
    pub async fn wait_for<S, F>(
        &self,
        receiver: &mut watch::Receiver<S>,
        predicate: F,
    ) -> Result<S, TestError>
    where
        S: Clone,
        F: Fn(&S) -> bool,
    {
        let wait = async {
            loop {
                {
                    let current = receiver.borrow_and_update();
                    if predicate(&current) {
                        return Some(current.clone());
                    }
                }
                if receiver.changed().await.is_err() {
                    return None;
                }
            }
        };
        match tokio::time::timeout(WAIT_TIMEOUT, wait).await {
            Ok(Some(snapshot)) => Ok(snapshot),
            _ => Err(TestError::Timeout("view snapshot")),
        }
    }

    /// Serialize the data of this setup, e.g. for writing a snapshot file.
    pub fn snapshot_json(&self) -> Result<String, TestError> {
        Ok(serde_json::to_string_pretty(&self.snapshot)?)
    }
}
