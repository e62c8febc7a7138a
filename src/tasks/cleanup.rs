//! Expiry Sweep Task
//!
//! Background task that periodically evicts URLs idle past their expiration.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::store::UrlStore;

/// Spawns a background task that periodically sweeps expired entries.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between sweeps. It holds the store's write lock only for the duration of
/// one sweep.
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
///
/// # Example
/// ```ignore
/// let store = Arc::new(RwLock::new(UrlStore::new(90)));
/// let cleanup_handle = spawn_cleanup_task(store.clone(), 60);
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task(
    store: Arc<RwLock<UrlStore>>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting expiry sweep task with interval of {} seconds",
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut store_guard = store.write().await;
                store_guard.sweep_expired()
            };

            if removed > 0 {
                info!("Expiry sweep: removed {} expired entries", removed);
            } else {
                debug!("Expiry sweep: no expired entries found");
            }
        }
    })
}

/// Waits for a background task to end and logs how it ended.
///
/// A panic inside the task is logged and swallowed so the server keeps
/// serving; cancellation (abort on shutdown) is logged at debug level.
pub async fn watch_task(name: &'static str, handle: JoinHandle<()>) {
    match handle.await {
        Ok(()) => info!("Background task '{}' finished", name),
        Err(err) if err.is_cancelled() => debug!("Background task '{}' cancelled", name),
        Err(err) => warn!("Background task '{}' failed: {}", name, err),
    }
}
