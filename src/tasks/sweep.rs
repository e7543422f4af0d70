//! TTL Sweep Task
//!
//! Background task that periodically removes expired search results from the
//! cache. Purely housekeeping: lookups enforce expiry themselves, so this
//! only reclaims memory held by entries nobody queries again.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::SearchCache;

/// Spawns a background task that periodically sweeps expired cache entries.
///
/// The task loops forever, sleeping for the configured interval between
/// sweeps and taking the write lock only for the sweep itself. Not caller
/// visible: no lookup ever observes an expired entry whether or not the
/// sweep has run yet.
///
/// # Arguments
/// * `cache` - Shared handle to the results cache
/// * `sweep_interval_secs` - Interval in seconds between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task; abort it when the owning service
/// shuts down.
pub fn spawn_sweep_task(
    cache: Arc<RwLock<SearchCache>>,
    sweep_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(sweep_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting TTL sweep task with interval of {} seconds",
            sweep_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut cache_guard = cache.write().await;
                cache_guard.sweep_expired()
            };

            if removed > 0 {
                info!("TTL sweep: removed {} expired entries", removed);
            } else {
                debug!("TTL sweep: no expired entries found");
            }
        }
    })
}
