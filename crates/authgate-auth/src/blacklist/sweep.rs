//! Periodic purge of dead blacklist entries.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, error, info};

use super::list::RevocationList;

/// Background task that purges expired blacklist entries on an interval.
///
/// Lookup-time cleanup already keeps the list correct; the sweeper only
/// bounds the size of entries that are never presented again.
#[derive(Debug, Clone)]
pub struct BlacklistSweeper {
    list: RevocationList,
    interval: Duration,
}

impl BlacklistSweeper {
    pub fn new(list: RevocationList, interval: Duration) -> Self {
        Self { list, interval }
    }

    /// Runs a single purge, logging rather than returning failures.
    pub async fn run_once(&self) -> u64 {
        match self.list.purge_expired().await {
            Ok(0) => {
                debug!("Blacklist sweep found nothing to purge");
                0
            }
            Ok(purged) => {
                info!(purged, "Purged expired blacklist entries");
                purged
            }
            Err(e) => {
                error!(error = %e, "Blacklist sweep failed");
                0
            }
        }
    }

    /// Runs until `shutdown` flips to `true` or its sender is dropped.
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) {
        info!(
            interval_secs = self.interval.as_secs(),
            "Blacklist sweeper started"
        );

        let mut ticker = time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
                _ = ticker.tick() => {
                    self.run_once().await;
                }
            }
        }

        info!("Blacklist sweeper stopped");
    }

    /// Spawns [`run`](Self::run) onto the tokio runtime.
    pub fn spawn(self, shutdown: watch::Receiver<bool>) -> JoinHandle<()> {
        tokio::spawn(self.run(shutdown))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Utc;

    use authgate_database::MemoryBlacklistStore;

    use super::*;

    #[tokio::test]
    async fn test_run_once_purges() {
        let list = RevocationList::new(Arc::new(MemoryBlacklistStore::new()));
        list.add("old", Utc::now() - chrono::Duration::minutes(1))
            .await
            .unwrap();

        let sweeper = BlacklistSweeper::new(list.clone(), Duration::from_secs(60));
        assert_eq!(sweeper.run_once().await, 1);
        assert_eq!(sweeper.run_once().await, 0);
        assert_eq!(list.len().await.unwrap(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stops_on_shutdown() {
        let list = RevocationList::new(Arc::new(MemoryBlacklistStore::new()));
        let (tx, rx) = watch::channel(false);
        let handle = BlacklistSweeper::new(list, Duration::from_secs(1)).spawn(rx);

        time::sleep(Duration::from_secs(3)).await;
        tx.send(true).unwrap();
        handle.await.unwrap();
    }
}
