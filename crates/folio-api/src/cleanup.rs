//! Periodic purge of expired reset and verification tokens.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use folio_core::error::AppError;
use folio_core::traits::TokenStore;

/// Removes expired token records from the store.
#[derive(Clone)]
pub struct TokenCleanup {
    /// Token store to purge.
    tokens: Arc<dyn TokenStore>,
}

impl std::fmt::Debug for TokenCleanup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCleanup").finish()
    }
}

impl TokenCleanup {
    /// Creates a new token cleanup handler.
    pub fn new(tokens: Arc<dyn TokenStore>) -> Self {
        Self { tokens }
    }

    /// Runs one cleanup cycle. Returns the number of records removed.
    pub async fn run_cleanup(&self) -> Result<u64, AppError> {
        let removed = self.tokens.purge_expired(Utc::now()).await?;
        if removed > 0 {
            info!(count = removed, "Purged expired tokens");
        } else {
            debug!("No expired tokens to purge");
        }
        Ok(removed)
    }

    /// Spawns a task running a cleanup cycle every `interval` until `shutdown` flips to `true`.
    pub fn spawn(self, interval: Duration, mut shutdown: watch::Receiver<bool>) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        if let Err(e) = self.run_cleanup().await {
                            error!(error = %e, "Token cleanup failed");
                        }
                    }
                    changed = shutdown.changed() => {
                        if changed.is_err() || *shutdown.borrow() {
                            info!("Token cleanup stopped");
                            break;
                        }
                    }
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration as ChronoDuration;
    use folio_core::types::{StoredToken, TokenKind};

    use crate::store::MemoryTokenStore;

    #[tokio::test]
    async fn test_run_cleanup_removes_only_expired() {
        let store = Arc::new(MemoryTokenStore::new());
        let now = Utc::now();
        store
            .insert(StoredToken::new(
                "u1",
                TokenKind::Verification,
                "stale",
                now - ChronoDuration::hours(1),
            ))
            .await
            .unwrap();
        store
            .insert(StoredToken::new(
                "u1",
                TokenKind::Reset,
                "live",
                now + ChronoDuration::hours(1),
            ))
            .await
            .unwrap();

        let cleanup = TokenCleanup::new(store.clone());
        assert_eq!(cleanup.run_cleanup().await.unwrap(), 1);
        assert_eq!(store.len(), 1);
        assert_eq!(cleanup.run_cleanup().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_spawned_task_stops_on_shutdown() {
        let store = Arc::new(MemoryTokenStore::new());
        let (tx, rx) = watch::channel(false);
        let handle = TokenCleanup::new(store).spawn(Duration::from_secs(60), rx);

        tx.send(true).unwrap();
        tokio::time::timeout(Duration::from_secs(5), handle)
            .await
            .expect("task should stop")
            .expect("task should not panic");
    }
}
