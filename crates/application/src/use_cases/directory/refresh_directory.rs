use crate::ports::{DirectoryStore, PeerStatusSource};
use crate::services::DirectoryBuilder;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tailnet_dns_domain::{DomainError, Zone};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Result of a successful refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshOutcome {
    pub generation: u64,
    pub entries: usize,
    pub hosts: usize,
}

/// Fetches peer status, rebuilds the directory and publishes it.
///
/// On any failure the published directory is left untouched and the
/// previous one keeps being served.
pub struct RefreshDirectoryUseCase {
    source: Arc<dyn PeerStatusSource>,
    store: Arc<dyn DirectoryStore>,
    builder: DirectoryBuilder,
    fetch_timeout: Duration,
    consecutive_failures: AtomicU64,
    last_success: RwLock<Option<Instant>>,
}

impl RefreshDirectoryUseCase {
    pub fn new(
        source: Arc<dyn PeerStatusSource>,
        store: Arc<dyn DirectoryStore>,
        zone: Zone,
    ) -> Self {
        Self {
            source,
            store,
            builder: DirectoryBuilder::new(zone),
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            consecutive_failures: AtomicU64::new(0),
            last_success: RwLock::new(None),
        }
    }

    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    pub async fn execute(&self) -> Result<RefreshOutcome, DomainError> {
        debug!(zone = %self.builder.zone(), "Refreshing peer directory");

        let snapshot = match tokio::time::timeout(self.fetch_timeout, self.source.fetch_status())
            .await
        {
            Ok(Ok(snapshot)) => snapshot,
            Ok(Err(e)) => return Err(self.record_failure(e).await),
            Err(_) => {
                let e = DomainError::StatusFetchTimeout(self.fetch_timeout);
                return Err(self.record_failure(e).await);
            }
        };

        let directory = self.builder.build(&snapshot);
        let entries = directory.len();
        let generation = self.store.publish(directory);

        self.consecutive_failures.store(0, Ordering::Relaxed);
        *self.last_success.write().await = Some(Instant::now());

        info!(
            generation,
            entries,
            hosts = snapshot.host_count(),
            "Peer directory published"
        );

        Ok(RefreshOutcome {
            generation,
            entries,
            hosts: snapshot.host_count(),
        })
    }

    pub fn consecutive_failures(&self) -> u64 {
        self.consecutive_failures.load(Ordering::Relaxed)
    }

    pub async fn last_success(&self) -> Option<Instant> {
        *self.last_success.read().await
    }

    pub fn zone(&self) -> &Zone {
        self.builder.zone()
    }

    async fn record_failure(&self, error: DomainError) -> DomainError {
        let failures = self.consecutive_failures.fetch_add(1, Ordering::Relaxed) + 1;
        let stale_secs = self
            .last_success
            .read()
            .await
            .map(|at| at.elapsed().as_secs());

        warn!(
            error = %error,
            consecutive_failures = failures,
            serving_generation = self.store.current().generation(),
            stale_secs = ?stale_secs,
            "Peer directory refresh failed, keeping previous directory"
        );

        error
    }
}
