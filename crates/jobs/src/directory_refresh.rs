use std::sync::Arc;
use std::time::Duration;
use tailnet_dns_application::use_cases::RefreshDirectoryUseCase;
use tailnet_dns_domain::config::PollInterval;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Background job that rebuilds the peer directory.
///
/// The first tick fires immediately and is the startup build. A zero
/// interval stops after that build. Failures are logged and retried on
/// the next tick; they never stop the job.
pub struct DirectoryRefreshJob {
    refresh: Arc<RefreshDirectoryUseCase>,
    interval: Duration,
    shutdown: CancellationToken,
}

impl DirectoryRefreshJob {
    pub fn new(refresh: Arc<RefreshDirectoryUseCase>) -> Self {
        Self {
            refresh,
            interval: PollInterval::default().as_duration(),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_poll_interval(self, interval: PollInterval) -> Self {
        self.with_interval(interval.as_duration())
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            zone = %self.refresh.zone(),
            interval_ms = self.interval.as_millis() as u64,
            "Starting directory refresh job"
        );

        tokio::spawn(async move { self.run().await });
    }

    async fn run(&self) {
        if self.interval.is_zero() {
            tokio::select! {
                _ = self.shutdown.cancelled() => {}
                _ = self.refresh_once() => {}
            }
            info!("DirectoryRefreshJob: periodic refresh disabled");
            return;
        }

        let mut interval = tokio::time::interval(self.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    info!("DirectoryRefreshJob: shutting down");
                    break;
                }
                _ = interval.tick() => {
                    self.refresh_once().await;
                }
            }
        }
    }

    async fn refresh_once(&self) {
        if let Err(e) = self.refresh.execute().await {
            error!(
                error = %e,
                consecutive_failures = self.refresh.consecutive_failures(),
                "DirectoryRefreshJob: refresh failed"
            );
        }
    }
}
