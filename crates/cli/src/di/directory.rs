use std::sync::Arc;
use std::time::Duration;
use tailnet_dns_application::ports::PeerStatusSource;
use tailnet_dns_application::use_cases::{RefreshDirectoryUseCase, ResolveQueryUseCase};
use tailnet_dns_domain::config::StatusSourceConfig;
use tailnet_dns_domain::{Config, Zone};
use tailnet_dns_infrastructure::directory::SharedDirectory;
use tailnet_dns_infrastructure::dns::ZoneQueryHandler;
use tailnet_dns_infrastructure::status::{JsonFileStatusSource, TailscaleCliStatusSource};
use tailnet_dns_jobs::DirectoryRefreshJob;
use tracing::info;

pub struct DirectoryServices {
    pub refresh: Arc<RefreshDirectoryUseCase>,
    pub zone_handler: Arc<ZoneQueryHandler>,
}

impl DirectoryServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let directory = &config.directory;
        let zone = Zone::new(directory.zone.trim())?;

        let source: Arc<dyn PeerStatusSource> = match &directory.status_source {
            StatusSourceConfig::TailscaleCli { command } => {
                info!(command = ?command, "Using tailscale CLI status source");
                Arc::new(TailscaleCliStatusSource::new(command)?)
            }
            StatusSourceConfig::JsonFile { path } => {
                info!(path = %path, "Using JSON file status source");
                Arc::new(JsonFileStatusSource::new(path))
            }
        };

        let store = Arc::new(SharedDirectory::new());

        let refresh = Arc::new(
            RefreshDirectoryUseCase::new(source, store.clone(), zone.clone())
                .with_fetch_timeout(Duration::from_secs(directory.fetch_timeout_secs)),
        );
        let resolve = Arc::new(ResolveQueryUseCase::new(store, zone, directory.ttl));

        Ok(Self {
            refresh,
            zone_handler: Arc::new(ZoneQueryHandler::new(resolve)),
        })
    }

    pub fn refresh_job(&self, config: &Config) -> DirectoryRefreshJob {
        DirectoryRefreshJob::new(self.refresh.clone())
            .with_poll_interval(config.directory.poll_interval)
    }
}
