use super::StatusDocument;
use async_trait::async_trait;
use std::path::PathBuf;
use tailnet_dns_application::ports::PeerStatusSource;
use tailnet_dns_domain::{DomainError, PeerStatusSnapshot};
use tokio::fs;
use tracing::debug;

/// Reads a status document in the `tailscale status --json` shape from disk.
pub struct JsonFileStatusSource {
    path: PathBuf,
}

impl JsonFileStatusSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PeerStatusSource for JsonFileStatusSource {
    async fn fetch_status(&self) -> Result<PeerStatusSnapshot, DomainError> {
        let bytes = fs::read(&self.path).await.map_err(|e| {
            DomainError::StatusFetchFailed(format!(
                "failed to read {}: {}",
                self.path.display(),
                e
            ))
        })?;

        debug!(path = %self.path.display(), bytes = bytes.len(), "Status file read");
        StatusDocument::parse(&bytes)?.into_snapshot()
    }
}
