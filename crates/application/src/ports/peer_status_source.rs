use async_trait::async_trait;
use tailnet_dns_domain::{DomainError, PeerStatusSnapshot};

/// Fetches the current mesh membership (self plus peers).
#[async_trait]
pub trait PeerStatusSource: Send + Sync {
    async fn fetch_status(&self) -> Result<PeerStatusSnapshot, DomainError>;
}
