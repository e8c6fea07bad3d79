use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid zone: {0}")]
    InvalidZone(String),

    #[error("Peer status fetch failed: {0}")]
    StatusFetchFailed(String),

    #[error("Peer status fetch timed out after {0:?}")]
    StatusFetchTimeout(Duration),

    #[error("Invalid peer status: {0}")]
    InvalidPeerStatus(String),

    #[error("CNAME chain starting at {name} exceeds {max_depth} hops")]
    CnameChainTooLong { name: String, max_depth: usize },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
