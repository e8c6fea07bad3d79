use serde::Deserialize;
use std::collections::BTreeMap;
use std::net::IpAddr;
use std::str::FromStr;
use tailnet_dns_domain::{DomainError, PeerStatus, PeerStatusSnapshot};
use tracing::warn;

/// The subset of `tailscale status --json` the directory is built from.
#[derive(Debug, Deserialize)]
pub struct StatusDocument {
    #[serde(rename = "Self")]
    self_node: Option<NodeDto>,

    /// Keyed by node public key.
    #[serde(rename = "Peer", default)]
    peers: Option<BTreeMap<String, NodeDto>>,
}

#[derive(Debug, Deserialize)]
struct NodeDto {
    #[serde(rename = "HostName", default)]
    host_name: String,

    #[serde(rename = "TailscaleIPs", default)]
    tailscale_ips: Option<Vec<String>>,

    #[serde(rename = "Online", default)]
    online: bool,

    #[serde(rename = "Tags", default)]
    tags: Option<Vec<String>>,
}

impl StatusDocument {
    pub fn parse(bytes: &[u8]) -> Result<Self, DomainError> {
        serde_json::from_slice(bytes)
            .map_err(|e| DomainError::InvalidPeerStatus(format!("malformed status JSON: {}", e)))
    }

    pub fn into_snapshot(self) -> Result<PeerStatusSnapshot, DomainError> {
        let self_node = self.self_node.ok_or_else(|| {
            DomainError::InvalidPeerStatus("status has no Self node".to_string())
        })?;

        let peers = self
            .peers
            .unwrap_or_default()
            .into_values()
            .map(NodeDto::into_peer)
            .collect();

        Ok(PeerStatusSnapshot::new(self_node.into_peer(), peers))
    }
}

impl NodeDto {
    fn into_peer(self) -> PeerStatus {
        let addresses = self
            .tailscale_ips
            .unwrap_or_default()
            .iter()
            .filter_map(|raw| match IpAddr::from_str(raw) {
                Ok(ip) => Some(ip),
                Err(e) => {
                    warn!(error = %e, host = %self.host_name, ip = %raw, "Invalid tailnet address");
                    None
                }
            })
            .collect();

        PeerStatus::new(self.host_name, addresses, self.online)
            .with_tags(self.tags.unwrap_or_default())
    }
}
