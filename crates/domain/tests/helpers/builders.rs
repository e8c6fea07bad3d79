#![allow(dead_code)]
use tailnet_dns_domain::{PeerStatus, PeerStatusSnapshot};
use std::net::IpAddr;
use std::str::FromStr;

pub struct PeerBuilder {
    hostname: String,
    addresses: Vec<IpAddr>,
    online: bool,
    tags: Vec<String>,
}

impl PeerBuilder {
    pub fn new(hostname: &str) -> Self {
        Self {
            hostname: hostname.to_string(),
            addresses: Vec::new(),
            online: true,
            tags: Vec::new(),
        }
    }

    pub fn address(mut self, address: &str) -> Self {
        self.addresses
            .push(IpAddr::from_str(address).expect("Invalid IP address"));
        self
    }

    pub fn offline(mut self) -> Self {
        self.online = false;
        self
    }

    pub fn tag(mut self, tag: &str) -> Self {
        self.tags.push(tag.to_string());
        self
    }

    pub fn build(self) -> PeerStatus {
        PeerStatus::new(self.hostname, self.addresses, self.online).with_tags(self.tags)
    }
}

pub fn snapshot(self_peer: PeerStatus, peers: Vec<PeerStatus>) -> PeerStatusSnapshot {
    PeerStatusSnapshot::new(self_peer, peers)
}
