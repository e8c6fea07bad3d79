#![allow(dead_code)]
use tailnet_dns_domain::{Directory, PeerStatus, PeerStatusSnapshot, RecordSet, Zone};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
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

pub fn zone() -> Zone {
    Zone::new("example.com").unwrap()
}

/// Three names: an address holder, an alias of it, and an alias that also
/// carries its own addresses.
pub fn fixture_directory() -> Directory {
    vec![
        (
            "test1",
            RecordSet::new()
                .with_a([v4("127.0.0.1")])
                .with_aaaa([v6("::1")]),
        ),
        ("test2", RecordSet::new().with_cname("test1.example.com.")),
        (
            "test3",
            RecordSet::new()
                .with_a([
                    v4("127.0.0.1"),
                    v4("127.0.0.2"),
                    v4("127.0.0.3"),
                ])
                .with_aaaa([
                    v6("::1"),
                    v6("::2"),
                    v6("::3"),
                ])
                .with_cname("test2.example.com."),
        ),
    ]
    .into_iter()
    .collect()
}

pub fn v4(s: &str) -> Ipv4Addr {
    s.parse().unwrap()
}

pub fn v6(s: &str) -> Ipv6Addr {
    s.parse().unwrap()
}
