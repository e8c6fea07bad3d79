#![allow(dead_code)]
use std::io::Write;
use std::net::Ipv4Addr;
use std::sync::Arc;
use tailnet_dns_application::ports::DirectoryStore;
use tailnet_dns_application::use_cases::ResolveQueryUseCase;
use tailnet_dns_domain::{Directory, RecordSet, Zone};
use tailnet_dns_infrastructure::directory::SharedDirectory;
use tailnet_dns_infrastructure::dns::ZoneQueryHandler;
use tempfile::NamedTempFile;

/// Trimmed `tailscale status --json` output: self, one tagged online peer
/// and one offline peer.
pub const STATUS_JSON: &str = r#"{
  "Version": "1.62.0",
  "BackendState": "Running",
  "Self": {
    "ID": "n1",
    "HostName": "Gateway",
    "DNSName": "gateway.tail1234.ts.net.",
    "TailscaleIPs": ["100.64.0.1", "fd7a:115c:a1e0::1"],
    "Online": true
  },
  "Peer": {
    "nodekey:bbbb": {
      "HostName": "web-1",
      "TailscaleIPs": ["100.64.0.2"],
      "Online": true,
      "Tags": ["tag:cname-www", "tag:dnslb-web"]
    },
    "nodekey:aaaa": {
      "HostName": "sleepy",
      "TailscaleIPs": ["100.64.0.3"],
      "Online": false,
      "Tags": ["tag:dnslb-web"]
    }
  }
}"#;

pub fn write_status_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

pub fn zone() -> Zone {
    Zone::new("example.com").unwrap()
}

pub fn v4(s: &str) -> Ipv4Addr {
    s.parse().unwrap()
}

pub fn fixture_directory() -> Directory {
    vec![
        (
            "test1",
            RecordSet::new()
                .with_a([v4("127.0.0.1")])
                .with_aaaa([std::net::Ipv6Addr::LOCALHOST]),
        ),
        ("test2", RecordSet::new().with_cname("test1.example.com.")),
        ("v4only", RecordSet::new().with_a([v4("100.64.0.9")])),
        ("loop", RecordSet::new().with_cname("loop.example.com.")),
    ]
    .into_iter()
    .collect()
}

pub fn handler_with(directory: Directory) -> (Arc<SharedDirectory>, Arc<ZoneQueryHandler>) {
    let store = Arc::new(SharedDirectory::new());
    store.publish(directory);
    (store.clone(), handler_on(store))
}

pub fn handler_on(store: Arc<dyn DirectoryStore>) -> Arc<ZoneQueryHandler> {
    let use_case = Arc::new(ResolveQueryUseCase::new(store, zone(), 60));
    Arc::new(ZoneQueryHandler::new(use_case))
}
