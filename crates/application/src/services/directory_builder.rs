use rustc_hash::FxHashMap;
use tailnet_dns_domain::{Directory, PeerStatus, PeerStatusSnapshot, RecordSet, Zone};
use tracing::{debug, trace};

const TAG_NAMESPACE: &str = "tag:";
const CNAME_TAG_PREFIX: &str = "cname-";
const DNSLB_TAG_PREFIX: &str = "dnslb-";

/// A machine tag the directory understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MachineTag<'a> {
    /// `cname-<label>`: `<label>` becomes an alias of the tagged host.
    Cname(&'a str),
    /// `dnslb-<label>`: the host's addresses join the `<label>` group.
    DnsLb(&'a str),
}

impl<'a> MachineTag<'a> {
    /// Accepts both `cname-web` and the namespaced `tag:cname-web`.
    pub fn parse(raw: &'a str) -> Option<Self> {
        let tag = raw.strip_prefix(TAG_NAMESPACE).unwrap_or(raw);

        if let Some(label) = tag.strip_prefix(CNAME_TAG_PREFIX) {
            return (!label.is_empty()).then_some(MachineTag::Cname(label));
        }
        if let Some(label) = tag.strip_prefix(DNSLB_TAG_PREFIX) {
            return (!label.is_empty()).then_some(MachineTag::DnsLb(label));
        }
        None
    }
}

/// Turns a peer status snapshot into a [`Directory`].
///
/// Deterministic for a fixed snapshot: hosts are visited self first, then
/// peers in snapshot order, and "last one wins" rules follow that order.
pub struct DirectoryBuilder {
    zone: Zone,
}

impl DirectoryBuilder {
    pub fn new(zone: Zone) -> Self {
        Self { zone }
    }

    pub fn zone(&self) -> &Zone {
        &self.zone
    }

    pub fn build(&self, snapshot: &PeerStatusSnapshot) -> Directory {
        let mut entries: FxHashMap<String, RecordSet> = FxHashMap::default();

        for host in snapshot.hosts() {
            let hostname = host.hostname.trim().to_ascii_lowercase();

            if hostname.is_empty() {
                debug!(addresses = host.addresses.len(), "Skipping host entry without hostname");
            } else if !host.addresses.is_empty() {
                let set = entries.entry(hostname.clone()).or_default();
                for addr in &host.addresses {
                    set.set_address(*addr);
                }
            }

            // Offline hosts keep their own name but leave aliases and groups.
            if host.online {
                self.apply_tags(host, &hostname, &mut entries);
            }
        }

        debug!(
            hosts = snapshot.host_count(),
            entries = entries.len(),
            "Directory assembled"
        );

        Directory::from_entries(entries)
    }

    fn apply_tags(
        &self,
        host: &PeerStatus,
        hostname: &str,
        entries: &mut FxHashMap<String, RecordSet>,
    ) {
        for raw in &host.tags {
            match MachineTag::parse(raw) {
                Some(MachineTag::Cname(label)) => {
                    if hostname.is_empty() {
                        continue;
                    }
                    entries
                        .entry(label.to_ascii_lowercase())
                        .or_default()
                        .set_cname(self.zone.fqdn(hostname));
                }
                Some(MachineTag::DnsLb(label)) => {
                    let set = entries.entry(label.to_ascii_lowercase()).or_default();
                    for addr in &host.addresses {
                        set.push_address(*addr);
                    }
                }
                None => trace!(tag = %raw, host = %hostname, "Ignoring unrecognized tag"),
            }
        }
    }
}
