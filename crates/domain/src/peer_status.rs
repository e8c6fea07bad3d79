use std::net::IpAddr;

/// One node of the mesh as reported by the status source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeerStatus {
    pub hostname: String,
    pub addresses: Vec<IpAddr>,
    pub online: bool,
    pub tags: Vec<String>,
}

impl PeerStatus {
    pub fn new(hostname: impl Into<String>, addresses: Vec<IpAddr>, online: bool) -> Self {
        Self {
            hostname: hostname.into(),
            addresses,
            online,
            tags: Vec::new(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

/// Point-in-time view of mesh membership: the local node plus its peers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeerStatusSnapshot {
    pub self_peer: PeerStatus,
    pub peers: Vec<PeerStatus>,
}

impl PeerStatusSnapshot {
    pub fn new(self_peer: PeerStatus, peers: Vec<PeerStatus>) -> Self {
        Self { self_peer, peers }
    }

    /// Self first, then every peer in snapshot order.
    pub fn hosts(&self) -> impl Iterator<Item = &PeerStatus> {
        std::iter::once(&self.self_peer).chain(self.peers.iter())
    }

    pub fn host_count(&self) -> usize {
        self.peers.len() + 1
    }
}
