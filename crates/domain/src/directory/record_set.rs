use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Per-name record lists. Order is preserved and drives answer order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    a: Vec<Ipv4Addr>,
    aaaa: Vec<Ipv6Addr>,
    cname: Vec<String>,
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_a<I: IntoIterator<Item = Ipv4Addr>>(mut self, addrs: I) -> Self {
        self.a = addrs.into_iter().collect();
        self
    }

    pub fn with_aaaa<I: IntoIterator<Item = Ipv6Addr>>(mut self, addrs: I) -> Self {
        self.aaaa = addrs.into_iter().collect();
        self
    }

    pub fn with_cname(mut self, target: impl Into<String>) -> Self {
        self.cname = vec![target.into()];
        self
    }

    /// Replaces the list of the address's family with just this address.
    pub fn set_address(&mut self, addr: IpAddr) {
        match addr {
            IpAddr::V4(v4) => self.a = vec![v4],
            IpAddr::V6(v6) => self.aaaa = vec![v6],
        }
    }

    /// Appends to the list of the address's family.
    pub fn push_address(&mut self, addr: IpAddr) {
        match addr {
            IpAddr::V4(v4) => self.a.push(v4),
            IpAddr::V6(v6) => self.aaaa.push(v6),
        }
    }

    pub fn set_cname(&mut self, target: impl Into<String>) {
        self.cname = vec![target.into()];
    }

    pub fn a(&self) -> &[Ipv4Addr] {
        &self.a
    }

    pub fn aaaa(&self) -> &[Ipv6Addr] {
        &self.aaaa
    }

    pub fn cname(&self) -> &[String] {
        &self.cname
    }

    pub fn has_cname(&self) -> bool {
        !self.cname.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.a.is_empty() && self.aaaa.is_empty() && self.cname.is_empty()
    }
}
