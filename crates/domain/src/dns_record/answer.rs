use super::RecordType;
use std::net::{Ipv4Addr, Ipv6Addr};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    AAAA(Ipv6Addr),
    /// Fully qualified target, trailing dot included.
    CNAME(String),
}

impl RecordData {
    pub fn record_type(&self) -> RecordType {
        match self {
            RecordData::A(_) => RecordType::A,
            RecordData::AAAA(_) => RecordType::AAAA,
            RecordData::CNAME(_) => RecordType::CNAME,
        }
    }
}

/// One resource record of an answer section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub name: String,

    pub ttl: u32,

    pub data: RecordData,
}

impl AnswerRecord {
    pub fn new(name: impl Into<String>, ttl: u32, data: RecordData) -> Self {
        Self {
            name: name.into(),
            ttl,
            data,
        }
    }

    pub fn record_type(&self) -> RecordType {
        self.data.record_type()
    }

    pub fn as_a(&self) -> Option<Ipv4Addr> {
        match self.data {
            RecordData::A(addr) => Some(addr),
            _ => None,
        }
    }

    pub fn as_aaaa(&self) -> Option<Ipv6Addr> {
        match self.data {
            RecordData::AAAA(addr) => Some(addr),
            _ => None,
        }
    }

    pub fn as_cname(&self) -> Option<&str> {
        match &self.data {
            RecordData::CNAME(target) => Some(target),
            _ => None,
        }
    }
}
