use crate::DomainError;
use std::fmt;

/// The DNS suffix every directory name is published under.
///
/// Stored lower-case without leading or trailing dots, so `Example.COM.`
/// and `example.com` are the same zone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Zone {
    name: String,
    suffix: String,
}

impl Zone {
    pub fn new(name: &str) -> Result<Self, DomainError> {
        let name = name.trim().trim_matches('.').to_ascii_lowercase();

        if name.is_empty() {
            return Err(DomainError::InvalidZone("zone cannot be empty".to_string()));
        }
        if name.split('.').any(|label| label.is_empty() || label.len() > 63) {
            return Err(DomainError::InvalidZone(format!(
                "zone '{}' has an empty or oversized label",
                name
            )));
        }
        if name.chars().any(char::is_whitespace) {
            return Err(DomainError::InvalidZone(format!(
                "zone '{}' contains whitespace",
                name
            )));
        }

        let suffix = format!(".{}", name);
        Ok(Self { name, suffix })
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// Strips the trailing dot and the zone suffix from `qname` and
    /// lower-cases what is left. `None` for out-of-zone names and the apex.
    pub fn short_name(&self, qname: &str) -> Option<String> {
        let qname = qname.strip_suffix('.').unwrap_or(qname).to_ascii_lowercase();
        let short = qname.strip_suffix(self.suffix.as_str())?;
        if short.is_empty() {
            return None;
        }
        Some(short.to_string())
    }

    pub fn contains(&self, qname: &str) -> bool {
        let qname = qname.strip_suffix('.').unwrap_or(qname).to_ascii_lowercase();
        qname == self.name || qname.ends_with(self.suffix.as_str())
    }

    /// `<short>.<zone>.`
    pub fn fqdn(&self, short: &str) -> String {
        format!("{}.{}.", short.to_ascii_lowercase(), self.name)
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
