use tailnet_dns_domain::{
    AnswerRecord, Directory, DomainError, RecordData, RecordSet, RequestedType, Zone,
};
use tracing::warn;

/// Maximum number of CNAME hops followed from the queried name.
pub const MAX_CNAME_DEPTH: usize = 10;

/// Turns a query name into answer records against one directory snapshot.
///
/// Every operation appends to the caller's answer list and returns how many
/// records it appended; `Ok(0)` is a miss. Nothing here does I/O or touches
/// the directory beyond reading it.
#[derive(Debug, Clone)]
pub struct QueryResolver {
    zone: Zone,
    ttl: u32,
}

impl QueryResolver {
    pub fn new(zone: Zone, ttl: u32) -> Self {
        Self { zone, ttl }
    }

    pub fn zone(&self) -> &Zone {
        &self.zone
    }

    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    pub fn resolve_a(
        &self,
        qname: &str,
        directory: &Directory,
        answers: &mut Vec<AnswerRecord>,
    ) -> Result<usize, DomainError> {
        self.resolve_address(qname, directory, answers, RequestedType::A)
    }

    pub fn resolve_aaaa(
        &self,
        qname: &str,
        directory: &Directory,
        answers: &mut Vec<AnswerRecord>,
    ) -> Result<usize, DomainError> {
        self.resolve_address(qname, directory, answers, RequestedType::AAAA)
    }

    /// Emits the CNAME records of `qname` and of every name it leads to,
    /// then the addresses of each terminal name filtered by `requested`.
    ///
    /// CNAME records are always emitted, whatever `requested` is. Targets
    /// outside the zone end the chase. A chain deeper than
    /// [`MAX_CNAME_DEPTH`] rolls `answers` back to its length on entry and
    /// fails with [`DomainError::CnameChainTooLong`].
    pub fn resolve_cname(
        &self,
        qname: &str,
        directory: &Directory,
        answers: &mut Vec<AnswerRecord>,
        requested: RequestedType,
    ) -> Result<usize, DomainError> {
        let start = answers.len();
        let mut pending: Vec<(String, usize)> = vec![(qname.to_string(), 0)];

        while let Some((owner, depth)) = pending.pop() {
            let Some(set) = self.lookup(&owner, directory) else {
                continue;
            };

            if !set.has_cname() {
                self.push_addresses(&owner, set, requested, answers);
                continue;
            }

            if depth >= MAX_CNAME_DEPTH {
                answers.truncate(start);
                warn!(
                    qname = %qname,
                    at = %owner,
                    max_depth = MAX_CNAME_DEPTH,
                    "CNAME chain too long, dropping answers"
                );
                return Err(DomainError::CnameChainTooLong {
                    name: qname.to_string(),
                    max_depth: MAX_CNAME_DEPTH,
                });
            }

            for target in set.cname() {
                answers.push(AnswerRecord::new(
                    owner.as_str(),
                    self.ttl,
                    RecordData::CNAME(target.clone()),
                ));
            }
            // Reversed so targets are chased in stored order.
            for target in set.cname().iter().rev() {
                pending.push((target.clone(), depth + 1));
            }
        }

        Ok(answers.len() - start)
    }

    fn resolve_address(
        &self,
        qname: &str,
        directory: &Directory,
        answers: &mut Vec<AnswerRecord>,
        family: RequestedType,
    ) -> Result<usize, DomainError> {
        let Some(set) = self.lookup(qname, directory) else {
            return Ok(0);
        };

        if set.has_cname() {
            return self.resolve_cname(qname, directory, answers, family);
        }

        let start = answers.len();
        self.push_addresses(qname, set, family, answers);
        Ok(answers.len() - start)
    }

    fn lookup<'d>(&self, name: &str, directory: &'d Directory) -> Option<&'d RecordSet> {
        let short = self.zone.short_name(name)?;
        directory.get(&short)
    }

    fn push_addresses(
        &self,
        owner: &str,
        set: &RecordSet,
        requested: RequestedType,
        answers: &mut Vec<AnswerRecord>,
    ) {
        if requested.wants_a() {
            answers.extend(
                set.a()
                    .iter()
                    .map(|addr| AnswerRecord::new(owner, self.ttl, RecordData::A(*addr))),
            );
        }
        if requested.wants_aaaa() {
            answers.extend(
                set.aaaa()
                    .iter()
                    .map(|addr| AnswerRecord::new(owner, self.ttl, RecordData::AAAA(*addr))),
            );
        }
    }
}
