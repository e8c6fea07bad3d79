use crate::ports::DirectoryStore;
use crate::services::QueryResolver;
use std::sync::Arc;
use tailnet_dns_domain::{
    AnswerRecord, Directory, DomainError, QueryType, RequestedType, Zone,
};
use tracing::debug;

/// What the directory had to say about one in-zone question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryOutcome {
    /// This many records were appended.
    Answered(usize),
    /// The name exists, or is the zone apex, but holds nothing of the asked type.
    NoData,
    /// No such name in the zone.
    NxDomain,
}

/// Answers one question against the directory published at call time.
///
/// Every call loads the directory exactly once, so the answers and the
/// name-existence verdict of a query always come from the same generation.
pub struct ResolveQueryUseCase {
    store: Arc<dyn DirectoryStore>,
    resolver: QueryResolver,
}

impl ResolveQueryUseCase {
    pub fn new(store: Arc<dyn DirectoryStore>, zone: Zone, ttl: u32) -> Self {
        Self {
            store,
            resolver: QueryResolver::new(zone, ttl),
        }
    }

    pub fn zone(&self) -> &Zone {
        self.resolver.zone()
    }

    /// Appends answers for `qname`/`query_type` and reports the outcome.
    ///
    /// A CNAME chain that runs past the depth limit is returned as
    /// [`DomainError::CnameChainTooLong`] with nothing appended.
    pub fn execute(
        &self,
        qname: &str,
        query_type: QueryType,
        answers: &mut Vec<AnswerRecord>,
    ) -> Result<QueryOutcome, DomainError> {
        let directory = self.store.current();

        let appended = match query_type {
            QueryType::A => self.resolver.resolve_a(qname, &directory, answers)?,
            QueryType::AAAA => self.resolver.resolve_aaaa(qname, &directory, answers)?,
            QueryType::CNAME | QueryType::ANY => {
                self.resolver
                    .resolve_cname(qname, &directory, answers, RequestedType::Any)?
            }
        };

        debug!(
            qname = %qname,
            query_type = %query_type,
            generation = directory.generation(),
            answers = appended,
            "Query resolved from directory"
        );

        if appended > 0 {
            return Ok(QueryOutcome::Answered(appended));
        }
        Ok(self.existence(qname, &directory))
    }

    /// Outcome for a question whose type the directory never holds.
    pub fn execute_unsupported(&self, qname: &str) -> QueryOutcome {
        let directory = self.store.current();
        self.existence(qname, &directory)
    }

    fn existence(&self, qname: &str, directory: &Directory) -> QueryOutcome {
        match self.zone().short_name(qname) {
            Some(short) if directory.contains(&short) => QueryOutcome::NoData,
            Some(_) => QueryOutcome::NxDomain,
            None if self.zone().contains(qname) => QueryOutcome::NoData,
            None => QueryOutcome::NxDomain,
        }
    }
}
