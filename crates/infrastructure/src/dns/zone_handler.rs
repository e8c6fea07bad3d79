use super::RecordMapper;
use hickory_proto::op::Query;
use hickory_proto::rr::{DNSClass, Record};
use std::sync::Arc;
use tailnet_dns_application::use_cases::{QueryOutcome, ResolveQueryUseCase};
use tailnet_dns_domain::Zone;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum HandlerOutcome {
    /// At least one record was found for the question.
    Answered(Vec<Record>),
    /// The name is in the zone but has no records of the asked type.
    NoData,
    /// The name is in the zone and does not exist.
    NxDomain,
    /// Not a question for this zone; the caller decides what to do.
    Fallthrough,
}

/// Answers questions for the configured zone from the peer directory.
pub struct ZoneQueryHandler {
    use_case: Arc<ResolveQueryUseCase>,
}

impl ZoneQueryHandler {
    pub fn new(use_case: Arc<ResolveQueryUseCase>) -> Self {
        Self { use_case }
    }

    pub fn zone(&self) -> &Zone {
        self.use_case.zone()
    }

    pub fn handle(&self, query: &Query) -> HandlerOutcome {
        if query.query_class() != DNSClass::IN {
            return HandlerOutcome::Fallthrough;
        }

        let qname = query.name().to_string();
        if !self.zone().contains(&qname) {
            return HandlerOutcome::Fallthrough;
        }

        let Some(query_type) = RecordMapper::query_type_from_hickory(query.query_type()) else {
            debug!(qname = %qname, record_type = ?query.query_type(), "Unsupported type for zone");
            return match self.use_case.execute_unsupported(&qname) {
                QueryOutcome::NxDomain => HandlerOutcome::NxDomain,
                _ => HandlerOutcome::NoData,
            };
        };

        let mut answers = Vec::new();
        match self.use_case.execute(&qname, query_type, &mut answers) {
            Ok(QueryOutcome::Answered(_)) => match RecordMapper::to_hickory_all(&answers) {
                Ok(records) => HandlerOutcome::Answered(records),
                Err(e) => {
                    warn!(error = %e, qname = %qname, "Failed to encode directory answers");
                    HandlerOutcome::NoData
                }
            },
            Ok(QueryOutcome::NoData) => HandlerOutcome::NoData,
            Ok(QueryOutcome::NxDomain) => HandlerOutcome::NxDomain,
            // Only a chase that starts at an existing name can fail.
            Err(e) => {
                debug!(error = %e, qname = %qname, "Directory lookup failed");
                HandlerOutcome::NoData
            }
        }
    }
}
