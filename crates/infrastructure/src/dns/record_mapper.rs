//! Mapping between domain answer records and hickory wire records.

use hickory_proto::rr::rdata::{A, AAAA, CNAME};
use hickory_proto::rr::{Name, RData, Record, RecordType as HickoryRecordType};
use tailnet_dns_domain::{AnswerRecord, DomainError, QueryType, RecordData};

pub struct RecordMapper;

impl RecordMapper {
    pub fn to_hickory(record: &AnswerRecord) -> Result<Record, DomainError> {
        let name = Self::parse_name(&record.name)?;

        let rdata = match &record.data {
            RecordData::A(addr) => RData::A(A(*addr)),
            RecordData::AAAA(addr) => RData::AAAA(AAAA(*addr)),
            RecordData::CNAME(target) => RData::CNAME(CNAME(Self::parse_name(target)?)),
        };

        Ok(Record::from_rdata(name, record.ttl, rdata))
    }

    pub fn to_hickory_all(records: &[AnswerRecord]) -> Result<Vec<Record>, DomainError> {
        records.iter().map(Self::to_hickory).collect()
    }

    /// `None` for question types the directory never answers.
    pub fn query_type_from_hickory(record_type: HickoryRecordType) -> Option<QueryType> {
        match record_type {
            HickoryRecordType::A => Some(QueryType::A),
            HickoryRecordType::AAAA => Some(QueryType::AAAA),
            HickoryRecordType::CNAME => Some(QueryType::CNAME),
            HickoryRecordType::ANY => Some(QueryType::ANY),
            _ => None,
        }
    }

    fn parse_name(name: &str) -> Result<Name, DomainError> {
        Name::from_ascii(name)
            .map_err(|e| DomainError::InvalidDomainName(format!("{}: {}", name, e)))
    }
}
