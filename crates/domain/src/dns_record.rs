mod answer;
mod record_type;

pub use answer::{AnswerRecord, RecordData};
pub use record_type::{QueryType, RecordType, RequestedType};
