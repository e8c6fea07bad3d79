//! Tailnet DNS Domain Layer
pub mod config;
pub mod directory;
pub mod dns_record;
pub mod errors;
pub mod peer_status;
pub mod zone;

pub use config::{CliOverrides, Config, ConfigError};
pub use directory::{Directory, RecordSet};
pub use dns_record::{AnswerRecord, QueryType, RecordData, RecordType, RequestedType};
pub use errors::DomainError;
pub use peer_status::{PeerStatus, PeerStatusSnapshot};
pub use zone::Zone;
