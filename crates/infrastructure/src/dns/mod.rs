mod record_mapper;
mod server;
mod zone_handler;

pub use record_mapper::RecordMapper;
pub use server::DnsServerHandler;
pub use zone_handler::{HandlerOutcome, ZoneQueryHandler};
