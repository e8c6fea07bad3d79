mod directory_builder;
mod query_resolver;

pub use directory_builder::{DirectoryBuilder, MachineTag};
pub use query_resolver::{QueryResolver, MAX_CNAME_DEPTH};
