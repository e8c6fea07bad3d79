pub mod directory;
pub mod errors;
pub mod logging;
pub mod root;
pub mod server;

pub use directory::{DirectoryConfig, PollInterval, StatusSourceConfig};
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
