use serde::{Deserialize, Serialize};

use super::directory::{DirectoryConfig, StatusSourceConfig};
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;

/// Main configuration structure for Tailnet DNS
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listener configuration (port, bind address)
    #[serde(default)]
    pub server: ServerConfig,

    /// Peer directory configuration (zone, polling)
    #[serde(default)]
    pub directory: DirectoryConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. tailnet-dns.toml in current directory
    /// 3. /etc/tailnet-dns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("tailnet-dns.toml").exists() {
            Self::from_file("tailnet-dns.toml")?
        } else if std::path::Path::new("/etc/tailnet-dns/config.toml").exists() {
            Self::from_file("/etc/tailnet-dns/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(zone) = overrides.zone {
            self.directory.zone = zone;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        let zones: Vec<&str> = self.directory.zone.split_whitespace().collect();
        match zones.len() {
            0 => {
                return Err(ConfigError::Validation(
                    "A zone must be configured".to_string(),
                ))
            }
            1 => {
                crate::Zone::new(zones[0]).map_err(|e| ConfigError::Validation(e.to_string()))?;
            }
            n => {
                return Err(ConfigError::Validation(format!(
                    "Exactly one zone is supported, got {}",
                    n
                )))
            }
        }

        if self.directory.fetch_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "fetch_timeout_secs must be greater than 0".to_string(),
            ));
        }

        match &self.directory.status_source {
            StatusSourceConfig::TailscaleCli { command } if command.is_empty() => {
                return Err(ConfigError::Validation(
                    "Status command cannot be empty".to_string(),
                ));
            }
            StatusSourceConfig::JsonFile { path } if path.trim().is_empty() => {
                return Err(ConfigError::Validation(
                    "Status file path cannot be empty".to_string(),
                ));
            }
            _ => {}
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub bind_address: Option<String>,
    pub zone: Option<String>,
    pub log_level: Option<String>,
}
