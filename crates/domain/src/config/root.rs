use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

use super::dns::DnsConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::store::{StoreBackend, StoreConfig};

const LOCAL_CONFIG_PATH: &str = "mockapetris.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/mockapetris/config.toml";

/// Main configuration structure for Mockapetris
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listener and control-plane bind settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Answer and listener tuning
    #[serde(default)]
    pub dns: DnsConfig,

    /// Record store backend selection and connection settings
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. mockapetris.toml in current directory
    /// 3. /etc/mockapetris/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
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

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(port) = overrides.web_port {
            self.server.web_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(backend) = overrides.store_backend {
            self.store.backend = backend;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if self.server.web_port == 0 {
            return Err(ConfigError::Validation("Web port cannot be 0".to_string()));
        }

        if self.dns.workers == 0 {
            return Err(ConfigError::Validation(
                "dns.workers must be at least 1".to_string(),
            ));
        }

        if self.dns.queue_capacity == 0 {
            return Err(ConfigError::Validation(
                "dns.queue_capacity must be at least 1".to_string(),
            ));
        }

        match self.store.backend {
            StoreBackend::Memory => {
                for (name, ip) in &self.store.seed {
                    if ip.parse::<Ipv4Addr>().is_err() {
                        return Err(ConfigError::Validation(format!(
                            "Seed record '{}' has invalid IPv4 address '{}'",
                            name, ip
                        )));
                    }
                }
            }
            StoreBackend::Sqlite if self.store.path.is_empty() => {
                return Err(ConfigError::Validation(
                    "store.path is required for the sqlite backend".to_string(),
                ));
            }
            StoreBackend::Redis if self.store.address.is_empty() => {
                return Err(ConfigError::Validation(
                    "store.address is required for the redis backend".to_string(),
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
    pub web_port: Option<u16>,
    pub bind_address: Option<String>,
    pub store_backend: Option<StoreBackend>,
    pub log_level: Option<String>,
}
