use serde::{Deserialize, Serialize};

use super::compute::ComputeConfig;
use super::database::DatabaseConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::notifier::NotifierConfig;
use super::probe::ProbeConfig;
use super::provider::ProviderConfig;
use super::reconciler::ReconcilerConfig;

const LOCAL_CONFIG_PATH: &str = "dns-failover.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/dns-failover/config.toml";

/// Main configuration structure for the failover reconciler
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Pass scheduling
    #[serde(default)]
    pub reconciler: ReconcilerConfig,

    /// DNS-over-TLS health probing
    #[serde(default)]
    pub probe: ProbeConfig,

    /// Authoritative DNS provider credentials and endpoint
    #[serde(default)]
    pub provider: ProviderConfig,

    #[serde(default)]
    pub notifier: NotifierConfig,

    /// Standby instance lifecycle commands
    #[serde(default)]
    pub compute: ComputeConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dns-failover.toml in current directory
    /// 3. /etc/dns-failover/config.toml
    /// 4. Default configuration
    ///
    /// Credentials from the environment override the file, and command-line
    /// overrides are applied last.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
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

    /// Apply secrets supplied through the environment
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        self.provider.apply_env(&lookup);
        self.notifier.apply_env(&lookup);
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(db) = overrides.database_path {
            self.database.path = db;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(interval) = overrides.interval_secs {
            self.reconciler.interval_secs = interval;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.reconciler.interval_secs == 0 {
            return Err(ConfigError::Validation(
                "Reconciliation interval cannot be 0".to_string(),
            ));
        }

        if self.probe.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Probe timeout cannot be 0".to_string(),
            ));
        }

        if self.probe.reference_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Probe reference name cannot be empty".to_string(),
            ));
        }

        let provider = &self.provider;
        for (field, value) in [
            ("zone_id", &provider.zone_id),
            ("account_email", &provider.account_email),
            ("api_key", &provider.api_key),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "DNS provider '{}' is not configured",
                    field
                )));
            }
        }

        if self.compute.start_command.is_empty() || self.compute.stop_command.is_empty() {
            return Err(ConfigError::Validation(
                "Compute start and stop commands must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Some(LOCAL_CONFIG_PATH.to_string())
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Some(SYSTEM_CONFIG_PATH.to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub database_path: Option<String>,
    pub log_level: Option<String>,
    pub interval_secs: Option<u64>,
}
