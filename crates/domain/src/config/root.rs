use serde::{Deserialize, Serialize};
use std::path::Path;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::orchestrator::OrchestratorConfig;
use super::resolver::ResolverConfig;

/// Root configuration, loaded from an optional TOML file
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub resolver: ResolverConfig,

    #[serde(default)]
    pub orchestrator: OrchestratorConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values given on the command line; each one wins over the file
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub binary: Option<String>,
    pub timeout_secs: Option<u64>,
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration from `path` (or defaults when `None`) and apply overrides.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };
        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path_str = path.as_ref().display().to_string();
        let content = std::fs::read_to_string(path.as_ref()).map_err(|source| ConfigError::Read {
            path: path_str.clone(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path_str,
            source,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(binary) = overrides.binary {
            self.resolver.binary = binary;
        }
        if let Some(timeout) = overrides.timeout_secs {
            self.resolver.timeout_secs = timeout;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let resolver = &self.resolver;
        if resolver.binary.trim().is_empty() {
            return Err(ConfigError::Validation(
                "resolver.binary cannot be empty".into(),
            ));
        }
        if resolver.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "resolver.timeout_secs must be greater than zero".into(),
            ));
        }
        if resolver.process_guard_secs < resolver.timeout_secs {
            return Err(ConfigError::Validation(format!(
                "resolver.process_guard_secs ({}) must be at least resolver.timeout_secs ({})",
                resolver.process_guard_secs, resolver.timeout_secs
            )));
        }

        self.orchestrator.validate()
    }
}
