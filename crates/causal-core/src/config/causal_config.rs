//! Top-level configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ConvertConfig, MeekRule, ObservabilityConfig};
use crate::constants;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`CAUSAL_*`)
/// 2. Config file passed to [`CausalConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CausalConfig {
    pub convert: ConvertConfig,
    pub observability: ObservabilityConfig,
}

impl CausalConfig {
    /// Load configuration from an optional TOML file, then apply
    /// environment overrides and validate.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Self::apply_env_overrides(&mut config)?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &CausalConfig) -> Result<(), ConfigError> {
        if let Some(rules) = &config.convert.rules {
            if rules.is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "convert.rules".to_string(),
                    message: "must name at least one rule".to_string(),
                });
            }
        }
        let level = config.observability.effective_log_level();
        if !constants::LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_level".to_string(),
                message: format!("must be one of {}", constants::LOG_LEVELS.join(", ")),
            });
        }
        Ok(())
    }

    /// Apply environment variable overrides.
    /// Pattern: `CAUSAL_CONVERT_RULES=r1,r2,r3`, `CAUSAL_LOG_LEVEL=debug`, etc.
    fn apply_env_overrides(config: &mut CausalConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("CAUSAL_CONVERT_RULES") {
            let rules = val
                .split(',')
                .filter(|s| !s.trim().is_empty())
                .map(|s| s.parse::<MeekRule>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|message| ConfigError::ValidationFailed {
                    field: "CAUSAL_CONVERT_RULES".to_string(),
                    message,
                })?;
            config.convert.rules = Some(rules);
        }
        if let Ok(val) = std::env::var("CAUSAL_CONVERT_VERIFY_EXTENDABLE") {
            if let Ok(v) = val.parse::<bool>() {
                config.convert.verify_extendable = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CAUSAL_LOG_LEVEL") {
            config.observability.log_level = Some(val);
        }
        if let Ok(val) = std::env::var("CAUSAL_LOG_JSON") {
            if let Ok(v) = val.parse::<bool>() {
                config.observability.json = Some(v);
            }
        }
        Ok(())
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
