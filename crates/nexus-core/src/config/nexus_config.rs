//! Top-level Nexus configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    CheckerConfig, NormalizerConfig, ObservabilityConfig, PipelineConfig, StorageConfig,
};
use crate::constants::MAX_SUBGRAPH_DEPTH;
use crate::errors::ConfigError;

/// Name of the project config file looked up by [`NexusConfig::load`].
pub const CONFIG_FILENAME: &str = "nexus.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`NEXUS_*`)
/// 2. Project config (`nexus.toml` in the project root)
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NexusConfig {
    pub normalizer: NormalizerConfig,
    pub checker: CheckerConfig,
    pub storage: StorageConfig,
    pub pipeline: PipelineConfig,
    pub observability: ObservabilityConfig,
}

impl NexusConfig {
    /// Load configuration from `root/nexus.toml` and the process environment.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        Self::load_with(root, |key| std::env::var(key).ok())
    }

    /// Same as [`load`](Self::load) with an injectable environment lookup.
    pub fn load_with(
        root: &Path,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let path = root.join(CONFIG_FILENAME);
        let mut config = if path.exists() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_env_overrides_from(env);
        config.validate()?;
        Ok(config)
    }

    /// Parse a config file. Missing sections and keys fall back to defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `NEXUS_*` overrides. Unparseable values are ignored.
    pub fn apply_env_overrides_from(&mut self, env: impl Fn(&str) -> Option<String>) {
        if let Some(v) = env("NEXUS_DB_PATH") {
            self.storage.db_path = v.into();
        }
        if let Some(v) = env("NEXUS_READ_POOL_SIZE").and_then(|v| v.parse().ok()) {
            self.storage.read_pool_size = v;
        }
        if let Some(v) = env("NEXUS_BUSY_TIMEOUT_MS").and_then(|v| v.parse().ok()) {
            self.storage.busy_timeout_ms = v;
        }
        if let Some(v) = env("NEXUS_STRICT_CHECK").and_then(|v| v.parse().ok()) {
            self.checker.strict = v;
        }
        if let Some(v) = env("NEXUS_CONFLICT_PENALTY").and_then(|v| v.parse().ok()) {
            self.normalizer.conflict_penalty = v;
        }
        if let Some(v) = env("NEXUS_DEFAULT_VERSION") {
            self.pipeline.default_version = v;
        }
        if let Some(v) = env("NEXUS_ROOT_DOMAIN") {
            self.pipeline.root_domain = v;
        }
        if let Some(v) = env("NEXUS_EXTERNAL_REPAIR").and_then(|v| v.parse().ok()) {
            self.pipeline.external_repair = v;
        }
        if let Some(v) = env("NEXUS_LOG_FILTER") {
            self.observability.log_filter = v;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let unit = |field: &str, value: f64| -> Result<(), ConfigError> {
            if (0.0..=1.0).contains(&value) {
                Ok(())
            } else {
                Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                })
            }
        };
        unit("normalizer.conflict_penalty", self.normalizer.conflict_penalty)?;
        unit("checker.base_score", self.checker.base_score)?;
        unit("checker.overlap_weight", self.checker.overlap_weight)?;
        unit("checker.fail_multiplier", self.checker.fail_multiplier)?;
        unit("checker.no_mention_score", self.checker.no_mention_score)?;

        let positive = |field: &str, value: usize| -> Result<(), ConfigError> {
            if value > 0 {
                Ok(())
            } else {
                Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be greater than 0".to_string(),
                })
            }
        };
        positive("checker.mention_token_limit", self.checker.mention_token_limit)?;
        positive("checker.significant_token_limit", self.checker.significant_token_limit)?;
        positive("storage.read_pool_size", self.storage.read_pool_size)?;

        for (field, depth) in [
            ("pipeline.default_query_depth", self.pipeline.default_query_depth),
            ("pipeline.expand_query_depth", self.pipeline.expand_query_depth),
        ] {
            if depth > MAX_SUBGRAPH_DEPTH {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: format!("must be at most {MAX_SUBGRAPH_DEPTH}"),
                });
            }
        }
        if self.pipeline.default_version.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "pipeline.default_version".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.pipeline.root_domain.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "pipeline.root_domain".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
