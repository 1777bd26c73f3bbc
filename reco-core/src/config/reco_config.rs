//! Top-level recommender configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    CollaborativeConfig, ContentConfig, DispatchConfig, FactorizationConfig,
    ObservabilityConfig, PopularityConfig,
};
use crate::constants::{CONFIG_FILENAME, ENV_PREFIX};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`RECO_*`)
/// 2. Project config (`reco.toml`)
/// 3. Compiled defaults
///
/// Components copy the section they need at construction and never mutate it.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RecoConfig {
    pub popularity: PopularityConfig,
    pub collaborative: CollaborativeConfig,
    pub content: ContentConfig,
    pub factorization: FactorizationConfig,
    pub dispatch: DispatchConfig,
    pub observability: ObservabilityConfig,
}

impl RecoConfig {
    /// Load configuration from a TOML file, then apply env overrides and validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let mut config: RecoConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load `reco.toml` from `root` if present, otherwise start from defaults.
    pub fn load_from_dir(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(CONFIG_FILENAME);
        if path.exists() {
            return Self::load(&path);
        }
        let mut config = Self::default();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `RECO_*` overrides from the process environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply `RECO_*` overrides from an arbitrary key lookup.
    /// Values that fail to parse are ignored.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{ENV_PREFIX}{name}"));

        if let Some(v) = var("DEFAULT_TOP_N").and_then(|v| v.parse::<usize>().ok()) {
            self.popularity.default_top_n = v;
            self.collaborative.default_top_n = v;
            self.content.default_top_n = v;
            self.dispatch.default_top_n = v;
        }
        if let Some(v) = var("SPARSE_THRESHOLD").and_then(|v| v.parse::<u64>().ok()) {
            self.dispatch.sparse_history_threshold = v;
        }
        if let Some(v) = var("SIMILAR_PER_ARTICLE").and_then(|v| v.parse::<usize>().ok()) {
            self.content.similar_per_article = v;
        }
        if let Some(v) = var("TRAIN_ROWS").and_then(|v| v.parse::<usize>().ok()) {
            self.factorization.train_rows = v;
        }
        if let Some(v) = var("TEST_ROWS").and_then(|v| v.parse::<usize>().ok()) {
            self.factorization.test_rows = v;
        }
        if let Some(v) = var("LOG_LEVEL") {
            self.observability.log_level = v;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("popularity.default_top_n", self.popularity.default_top_n),
            ("collaborative.default_top_n", self.collaborative.default_top_n),
            ("content.default_top_n", self.content.default_top_n),
            ("content.similar_per_article", self.content.similar_per_article),
            ("dispatch.default_top_n", self.dispatch.default_top_n),
            (
                "factorization.latent_factor_step",
                self.factorization.latent_factor_step,
            ),
        ];
        for (field, value) in positive {
            if value == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if self.dispatch.sparse_history_threshold == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "dispatch.sparse_history_threshold".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.factorization.latent_factor_start == 0
            || self.factorization.latent_factor_start >= self.factorization.latent_factor_stop
        {
            return Err(ConfigError::ValidationFailed {
                field: "factorization.latent_factor_start".to_string(),
                message: "must be positive and below latent_factor_stop".to_string(),
            });
        }
        match self.observability.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => {
                return Err(ConfigError::ValidationFailed {
                    field: "observability.log_level".to_string(),
                    message: format!("unknown level '{other}'"),
                });
            }
        }
        Ok(())
    }
}
