//! Top-level configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{OutputConfig, SimulationSection};
use crate::constants;
use crate::errors::{ConfigError, SdtResult};
use crate::models::SimulationConfig;

/// Top-level configuration aggregating all sections.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`SDT_*`)
/// 3. Config file (`--config` path, or `sdt.toml` in the working root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SdtConfig {
    pub simulation: SimulationSection,
    pub output: OutputConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub population_size: Option<i64>,
    pub seed: Option<u64>,
    pub pretty: Option<bool>,
}

impl SdtConfig {
    /// Load configuration with layered resolution.
    ///
    /// An explicit `config_path` must exist; the implicit `sdt.toml` under
    /// `root` is optional.
    pub fn load(
        root: &Path,
        config_path: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        match config_path {
            Some(path) => Self::merge_toml_file(&mut config, path)?,
            None => {
                let project_path = root.join(constants::CONFIG_FILE_NAME);
                if project_path.exists() {
                    Self::merge_toml_file(&mut config, &project_path)?;
                }
            }
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        tracing::debug!(?config, "configuration resolved");
        Ok(config)
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

    /// Resolve into a runnable simulation config and validate it.
    pub fn simulation_config(&self) -> SdtResult<SimulationConfig> {
        let config = self.simulation.to_simulation_config()?;
        config.validate()?;
        Ok(config)
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut SdtConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: SdtConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; only `Some` values override.
    fn merge(base: &mut SdtConfig, other: &SdtConfig) {
        base.simulation.merge(&other.simulation);

        if other.output.pretty.is_some() {
            base.output.pretty = other.output.pretty;
        }
        if other.output.include_counts.is_some() {
            base.output.include_counts = other.output.include_counts;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `SDT_POPULATION_SIZE`, `SDT_SEED`.
    fn apply_env_overrides(config: &mut SdtConfig) {
        if let Ok(val) = std::env::var("SDT_POPULATION_SIZE") {
            match val.parse::<i64>() {
                Ok(v) => config.simulation.population_size = Some(v),
                Err(_) => tracing::warn!(value = %val, "ignoring unparsable SDT_POPULATION_SIZE"),
            }
        }
        if let Ok(val) = std::env::var("SDT_SEED") {
            match val.parse::<u64>() {
                Ok(v) => config.simulation.seed = Some(v),
                Err(_) => tracing::warn!(value = %val, "ignoring unparsable SDT_SEED"),
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut SdtConfig, cli: &CliOverrides) {
        if let Some(v) = cli.population_size {
            config.simulation.population_size = Some(v);
        }
        if let Some(v) = cli.seed {
            config.simulation.seed = Some(v);
        }
        if let Some(v) = cli.pretty {
            config.output.pretty = Some(v);
        }
    }
}
