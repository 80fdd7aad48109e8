//! Engine tuning loaded from TOML.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_SAVE_FILE: &str = "savegame.sav";

pub const MAX_STEP_COST: u32 = 1000;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub fov_radius: i32,
    /// Extra path cost for a walkable tile occupied by a blocking entity.
    /// Lower values make monsters queue in corridors, higher values make them flank.
    pub congestion_penalty: u16,
    pub cardinal_cost: u32,
    pub diagonal_cost: u32,
    /// Fixed run seed; a fresh one is derived from the clock when unset.
    pub seed: Option<u64>,
    pub save_file: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fov_radius: 8,
            congestion_penalty: 10,
            cardinal_cost: 2,
            diagonal_cost: 3,
            seed: None,
            save_file: DEFAULT_SAVE_FILE.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file")]
    Io(#[from] io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

impl EngineConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads `path`, falling back to defaults when the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(text) => Self::from_toml_str(&text),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err.into()),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.fov_radius < 1 {
            return Err(ConfigError::Invalid("fov_radius must be at least 1".into()));
        }
        let step_range = 1..=MAX_STEP_COST;
        if !step_range.contains(&self.cardinal_cost) || !step_range.contains(&self.diagonal_cost) {
            return Err(ConfigError::Invalid(format!(
                "step costs must be between 1 and {MAX_STEP_COST}"
            )));
        }
        if self.diagonal_cost <= self.cardinal_cost {
            return Err(ConfigError::Invalid(
                "diagonal_cost must be greater than cardinal_cost".into(),
            ));
        }
        if self.save_file.trim().is_empty() {
            return Err(ConfigError::Invalid("save_file must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_keys_use_defaults() {
        let config = EngineConfig::from_toml_str("congestion_penalty = 4\n").expect("parse");
        assert_eq!(config.congestion_penalty, 4);
        assert_eq!(config.fov_radius, 8);
        assert_eq!(config.cardinal_cost, 2);
        assert_eq!(config.diagonal_cost, 3);
        assert_eq!(config.save_file, DEFAULT_SAVE_FILE);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(matches!(
            EngineConfig::from_toml_str("fov = 3\n"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn zero_step_cost_is_invalid() {
        assert!(matches!(
            EngineConfig::from_toml_str("cardinal_cost = 0\n"),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn oversized_step_costs_are_invalid() {
        let oversized = [
            "diagonal_cost = 1001\n",
            "cardinal_cost = 400000000\ndiagonal_cost = 600000000\n",
        ];
        for text in oversized {
            assert!(
                matches!(EngineConfig::from_toml_str(text), Err(ConfigError::Invalid(_))),
                "{text}"
            );
        }
        let config = EngineConfig::from_toml_str("cardinal_cost = 999\ndiagonal_cost = 1000\n")
            .expect("largest costs are fine");
        assert_eq!(config.diagonal_cost, MAX_STEP_COST);
    }

    #[test]
    fn diagonal_must_cost_more_than_cardinal() {
        for text in ["diagonal_cost = 2\n", "cardinal_cost = 5\n"] {
            let err = EngineConfig::from_toml_str(text).expect_err(text);
            assert!(err.to_string().contains("diagonal_cost"), "{err}");
        }
    }

    #[test]
    fn absent_file_falls_back_to_defaults() {
        let dir = tempdir().expect("tempdir");
        let config =
            EngineConfig::load_or_default(&dir.path().join("crawl.toml")).expect("defaults");
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn file_values_are_loaded() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("crawl.toml");
        fs::write(&path, "seed = 99\nfov_radius = 5\n").expect("write");
        let config = EngineConfig::load_or_default(&path).expect("load");
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.fov_radius, 5);
    }
}
