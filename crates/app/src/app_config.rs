//! Where the desktop app keeps its config file and save slot.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use dungeon::config::{ConfigError, EngineConfig};

use crate::APP_NAME;

pub const CONFIG_FILE: &str = "crawl.toml";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppPaths {
    pub config_file: PathBuf,
    pub data_dir: PathBuf,
}

impl AppPaths {
    /// Platform config and data directories, or the working directory when the
    /// platform reports no home.
    pub fn discover() -> Self {
        match ProjectDirs::from("", "", APP_NAME) {
            Some(dirs) => Self {
                config_file: dirs.config_dir().join(CONFIG_FILE),
                data_dir: dirs.data_dir().to_path_buf(),
            },
            None => Self { config_file: PathBuf::from(CONFIG_FILE), data_dir: PathBuf::from(".") },
        }
    }

    pub fn load_config(&self) -> Result<EngineConfig, ConfigError> {
        EngineConfig::load_or_default(&self.config_file)
    }

    /// Relative save names live in the data directory.
    pub fn save_path(&self, config: &EngineConfig) -> PathBuf {
        let file = Path::new(&config.save_file);
        if file.is_absolute() { file.to_path_buf() } else { self.data_dir.join(file) }
    }
}
