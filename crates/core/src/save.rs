//! Single-slot save file.
//!
//! The file holds two lines of JSON:
//! - Line 1: header with `format_version`, `seed` and the SHA-256 of line 2.
//! - Line 2: the serialized `GameState`.
//!
//! Writes go to a sibling temp file that is renamed over the slot, so a crash
//! mid-save leaves the previous save intact.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::config::EngineConfig;
use crate::game::Game;
use crate::state::GameState;

const FORMAT_VERSION: u16 = 1;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
struct SaveHeader {
    format_version: u16,
    seed: u64,
    sha256_hex: String,
}

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("no saved game at {}", .0.display())]
    Missing(PathBuf),

    #[error("save file i/o failed")]
    Io(#[from] io::Error),

    #[error("save file is malformed: {0}")]
    Format(#[from] serde_json::Error),

    #[error("save file is truncated")]
    Truncated,

    #[error("unsupported save format version {0}")]
    UnsupportedVersion(u16),

    #[error("save file checksum mismatch")]
    Checksum,
}

fn sha256_hex(body: &str) -> String {
    let digest = Sha256::digest(body.as_bytes());
    format!("{digest:x}")
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaveSlot {
    path: PathBuf,
}

impl SaveSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    pub fn save(&self, game: &Game) -> Result<(), SaveError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let body = serde_json::to_string(game.state())?;
        let header = SaveHeader {
            format_version: FORMAT_VERSION,
            seed: game.seed(),
            sha256_hex: sha256_hex(&body),
        };
        let header = serde_json::to_string(&header)?;

        let tmp_path = self.path.with_extension("sav.tmp");
        fs::write(&tmp_path, format!("{header}\n{body}\n"))?;
        fs::rename(&tmp_path, &self.path)?;
        tracing::info!(path = %self.path.display(), turn = game.state().turn, "game saved");
        Ok(())
    }

    pub fn load(&self, config: EngineConfig) -> Result<Game, SaveError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(SaveError::Missing(self.path.clone()));
            }
            Err(err) => return Err(err.into()),
        };
        let mut lines = content.lines();
        let (Some(header), Some(body)) = (lines.next(), lines.next()) else {
            return Err(SaveError::Truncated);
        };
        let header: SaveHeader = serde_json::from_str(header)?;
        if header.format_version != FORMAT_VERSION {
            return Err(SaveError::UnsupportedVersion(header.format_version));
        }
        if sha256_hex(body) != header.sha256_hex {
            return Err(SaveError::Checksum);
        }
        let state: GameState = serde_json::from_str(body)?;
        tracing::info!(path = %self.path.display(), turn = state.turn, "game loaded");
        Ok(Game::from_state(header.seed, config, state))
    }

    /// Removes the save; a missing file is not an error.
    pub fn delete(&self) -> Result<(), SaveError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
