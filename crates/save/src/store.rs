//! Reading and writing save files.
//!
//! Saves are written to `<path>.tmp` first and renamed over the target, so a
//! crash mid-write leaves the previous save intact.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use thiserror::Error;
use tracing::{info, warn};

use crate::core::{BoardError, Game};
use crate::format::SavedGame;

/// Errors that can occur while saving or loading.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid card: number {number}, state {state}, suit {suit}")]
    InvalidCard { number: u8, state: u8, suit: u8 },

    #[error("invalid board: {0}")]
    InvalidBoard(#[from] BoardError),
}

/// Result type for save operations.
pub type Result<T> = std::result::Result<T, SaveError>;

/// Write `game` to `path`, creating parent directories as needed.
pub fn save_game(game: &Game, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp_path = path.with_extension("tmp");
    let bytes = serde_json::to_vec(&SavedGame::from(game))?;
    {
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&tmp_path)?;
        file.write_all(&bytes)?;
        file.sync_all()?;
    }
    fs::rename(&tmp_path, path)?;

    info!(path = %path.display(), "game saved");
    Ok(())
}

/// Read and validate a saved game.
pub fn read_game(path: &Path) -> Result<Game> {
    let bytes = fs::read(path)?;
    let saved: SavedGame = serde_json::from_slice(&bytes)?;
    Game::try_from(saved)
}

/// Load a saved game, or `None` if there is nothing usable at `path`.
///
/// A missing file is the normal first-run case and is not logged; every other
/// failure is logged at `warn`.
pub fn load_game(path: &Path) -> Option<Game> {
    match read_game(path) {
        Ok(game) => {
            info!(path = %path.display(), "saved game loaded");
            Some(game)
        }
        Err(SaveError::Io(e)) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring unusable save file");
            None
        }
    }
}
