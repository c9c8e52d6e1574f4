//! Save files for soliterminal.
//!
//! A saved game is the thirteen piles in their fixed order, written as JSON:
//!
//! ```json
//! {"stacks":[{"cards":[{"number":1,"state":0,"suit":2}]}]}
//! ```
//!
//! Suits and face states are stored as numbers (see [`format`]). Loading
//! validates the board and yields `None` for anything unusable; a broken save
//! file never stops the game from starting.

pub mod config;
pub mod format;
pub mod store;

pub use soliterminal_core as core;
pub use soliterminal_types as types;

pub use config::{SaveConfig, SAVE_FILE_NAME};
pub use format::{SavedCard, SavedGame, SavedStack};
pub use store::{load_game, read_game, save_game, Result, SaveError};
