//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the Klondike rules, the board navigation graph and the
//! controllers that turn abstract actions into moves. It has **no dependencies**
//! on terminals, key codes or files, making it:
//!
//! - **Deterministic**: the same seed deals the same board
//! - **Testable**: every rule and cursor transition is a plain function call
//! - **Portable**: any renderer or input source can sit on top
//!
//! # Module Structure
//!
//! - [`card_stack`]: ordered pile with split/append/flip operations
//! - [`game`]: the 13-pile board, move legality and win detection
//! - [`layout`]: directed navigation graph over board positions
//! - [`selection`]: cursor and mark state read by renderers
//! - [`control`]: Select/Move state machine driving a [`Game`]
//! - [`menu`]: pause menu items and their cursor
//! - [`app`]: Game/Pause/Exit state machine above both controllers
//! - [`rng`]: deterministic shuffling
//!
//! # Example
//!
//! ```
//! use soliterminal_core::{Game, GameControl, Layout, Outcome};
//! use soliterminal_types::Action;
//!
//! let mut control = GameControl::new(Game::deal(12345), Layout::game());
//!
//! // The cursor starts on the draw pile; Use turns a card over.
//! control.action(Action::Use);
//! assert_eq!(control.game().stacks()[1].len(), 1);
//!
//! // Walk down into the first tableau pile.
//! control.action(Action::Down);
//! assert_eq!(control.stack_index(), 6);
//! assert_eq!(control.game().outcome(), Outcome::Playing);
//! ```

pub mod app;
pub mod card_stack;
pub mod control;
pub mod game;
pub mod layout;
pub mod menu;
pub mod rng;
pub mod selection;

pub use soliterminal_types as types;

// Re-export commonly used types for convenience
pub use app::{App, AppRequest, AppState};
pub use card_stack::CardStack;
pub use control::GameControl;
pub use game::{can_move_to_central_stack, can_move_to_end_stack, BoardError, Game, Outcome, Piles};
pub use layout::{Direction, Graph, Layout, Node};
pub use menu::{Menu, MenuControl, MenuItem};
pub use rng::{shuffled_deck, standard_deck, SimpleRng};
pub use selection::{Selection, SelectionState};
