//! Terminal input module.
//!
//! Maps `crossterm` key events onto the closed [`crate::types::Action`]
//! vocabulary. Nothing downstream sees key codes, so the rules engine and the
//! menus work the same with any [`ActionSource`].

pub mod map;
pub mod source;

pub use soliterminal_types as types;

pub use map::{action_for_key, is_hard_quit};
pub use source::{ActionSource, KeyboardInput, ScriptedInput};
