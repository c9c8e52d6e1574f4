//! Action sources: where the main loop gets its next action from.

use std::collections::VecDeque;
use std::io;

use crossterm::event::{self, Event, KeyEventKind};

use crate::map::{action_for_key, is_hard_quit};
use crate::types::Action;

/// Produces one action per call.
///
/// `Ok(None)` means the source is finished and the program should stop.
/// `Action::None` means "nothing to do, but redraw" (e.g. a terminal resize).
pub trait ActionSource {
    fn next_action(&mut self) -> io::Result<Option<Action>>;
}

/// Blocking keyboard reader backed by crossterm.
///
/// Unbound keys, key releases and auto-repeat events are skipped.
#[derive(Debug, Default)]
pub struct KeyboardInput;

impl KeyboardInput {
    pub fn new() -> Self {
        Self
    }
}

impl ActionSource for KeyboardInput {
    fn next_action(&mut self) -> io::Result<Option<Action>> {
        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if is_hard_quit(key) {
                        return Ok(None);
                    }
                    if let Some(action) = action_for_key(key) {
                        return Ok(Some(action));
                    }
                }
                Event::Resize(_, _) => return Ok(Some(Action::None)),
                _ => {}
            }
        }
    }
}

/// Replays a fixed list of actions, then reports the end of input
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    actions: VecDeque<Action>,
}

impl ScriptedInput {
    pub fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.actions.len()
    }
}

impl ActionSource for ScriptedInput {
    fn next_action(&mut self) -> io::Result<Option<Action>> {
        Ok(self.actions.pop_front())
    }
}
