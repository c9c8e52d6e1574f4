//! Key mapping from terminal events to actions.

use crate::types::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press to an action. Unbound keys map to `None`.
pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    if is_hard_quit(key) {
        return None;
    }

    match key.code {
        // Movement
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(Action::Up)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Action::Down)
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Action::Left)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Action::Right)
        }

        // Actions
        KeyCode::Char(' ') | KeyCode::Enter => Some(Action::Use),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Reset),
        KeyCode::Esc | KeyCode::Char('p') | KeyCode::Char('P') => Some(Action::Exit),

        _ => None,
    }
}

/// Ctrl-C leaves the program without going through the pause menu.
pub fn is_hard_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
