//! Terminal rendering for soliterminal.
//!
//! Views draw through the small [`Console`] trait. In tests the console is a
//! plain [`FrameBuffer`]; at runtime it is a [`TerminalConsole`] that diffs
//! each frame against the previous one and writes only the changed cells.

pub mod console;
pub mod fb;
pub mod game_view;
pub mod menu_view;
pub mod renderer;

pub use soliterminal_core as core;
pub use soliterminal_types as types;

pub use console::Console;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{card_text, GameView};
pub use menu_view::MenuView;
pub use renderer::{encode_diff_into, encode_full_into, TerminalConsole, TerminalRenderer};

use anyhow::Result;

use crate::core::{App, AppState};

/// Draw one full frame of the app: the board while playing, the menu while
/// paused. Nothing is drawn once the app has exited.
pub fn render_app(app: &App, console: &mut dyn Console) -> Result<()> {
    match app.state() {
        AppState::Game => {
            console.begin();
            GameView::default().render(app.game_control(), console);
            console.end()
        }
        AppState::Pause => {
            console.begin();
            MenuView::default().render(app.menu_control(), console);
            console.end()
        }
        AppState::Exit => Ok(()),
    }
}
