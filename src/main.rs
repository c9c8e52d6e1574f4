//! Terminal Klondike solitaire (default binary).
//!
//! Loads the last saved game (or deals a new one), then alternates between
//! drawing a frame and waiting for the next key press.

use anyhow::Result;
use tracing::{error, info};

use soliterminal::config::AppConfig;
use soliterminal::core::App;
use soliterminal::input::KeyboardInput;
use soliterminal::logging;
use soliterminal::runner::{initial_game, run};
use soliterminal::term::TerminalConsole;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    logging::init(&config)?;
    info!(save = %config.save.path.display(), "starting");

    let mut app = App::new(initial_game(&config));
    let mut input = KeyboardInput::new();
    let mut console = TerminalConsole::enter()?;

    let result = run(&mut app, &mut input, &mut console, &config);

    // Always try to restore terminal state.
    let _ = console.exit();
    if let Err(e) = &result {
        error!(error = %e, "exiting with error");
    }
    result
}
