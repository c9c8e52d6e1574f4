//! The application cycle: draw, wait for an action, apply it.

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::core::{App, AppRequest, Game};
use crate::input::ActionSource;
use crate::save::{load_game, save_game};
use crate::term::{render_app, Console};

/// The saved game if there is a usable one, otherwise a fresh deal.
pub fn initial_game(config: &AppConfig) -> Game {
    if !config.no_load {
        if let Some(game) = load_game(&config.save.path) {
            return game;
        }
    }
    Game::deal(config.deal_seed())
}

/// Run until the app exits or the input source ends.
pub fn run(
    app: &mut App,
    input: &mut dyn ActionSource,
    console: &mut dyn Console,
    config: &AppConfig,
) -> Result<()> {
    while app.is_running() {
        render_app(app, console)?;

        let Some(action) = input.next_action().context("reading input")? else {
            info!("input closed, leaving without saving");
            break;
        };
        debug!(action = action.as_str(), state = ?app.state(), "action");

        if let Some(request) = app.action(action) {
            handle_request(app, request, config)?;
        }
    }
    Ok(())
}

fn handle_request(app: &mut App, request: AppRequest, config: &AppConfig) -> Result<()> {
    match request {
        AppRequest::NewGame => {
            app.new_game(Game::deal(config.deal_seed()));
            Ok(())
        }
        AppRequest::SaveAndExit => {
            app.exit();
            save_game(app.game(), &config.save.path)
                .with_context(|| format!("saving to {}", config.save.path.display()))
        }
    }
}
