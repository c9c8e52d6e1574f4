//! App module - top-level state machine above the game controller
//!
//! The app is either playing, paused on the menu, or finished. Exit toggles
//! between playing and the pause menu. Work that needs the outside world
//! (a fresh random seed, writing the save file) is handed back to the caller
//! as an [`AppRequest`], so this module stays free of I/O.

use tracing::info;

use crate::control::GameControl;
use crate::game::Game;
use crate::layout::Layout;
use crate::menu::{Menu, MenuControl, MenuItem};
use crate::types::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppState {
    #[default]
    Game,
    Pause,
    Exit,
}

/// Side effects the caller has to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppRequest {
    /// Deal a new game and pass it to [`App::new_game`]
    NewGame,
    /// Persist the current game, then call [`App::exit`]
    SaveAndExit,
}

#[derive(Debug, Clone)]
pub struct App {
    state: AppState,
    game_control: GameControl,
    menu_control: MenuControl,
}

impl App {
    pub fn new(game: Game) -> Self {
        Self {
            state: AppState::Game,
            game_control: GameControl::new(game, Layout::game()),
            menu_control: MenuControl::new(Menu::pause()),
        }
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state != AppState::Exit
    }

    pub fn game_control(&self) -> &GameControl {
        &self.game_control
    }

    pub fn game(&self) -> &Game {
        self.game_control.game()
    }

    pub fn menu_control(&self) -> &MenuControl {
        &self.menu_control
    }

    /// Route one action to the active screen
    pub fn action(&mut self, action: Action) -> Option<AppRequest> {
        match (self.state, action) {
            (AppState::Exit, _) => None,
            (AppState::Game, Action::Exit) => {
                self.menu_control.reset();
                self.state = AppState::Pause;
                None
            }
            (AppState::Pause, Action::Exit) => {
                self.state = AppState::Game;
                None
            }
            (AppState::Game, Action::Reset) => Some(AppRequest::NewGame),
            (AppState::Game, _) => {
                self.game_control.action(action);
                None
            }
            (AppState::Pause, _) => match self.menu_control.action(action)? {
                MenuItem::Resume => {
                    self.state = AppState::Game;
                    None
                }
                MenuItem::NewGame => Some(AppRequest::NewGame),
                MenuItem::SaveAndExit => Some(AppRequest::SaveAndExit),
                MenuItem::ExitWithoutSaving => {
                    self.exit();
                    None
                }
            },
        }
    }

    /// Swap in a freshly dealt game and resume play
    pub fn new_game(&mut self, game: Game) {
        info!("starting new game");
        self.game_control.new_game(game);
        self.state = AppState::Game;
    }

    pub fn exit(&mut self) {
        self.state = AppState::Exit;
    }
}
