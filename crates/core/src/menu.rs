//! Pause menu - a titled list of options navigated with Up/Down

use arrayvec::ArrayVec;

use crate::layout::Layout;
use crate::types::Action;

/// Upper bound on menu entries
pub const MAX_MENU_ITEMS: usize = 8;

/// Entries of the pause menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuItem {
    Resume,
    NewGame,
    SaveAndExit,
    ExitWithoutSaving,
}

impl MenuItem {
    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::Resume => "Resume",
            MenuItem::NewGame => "New Game",
            MenuItem::SaveAndExit => "Save and Exit",
            MenuItem::ExitWithoutSaving => "Exit without saving",
        }
    }
}

/// Menu text and options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    title: &'static str,
    text: &'static str,
    items: ArrayVec<MenuItem, MAX_MENU_ITEMS>,
}

impl Menu {
    /// Items past [`MAX_MENU_ITEMS`] are dropped.
    pub fn new(title: &'static str, text: &'static str, items: &[MenuItem]) -> Self {
        Self {
            title,
            text,
            items: items.iter().copied().take(MAX_MENU_ITEMS).collect(),
        }
    }

    /// The menu shown when the game is paused
    pub fn pause() -> Self {
        Self::new(
            "Soliterminal",
            "Arrows move, Space uses, R deals again, Esc resumes",
            &[
                MenuItem::Resume,
                MenuItem::NewGame,
                MenuItem::SaveAndExit,
                MenuItem::ExitWithoutSaving,
            ],
        )
    }

    pub fn title(&self) -> &str {
        self.title
    }

    pub fn text(&self) -> &str {
        self.text
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }
}

/// Cursor over a [`Menu`]; Up/Down wrap around
#[derive(Debug, Clone)]
pub struct MenuControl {
    menu: Menu,
    layout: Layout,
    index: usize,
}

impl MenuControl {
    pub fn new(menu: Menu) -> Self {
        let layout = Layout::vertical_ring(menu.items().len());
        Self {
            menu,
            layout,
            index: 0,
        }
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    /// Index of the highlighted item
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn selected(&self) -> Option<MenuItem> {
        self.menu.items().get(self.index).copied()
    }

    /// Highlight the first item again
    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Apply an action, returning the item chosen with Use
    pub fn action(&mut self, action: Action) -> Option<MenuItem> {
        match action {
            Action::Up => {
                self.index = self.layout.up(self.index);
                None
            }
            Action::Down => {
                self.index = self.layout.down(self.index);
                None
            }
            Action::Use => self.selected(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pause_menu_items() {
        let menu = Menu::pause();
        assert_eq!(menu.title(), "Soliterminal");
        assert_eq!(menu.items().len(), 4);
        assert_eq!(menu.items()[0], MenuItem::Resume);
    }

    #[test]
    fn navigation_wraps() {
        let mut control = MenuControl::new(Menu::pause());
        assert_eq!(control.action(Action::Up), None);
        assert_eq!(control.selected(), Some(MenuItem::ExitWithoutSaving));
        control.action(Action::Down);
        assert_eq!(control.selected(), Some(MenuItem::Resume));
        control.action(Action::Down);
        assert_eq!(control.action(Action::Use), Some(MenuItem::NewGame));
    }

    #[test]
    fn sideways_actions_do_nothing() {
        let mut control = MenuControl::new(Menu::pause());
        control.action(Action::Down);
        assert_eq!(control.action(Action::Left), None);
        assert_eq!(control.action(Action::Reset), None);
        assert_eq!(control.index(), 1);
        control.reset();
        assert_eq!(control.index(), 0);
    }

    #[test]
    fn empty_menu_selects_nothing() {
        let mut control = MenuControl::new(Menu::new("Empty", "", &[]));
        control.action(Action::Down);
        assert_eq!(control.action(Action::Use), None);
    }
}
