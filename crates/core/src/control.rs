//! Game control - turns abstract actions into cursor moves and game moves
//!
//! The controller is a two-state machine:
//!
//! ```text
//! Select --Use on a face-up card--> Move --Use on any pile--> Select
//! ```
//!
//! Directional actions only move the cursor. Inside a tableau pile Up/Down
//! walk through the face-up run first and leave the pile through the layout
//! graph once they pass either end. On every other pile the cursor sits on the
//! top card.
//!
//! A move that the rules reject still ends Move mode and clears the mark, so
//! pressing Use twice on the same pile cancels a selection.

use tracing::debug;

use crate::game::Game;
use crate::layout::Layout;
use crate::selection::Selection;
use crate::types::Action;

/// A game, the cursor into it, and the board topology used for navigation
#[derive(Debug, Clone)]
pub struct GameControl {
    game: Game,
    selection: Selection,
    layout: Layout,
}

impl GameControl {
    pub fn new(game: Game, layout: Layout) -> Self {
        let mut control = Self {
            game,
            selection: Selection::new(),
            layout,
        };
        control.refresh_card();
        control
    }

    /// Replace the game and cursor in one step; the layout is kept.
    pub fn new_game(&mut self, game: Game) {
        *self = Self::new(game, self.layout.clone());
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn stack_index(&self) -> usize {
        self.selection.stack_index
    }

    pub fn card_index(&self) -> usize {
        self.selection.card_index
    }

    /// Apply one action. Reset, Exit and None are handled by the app layer.
    pub fn action(&mut self, action: Action) {
        match action {
            Action::Up => self.up(),
            Action::Down => self.down(),
            Action::Left => self.change_stack(self.layout.left(self.selection.stack_index)),
            Action::Right => self.change_stack(self.layout.right(self.selection.stack_index)),
            Action::Use => self.use_card(),
            Action::Reset | Action::Exit | Action::None => {}
        }

        self.game.check_win();
    }

    fn up(&mut self) {
        let stack = self.selection.stack_index;
        if self.is_central_stack() && self.selection.card_index > 0 {
            if !self.change_card(self.selection.card_index - 1) {
                self.change_stack(self.layout.up(stack));
            }
        } else {
            self.change_stack(self.layout.up(stack));
        }
    }

    fn down(&mut self) {
        let stack = self.selection.stack_index;
        if self.is_central_stack() {
            if !self.change_card(self.selection.card_index + 1) {
                self.change_stack(self.layout.down(stack));
            }
        } else {
            self.change_stack(self.layout.down(stack));
        }
    }

    fn use_card(&mut self) {
        if self.selection.is_moving() {
            let sel = self.selection;
            let moved =
                self.game
                    .move_cards(sel.marked_stack_index, sel.marked_card_index, sel.stack_index);
            debug!(
                from = sel.marked_stack_index,
                to = sel.stack_index,
                moved,
                "move finished"
            );
            self.selection.clear_mark();
        } else {
            let (stack, card) = (self.selection.stack_index, self.selection.card_index);
            if self.game.is_closed_stack(stack) {
                self.game.open_card();
            } else if self.game.is_flipped_card(stack, card) {
                self.game.flip_card(stack, card);
            } else if self.game.stack(stack).is_some_and(|s| !s.is_empty()) {
                self.selection.mark();
                debug!(stack, card, "card marked");
            }
        }

        self.refresh_card();
    }

    fn is_central_stack(&self) -> bool {
        self.game.is_central_stack(self.selection.stack_index)
    }

    /// Move the cursor to another pile, keeping the card index where possible
    fn change_stack(&mut self, stack_index: usize) {
        self.selection.stack_index = stack_index;
        self.refresh_card();
    }

    fn refresh_card(&mut self) {
        self.change_card(self.selection.card_index);
    }

    /// Point the cursor at `card_index` in the current pile.
    ///
    /// Returns `false` when the index had to be clamped: past the top, before
    /// the first face-up card, or on a pile without a card range.
    fn change_card(&mut self, card_index: usize) -> bool {
        let Some(stack) = self.game.stack(self.selection.stack_index) else {
            return false;
        };
        let last = stack.top_index();

        if !self.is_central_stack() {
            self.selection.card_index = last;
            return false;
        }

        if card_index > last {
            self.selection.card_index = last;
            return false;
        }

        match stack.first_open_card() {
            None => {
                self.selection.card_index = last;
                false
            }
            Some(first) if card_index < first => {
                self.selection.card_index = first;
                false
            }
            Some(_) => {
                self.selection.card_index = card_index;
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card_stack::CardStack;
    use crate::game::Piles;
    use crate::selection::SelectionState;
    use crate::types::{Card, Suit};

    fn control_for(game: Game) -> GameControl {
        GameControl::new(game, Layout::game())
    }

    #[test]
    fn starts_on_draw_pile() {
        let control = control_for(Game::deal(1));
        assert_eq!(control.stack_index(), 0);
        assert_eq!(control.card_index(), 16);
        assert_eq!(control.selection().state, SelectionState::Select);
    }

    #[test]
    fn use_on_draw_pile_opens_a_card() {
        let mut control = control_for(Game::deal(1));
        control.action(Action::Use);
        assert_eq!(control.game().stacks()[1].len(), 1);
        assert_eq!(control.game().stacks()[0].len(), 16);
        assert_eq!(control.selection().state, SelectionState::Select);
        assert_eq!(control.card_index(), 15);
    }

    #[test]
    fn walking_into_tableau_lands_on_open_card() {
        let mut control = control_for(Game::deal(1));
        control.action(Action::Down);
        assert_eq!(control.stack_index(), 6);
        // Pile 6 holds two cards; only the top is open.
        assert_eq!(control.card_index(), 1);

        // Up leaves the pile because the card below is closed.
        control.action(Action::Up);
        assert_eq!(control.stack_index(), 0);
    }

    #[test]
    fn up_walks_the_open_run_before_leaving() {
        let mut piles = Piles::default();
        piles.central[0] = CardStack::from(vec![
            Card::closed(2, Suit::Club).unwrap(),
            Card::open(9, Suit::Spade).unwrap(),
            Card::open(8, Suit::Heart).unwrap(),
        ]);
        let mut control = control_for(Game::from_piles(piles));

        // Entering the pile clamps to the first open card.
        control.action(Action::Down);
        assert_eq!((control.stack_index(), control.card_index()), (6, 1));
        control.action(Action::Down);
        assert_eq!((control.stack_index(), control.card_index()), (6, 2));
        control.action(Action::Up);
        assert_eq!((control.stack_index(), control.card_index()), (6, 1));
        control.action(Action::Up);
        assert_eq!(control.stack_index(), 0);
    }

    #[test]
    fn down_past_the_top_stays_on_the_pile() {
        let mut control = control_for(Game::deal(1));
        control.action(Action::Down);
        control.action(Action::Down);
        control.action(Action::Down);
        assert_eq!((control.stack_index(), control.card_index()), (6, 1));
    }

    #[test]
    fn gap_column_goes_up_to_waste_pile() {
        let mut control = control_for(Game::deal(1));
        control.action(Action::Down);
        control.action(Action::Right);
        control.action(Action::Right);
        assert_eq!(control.stack_index(), 8);
        control.action(Action::Up);
        assert_eq!(control.stack_index(), 1);
    }

    #[test]
    fn card_index_is_clamped_between_tableau_piles() {
        let mut control = control_for(Game::deal(1));
        control.action(Action::Down);
        for _ in 0..6 {
            control.action(Action::Right);
        }
        // Pile 12 has eight cards with only the top open.
        assert_eq!((control.stack_index(), control.card_index()), (12, 7));
        control.action(Action::Left);
        assert_eq!((control.stack_index(), control.card_index()), (11, 6));
    }

    #[test]
    fn failed_move_clears_the_mark() {
        let mut control = control_for(Game::deal(1));
        control.action(Action::Down);
        control.action(Action::Use);
        assert_eq!(control.selection().state, SelectionState::Move);
        assert_eq!(control.selection().marked_stack_index, 6);

        let before = control.game().clone();
        // Same pile: always rejected.
        control.action(Action::Use);
        assert_eq!(control.selection().state, SelectionState::Select);
        assert_eq!(control.game(), &before);
    }

    #[test]
    fn new_game_resets_cursor() {
        let mut control = control_for(Game::deal(1));
        control.action(Action::Down);
        control.action(Action::Use);
        control.new_game(Game::deal(2));
        assert_eq!(control.stack_index(), 0);
        assert_eq!(control.selection().state, SelectionState::Select);
        assert_eq!(control.game(), &Game::deal(2));
    }
}
