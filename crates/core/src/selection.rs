//! Cursor state shared between the controller and the renderer

/// Whether the player is choosing a card or a destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelectionState {
    #[default]
    Select,
    Move,
}

/// Cursor position plus the card marked for a pending move.
///
/// `card_index` only varies inside tableau piles; on every other pile it
/// points at the top card. The marked indices are meaningful only in
/// [`SelectionState::Move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Selection {
    pub state: SelectionState,
    pub stack_index: usize,
    pub card_index: usize,
    pub marked_stack_index: usize,
    pub marked_card_index: usize,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_moving(&self) -> bool {
        self.state == SelectionState::Move
    }

    /// Remember the cursor position as the card to move
    pub fn mark(&mut self) {
        self.marked_stack_index = self.stack_index;
        self.marked_card_index = self.card_index;
        self.state = SelectionState::Move;
    }

    /// Drop the mark and go back to choosing
    pub fn clear_mark(&mut self) {
        self.marked_stack_index = 0;
        self.marked_card_index = 0;
        self.state = SelectionState::Select;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_and_clear() {
        let mut sel = Selection {
            stack_index: 8,
            card_index: 3,
            ..Selection::default()
        };
        sel.mark();
        assert!(sel.is_moving());
        assert_eq!((sel.marked_stack_index, sel.marked_card_index), (8, 3));

        sel.clear_mark();
        assert_eq!(sel.state, SelectionState::Select);
        assert_eq!((sel.marked_stack_index, sel.marked_card_index), (0, 0));
        assert_eq!((sel.stack_index, sel.card_index), (8, 3));
    }
}
