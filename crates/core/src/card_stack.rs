//! Card stack module - the ordered pile every part of the board is built from
//!
//! Index 0 is the buried bottom card, the last index is the visible top card.
//! A stack owns its cards; transfers between stacks are moves, and a split is
//! all-or-nothing. `CardStack` knows nothing about game rules.

use crate::types::Card;

/// Ordered sequence of cards, bottom to top
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CardStack {
    cards: Vec<Card>,
}

impl CardStack {
    /// Create an empty stack
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Split the stack at `index`, returning every card from `index` to the top.
    ///
    /// Returns `None` (and leaves the stack untouched) when `index` is out of
    /// bounds.
    pub fn take(&mut self, index: usize) -> Option<CardStack> {
        if index >= self.cards.len() {
            return None;
        }
        Some(CardStack {
            cards: self.cards.split_off(index),
        })
    }

    /// Take the top card as a one-card stack
    pub fn take_top(&mut self) -> Option<CardStack> {
        let top = self.cards.len().checked_sub(1)?;
        self.take(top)
    }

    /// Move every card of `other` onto the top of this stack
    pub fn append(&mut self, mut other: CardStack) {
        self.cards.append(&mut other.cards);
    }

    /// Visible card
    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Buried card
    pub fn bottom(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    /// Index of the top card, or 0 for an empty stack
    pub fn top_index(&self) -> usize {
        self.cards.len().saturating_sub(1)
    }

    /// Index of the lowest face-up card, `None` if every card is closed
    pub fn first_open_card(&self) -> Option<usize> {
        self.cards.iter().position(Card::is_open)
    }

    /// Reverse the order in place
    pub fn invert_order(&mut self) {
        self.cards.reverse();
    }

    /// Toggle the face state of every card
    pub fn flip_all(&mut self) {
        for card in &mut self.cards {
            card.flip();
        }
    }

    /// Toggle the face state of the top card (no-op when empty)
    pub fn flip_top(&mut self) {
        if let Some(card) = self.cards.last_mut() {
            card.flip();
        }
    }

    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl From<Vec<Card>> for CardStack {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl FromIterator<Card> for CardStack {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a CardStack {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FaceState, Suit};

    fn stack_of(ranks: &[u8]) -> CardStack {
        ranks
            .iter()
            .map(|&r| Card::new(r, Suit::Club, FaceState::Closed).unwrap())
            .collect()
    }

    fn ranks(stack: &CardStack) -> Vec<u8> {
        stack.iter().map(|c| c.rank()).collect()
    }

    #[test]
    fn take_splits_at_index() {
        let mut stack = stack_of(&[1, 2, 3, 4, 5]);
        let taken = stack.take(2).unwrap();

        assert_eq!(ranks(&stack), vec![1, 2]);
        assert_eq!(ranks(&taken), vec![3, 4, 5]);
    }

    #[test]
    fn take_out_of_bounds_changes_nothing() {
        let mut stack = stack_of(&[1, 2, 3]);
        assert!(stack.take(3).is_none());
        assert!(stack.take(99).is_none());
        assert_eq!(ranks(&stack), vec![1, 2, 3]);
    }

    #[test]
    fn take_top_on_empty_is_none() {
        let mut stack = CardStack::new();
        assert!(stack.take_top().is_none());

        let mut one = stack_of(&[7]);
        let top = one.take_top().unwrap();
        assert!(one.is_empty());
        assert_eq!(ranks(&top), vec![7]);
    }

    #[test]
    fn top_and_bottom() {
        let stack = stack_of(&[4, 9, 12]);
        assert_eq!(stack.bottom().map(|c| c.rank()), Some(4));
        assert_eq!(stack.top().map(|c| c.rank()), Some(12));
        assert_eq!(stack.top_index(), 2);

        let empty = CardStack::new();
        assert!(empty.top().is_none());
        assert!(empty.bottom().is_none());
        assert_eq!(empty.top_index(), 0);
    }

    #[test]
    fn first_open_card_skips_closed_prefix() {
        let mut stack = stack_of(&[1, 2, 3]);
        assert_eq!(stack.first_open_card(), None);

        stack.flip_top();
        assert_eq!(stack.first_open_card(), Some(2));
    }

    #[test]
    fn flip_all_toggles_each_card() {
        let mut stack = stack_of(&[1, 2]);
        stack.flip_top();
        stack.flip_all();

        assert!(stack.get(0).unwrap().is_open());
        assert!(stack.get(1).unwrap().is_closed());
    }

    #[test]
    fn invert_order_reverses() {
        let mut stack = stack_of(&[1, 2, 3]);
        stack.invert_order();
        assert_eq!(ranks(&stack), vec![3, 2, 1]);
    }
}
