//! Game module - the Klondike rules engine
//!
//! `Game` owns the 13 piles of the board and is the only thing that mutates
//! them. Every operation is total: an illegal request returns `false` (or does
//! nothing) and leaves the board exactly as it was. After each successful move
//! the foundations are checked for a win.
//!
//! # Move rules
//!
//! - **Tableau destination**: onto a non-empty pile the moved card must be the
//!   other colour and exactly one rank lower than the pile's top card. An empty
//!   tableau pile accepts any card.
//! - **Foundation destination**: only the single top card of a pile may move.
//!   An empty foundation takes an Ace; otherwise the card must be the same suit
//!   and exactly one rank higher.
//! - The draw and waste piles are never move destinations.

use std::collections::HashSet;

use thiserror::Error;
use tracing::debug;

use crate::card_stack::CardStack;
use crate::rng::{shuffled_deck, standard_deck};
use crate::types::{
    Suit, ACE, CENTRAL_STACKS, CENTRAL_STACK_COUNT, CLOSED_STACK, DECK_SIZE, END_STACKS,
    END_STACK_COUNT, OPEN_STACK, STACK_COUNT, SUIT_SIZE,
};

/// Game outcome.
///
/// `Lose` exists for interface completeness; no rule produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Outcome {
    #[default]
    Playing,
    Win,
    Lose,
}

/// Reasons a list of piles cannot become a board
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("expected {expected} stacks, got {got}")]
    StackCount { expected: usize, got: usize },

    #[error("board must hold one full deck, found {cards} cards ({unique} distinct)")]
    NotFullDeck { cards: usize, unique: usize },
}

/// Named piles used to assemble a board
#[derive(Debug, Clone, Default)]
pub struct Piles {
    pub closed: CardStack,
    pub open: CardStack,
    pub end: [CardStack; END_STACK_COUNT],
    pub central: [CardStack; CENTRAL_STACK_COUNT],
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    stacks: [CardStack; STACK_COUNT],
    outcome: Outcome,
}

impl Game {
    /// Assemble a board from named piles, in the fixed index order
    /// (closed, open, 4 foundations, 7 tableau).
    pub fn from_piles(piles: Piles) -> Self {
        let Piles {
            closed,
            open,
            end,
            central,
        } = piles;

        let mut stacks: [CardStack; STACK_COUNT] = Default::default();
        stacks[CLOSED_STACK] = closed;
        stacks[OPEN_STACK] = open;
        for (slot, stack) in stacks[END_STACKS].iter_mut().zip(end) {
            *slot = stack;
        }
        for (slot, stack) in stacks[CENTRAL_STACKS].iter_mut().zip(central) {
            *slot = stack;
        }

        Self {
            stacks,
            outcome: Outcome::Playing,
        }
    }

    /// Build a game from an ordered list of piles, checking that there are
    /// exactly 13 of them and that together they hold one full deck.
    pub fn from_stacks(stacks: Vec<CardStack>) -> Result<Self, BoardError> {
        let got = stacks.len();
        let stacks: [CardStack; STACK_COUNT] =
            stacks.try_into().map_err(|_| BoardError::StackCount {
                expected: STACK_COUNT,
                got,
            })?;

        let mut game = Self {
            stacks,
            outcome: Outcome::Playing,
        };
        if !game.is_full_deck() {
            return Err(BoardError::NotFullDeck {
                cards: game.card_count(),
                unique: game.unique_card_count(),
            });
        }
        game.check_win();
        Ok(game)
    }

    /// Deal a new random game.
    ///
    /// Tableau pile `i` receives `i + 2` cards with only its top card open;
    /// the remaining 17 cards form the face-down draw pile.
    pub fn deal(seed: u32) -> Self {
        let mut deck = shuffled_deck(seed);
        let mut piles = Piles::default();

        for (i, pile) in piles.central.iter_mut().enumerate() {
            let split = deck.len() - (i + 2);
            let mut stack = CardStack::from(deck.split_off(split));
            stack.flip_top();
            *pile = stack;
        }

        debug_assert_eq!(deck.len(), 17);
        piles.closed = CardStack::from(deck);

        debug!(seed, "dealt new game");
        Self::from_piles(piles)
    }

    /// A board four moves from the end: the foundations hold Ace..Queen of each
    /// suit and the four Kings lie face up on the first tableau piles.
    pub fn near_ending() -> Self {
        let mut piles = Piles::default();
        let mut kings = Vec::with_capacity(END_STACK_COUNT);

        for (suit_index, chunk) in standard_deck().chunks(SUIT_SIZE).enumerate() {
            let mut stack: CardStack = chunk.iter().copied().collect();
            stack.flip_all();
            if let Some(king) = stack.take_top() {
                kings.push(king);
            }
            piles.end[suit_index] = stack;
        }
        for (pile, king) in piles.central.iter_mut().zip(kings) {
            *pile = king;
        }

        Self::from_piles(piles)
    }

    pub fn stacks(&self) -> &[CardStack] {
        &self.stacks
    }

    pub fn stack(&self, index: usize) -> Option<&CardStack> {
        self.stacks.get(index)
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_won(&self) -> bool {
        self.outcome == Outcome::Win
    }

    /// Move the top card of the draw pile, face up, onto the waste pile.
    /// An empty draw pile is refilled from the waste pile instead.
    pub fn open_card(&mut self) {
        match self.stacks[CLOSED_STACK].take_top() {
            Some(mut top) => {
                top.flip_all();
                self.stacks[OPEN_STACK].append(top);
            }
            None => self.reset_closed_stack(),
        }
    }

    /// Recycle the waste pile into the draw pile: reversed and face down.
    ///
    /// Does nothing unless the draw pile is empty and the waste pile is not.
    pub fn reset_closed_stack(&mut self) {
        if !self.stacks[CLOSED_STACK].is_empty() || self.stacks[OPEN_STACK].is_empty() {
            return;
        }

        self.stacks.swap(CLOSED_STACK, OPEN_STACK);
        let closed = &mut self.stacks[CLOSED_STACK];
        closed.invert_order();
        closed.flip_all();
        debug!(cards = closed.len(), "recycled waste pile");
    }

    /// Move the run starting at `source_card_index` from one pile to another.
    ///
    /// Returns `false` without touching the board when any index is out of
    /// range, the piles are the same, the destination is not a tableau or
    /// foundation pile, or the move breaks the rules for that destination.
    pub fn move_cards(
        &mut self,
        source_stack_index: usize,
        source_card_index: usize,
        dest_stack_index: usize,
    ) -> bool {
        if source_stack_index >= STACK_COUNT || dest_stack_index >= STACK_COUNT {
            return false;
        }
        if source_stack_index == dest_stack_index {
            return false;
        }

        let source = &self.stacks[source_stack_index];
        let dest = &self.stacks[dest_stack_index];
        if source_card_index >= source.len() {
            return false;
        }

        let legal = if self.is_central_stack(dest_stack_index) {
            can_move_to_central_stack(source, source_card_index, dest)
        } else if self.is_end_stack(dest_stack_index) {
            can_move_to_end_stack(source, source_card_index, dest)
        } else {
            false
        };

        if !legal {
            debug!(
                from = source_stack_index,
                card = source_card_index,
                to = dest_stack_index,
                "move rejected"
            );
            return false;
        }

        let Some(run) = self.stacks[source_stack_index].take(source_card_index) else {
            return false;
        };
        debug!(
            from = source_stack_index,
            to = dest_stack_index,
            cards = run.len(),
            "move accepted"
        );
        self.stacks[dest_stack_index].append(run);

        self.check_win();
        true
    }

    /// True if the card exists and is face down
    pub fn is_flipped_card(&self, stack_index: usize, card_index: usize) -> bool {
        self.stacks
            .get(stack_index)
            .and_then(|stack| stack.get(card_index))
            .is_some_and(|card| card.is_closed())
    }

    /// Flip the card at `card_index`. Only the top card of a pile can flip.
    pub fn flip_card(&mut self, stack_index: usize, card_index: usize) -> bool {
        let Some(stack) = self.stacks.get_mut(stack_index) else {
            return false;
        };
        if stack.is_empty() || card_index != stack.top_index() {
            return false;
        }
        stack.flip_top();
        true
    }

    /// Set the outcome to `Win` when every foundation holds a complete
    /// Ace-to-King run of one suit. Safe to call any number of times.
    pub fn check_win(&mut self) {
        let complete = self.stacks[END_STACKS].iter().all(is_complete_foundation);
        if complete && self.outcome != Outcome::Win {
            debug!("all foundations complete");
            self.outcome = Outcome::Win;
        }
    }

    pub fn is_closed_stack(&self, index: usize) -> bool {
        index == CLOSED_STACK
    }

    pub fn is_open_stack(&self, index: usize) -> bool {
        index == OPEN_STACK
    }

    pub fn is_end_stack(&self, index: usize) -> bool {
        END_STACKS.contains(&index)
    }

    pub fn is_central_stack(&self, index: usize) -> bool {
        CENTRAL_STACKS.contains(&index)
    }

    pub fn end_stack_indices(&self) -> [usize; END_STACK_COUNT] {
        std::array::from_fn(|i| END_STACKS.start + i)
    }

    pub fn central_stack_indices(&self) -> [usize; CENTRAL_STACK_COUNT] {
        std::array::from_fn(|i| CENTRAL_STACKS.start + i)
    }

    /// Total number of cards across all piles
    pub fn card_count(&self) -> usize {
        self.stacks.iter().map(CardStack::len).sum()
    }

    fn unique_card_count(&self) -> usize {
        self.stacks
            .iter()
            .flat_map(CardStack::iter)
            .map(|card| (card.rank(), card.suit))
            .collect::<HashSet<(u8, Suit)>>()
            .len()
    }

    /// True if the piles together hold each of the 52 cards exactly once
    pub fn is_full_deck(&self) -> bool {
        self.card_count() == DECK_SIZE && self.unique_card_count() == DECK_SIZE
    }
}

/// Tableau rule: alternating colour, one rank lower. Empty piles take anything.
pub fn can_move_to_central_stack(
    source: &CardStack,
    source_card_index: usize,
    dest: &CardStack,
) -> bool {
    let Some(card) = source.get(source_card_index) else {
        return false;
    };
    match dest.top() {
        Some(top) => !card.is_same_color(&top) && card.is_lower(&top) && card.is_adjacent(&top),
        None => true,
    }
}

/// Foundation rule: single top card, same suit, one rank higher, Ace on empty.
pub fn can_move_to_end_stack(
    source: &CardStack,
    source_card_index: usize,
    dest: &CardStack,
) -> bool {
    if source.is_empty() || source_card_index != source.top_index() {
        return false;
    }
    let Some(card) = source.get(source_card_index) else {
        return false;
    };
    match dest.top() {
        Some(top) => card.is_same_suit(&top) && card.is_higher(&top) && card.is_adjacent(&top),
        None => card.rank() == ACE,
    }
}

fn is_complete_foundation(stack: &CardStack) -> bool {
    if stack.len() != SUIT_SIZE {
        return false;
    }
    stack.cards().windows(2).all(|pair| {
        let (lower, upper) = (pair[0], pair[1]);
        upper.is_same_suit(&lower) && upper.is_higher(&lower) && upper.is_adjacent(&lower)
    })
}
