//! On-disk shape of a saved game.
//!
//! These records mirror the file format one to one. Conversion into core types
//! is fallible: numbers out of range are rejected here, board-level rules
//! (pile count, full deck) are checked by [`Game::from_stacks`].

use serde::{Deserialize, Serialize};

use crate::core::{CardStack, Game};
use crate::store::SaveError;
use crate::types::{Card, FaceState, Suit};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedCard {
    /// Rank, 1 (Ace) through 13 (King)
    pub number: u8,
    /// 0 open, 1 closed
    pub state: u8,
    /// 0 heart, 1 diamond, 2 club, 3 spade
    pub suit: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SavedStack {
    pub cards: Vec<SavedCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SavedGame {
    pub stacks: Vec<SavedStack>,
}

impl From<Card> for SavedCard {
    fn from(card: Card) -> Self {
        Self {
            number: card.rank(),
            state: card.state.index(),
            suit: card.suit.index(),
        }
    }
}

impl TryFrom<SavedCard> for Card {
    type Error = SaveError;

    fn try_from(saved: SavedCard) -> Result<Self, Self::Error> {
        let invalid = || SaveError::InvalidCard {
            number: saved.number,
            state: saved.state,
            suit: saved.suit,
        };
        let suit = Suit::from_index(saved.suit).ok_or_else(invalid)?;
        let state = FaceState::from_index(saved.state).ok_or_else(invalid)?;
        Card::new(saved.number, suit, state).ok_or_else(invalid)
    }
}

impl From<&CardStack> for SavedStack {
    fn from(stack: &CardStack) -> Self {
        Self {
            cards: stack.iter().map(|&card| SavedCard::from(card)).collect(),
        }
    }
}

impl TryFrom<SavedStack> for CardStack {
    type Error = SaveError;

    fn try_from(saved: SavedStack) -> Result<Self, Self::Error> {
        saved.cards.into_iter().map(Card::try_from).collect()
    }
}

impl From<&Game> for SavedGame {
    fn from(game: &Game) -> Self {
        Self {
            stacks: game.stacks().iter().map(SavedStack::from).collect(),
        }
    }
}

impl TryFrom<SavedGame> for Game {
    type Error = SaveError;

    fn try_from(saved: SavedGame) -> Result<Self, Self::Error> {
        let stacks = saved
            .stacks
            .into_iter()
            .map(CardStack::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Game::from_stacks(stacks)?)
    }
}
