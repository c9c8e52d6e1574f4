//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain `Copy` data with no external dependencies, making them
//! usable in any context (rules engine, terminal rendering, save files).
//!
//! # Board Layout
//!
//! A Klondike board is a fixed list of 13 piles. Indices are stable for the
//! lifetime of a game:
//!
//! | Index | Pile | Name in code |
//! |-------|------|--------------|
//! | 0 | Draw pile (face down) | closed stack |
//! | 1 | Waste pile (face up) | open stack |
//! | 2..=5 | Foundations, one per suit | end stacks |
//! | 6..=12 | Tableau | central stacks |
//!
//! # Examples
//!
//! ```
//! use soliterminal_types::{Action, Card, CardColor, FaceState, Suit, STACK_COUNT};
//!
//! let queen = Card::new(12, Suit::Diamond, FaceState::Open).unwrap();
//! assert_eq!(queen.color(), CardColor::Red);
//! assert_eq!(queen.label(), "Q");
//!
//! // Ranks outside 1..=13 are rejected
//! assert!(Card::new(14, Suit::Club, FaceState::Open).is_none());
//!
//! assert_eq!(Action::from_str("use"), Some(Action::Use));
//! assert_eq!(STACK_COUNT, 13);
//! ```

use std::ops::Range;

/// Number of cards in a standard deck
pub const DECK_SIZE: usize = 52;

/// Cards per suit (Ace to King)
pub const SUIT_SIZE: usize = 13;

/// Lowest rank (Ace)
pub const ACE: u8 = 1;

/// Highest rank (King)
pub const KING: u8 = 13;

/// Index of the draw pile
pub const CLOSED_STACK: usize = 0;

/// Index of the waste pile
pub const OPEN_STACK: usize = 1;

/// Indices of the four foundation piles
pub const END_STACKS: Range<usize> = 2..6;

/// Indices of the seven tableau piles
pub const CENTRAL_STACKS: Range<usize> = 6..13;

/// Total number of piles on the board
pub const STACK_COUNT: usize = 13;

/// Number of foundation piles
pub const END_STACK_COUNT: usize = 4;

/// Number of tableau piles
pub const CENTRAL_STACK_COUNT: usize = 7;

/// Card suits.
///
/// The declaration order matches the numeric encoding used by save files:
/// Heart = 0, Diamond = 1, Club = 2, Spade = 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Heart,
    Diamond,
    Club,
    Spade,
}

impl Suit {
    /// All four suits in encoding order
    pub const ALL: [Suit; 4] = [Suit::Heart, Suit::Diamond, Suit::Club, Suit::Spade];

    /// Colour of the suit (hearts and diamonds are red)
    pub fn color(&self) -> CardColor {
        match self {
            Suit::Heart | Suit::Diamond => CardColor::Red,
            Suit::Club | Suit::Spade => CardColor::Black,
        }
    }

    /// Single glyph used by the terminal view
    pub fn symbol(&self) -> char {
        match self {
            Suit::Heart => '♥',
            Suit::Diamond => '♦',
            Suit::Club => '♣',
            Suit::Spade => '♠',
        }
    }

    /// Numeric code (0..=3)
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Inverse of [`Suit::index`]
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }
}

/// Card colour, derived from the suit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardColor {
    Red,
    Black,
}

/// Whether a card shows its face.
///
/// Save files encode `Open` as 0 and `Closed` as 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaceState {
    Open,
    Closed,
}

impl FaceState {
    /// Opposite state
    pub fn flipped(&self) -> Self {
        match self {
            FaceState::Open => FaceState::Closed,
            FaceState::Closed => FaceState::Open,
        }
    }

    pub fn index(&self) -> u8 {
        *self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(FaceState::Open),
            1 => Some(FaceState::Closed),
            _ => None,
        }
    }
}

/// A playing card.
///
/// Rank runs from 1 (Ace) to 13 (King). The rank is private so every card
/// in the program went through [`Card::new`] and satisfies that range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    rank: u8,
    pub suit: Suit,
    pub state: FaceState,
}

impl Card {
    /// Create a card, returning `None` when `rank` is outside `1..=13`
    pub fn new(rank: u8, suit: Suit, state: FaceState) -> Option<Self> {
        if !(ACE..=KING).contains(&rank) {
            return None;
        }
        Some(Self { rank, suit, state })
    }

    /// Face-up card shorthand, mostly for tests and fixed deals
    pub fn open(rank: u8, suit: Suit) -> Option<Self> {
        Self::new(rank, suit, FaceState::Open)
    }

    /// Face-down card shorthand
    pub fn closed(rank: u8, suit: Suit) -> Option<Self> {
        Self::new(rank, suit, FaceState::Closed)
    }

    pub fn rank(&self) -> u8 {
        self.rank
    }

    pub fn color(&self) -> CardColor {
        self.suit.color()
    }

    pub fn is_open(&self) -> bool {
        self.state == FaceState::Open
    }

    pub fn is_closed(&self) -> bool {
        self.state == FaceState::Closed
    }

    /// Toggle between open and closed
    pub fn flip(&mut self) {
        self.state = self.state.flipped();
    }

    pub fn is_same_suit(&self, other: &Card) -> bool {
        self.suit == other.suit
    }

    pub fn is_same_color(&self, other: &Card) -> bool {
        self.color() == other.color()
    }

    /// True if this card ranks below `other`
    pub fn is_lower(&self, other: &Card) -> bool {
        self.rank < other.rank
    }

    /// True if this card ranks above `other`
    pub fn is_higher(&self, other: &Card) -> bool {
        self.rank > other.rank
    }

    /// True if the ranks differ by exactly one
    pub fn is_adjacent(&self, other: &Card) -> bool {
        self.rank.abs_diff(other.rank) == 1
    }

    /// Rank label: A, 2..10, J, Q, K
    pub fn label(&self) -> &'static str {
        const LABELS: [&str; 13] = [
            "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
        ];
        LABELS[(self.rank - 1) as usize]
    }
}

/// Abstract player actions.
///
/// Input sources produce exactly one of these per call; the rules engine and
/// the menus never see raw key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
    Use,
    Reset,
    Exit,
    None,
}

impl Action {
    /// Parse action from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Action::Up),
            "down" => Some(Action::Down),
            "left" => Some(Action::Left),
            "right" => Some(Action::Right),
            "use" => Some(Action::Use),
            "reset" => Some(Action::Reset),
            "exit" => Some(Action::Exit),
            "none" => Some(Action::None),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Up => "up",
            Action::Down => "down",
            Action::Left => "left",
            Action::Right => "right",
            Action::Use => "use",
            Action::Reset => "reset",
            Action::Exit => "exit",
            Action::None => "none",
        }
    }

    pub fn is_directional(&self) -> bool {
        matches!(
            self,
            Action::Up | Action::Down | Action::Left | Action::Right
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pile_ranges_cover_the_board_once() {
        let mut seen = [0u8; STACK_COUNT];
        seen[CLOSED_STACK] += 1;
        seen[OPEN_STACK] += 1;
        for i in END_STACKS.chain(CENTRAL_STACKS) {
            seen[i] += 1;
        }
        assert!(seen.iter().all(|&n| n == 1));
        assert_eq!(END_STACKS.len(), END_STACK_COUNT);
        assert_eq!(CENTRAL_STACKS.len(), CENTRAL_STACK_COUNT);
    }

    #[test]
    fn card_rank_range_is_enforced() {
        assert!(Card::open(0, Suit::Heart).is_none());
        assert!(Card::open(1, Suit::Heart).is_some());
        assert!(Card::open(13, Suit::Heart).is_some());
        assert!(Card::open(14, Suit::Heart).is_none());
    }

    #[test]
    fn card_colors_follow_suits() {
        assert_eq!(Suit::Heart.color(), CardColor::Red);
        assert_eq!(Suit::Diamond.color(), CardColor::Red);
        assert_eq!(Suit::Club.color(), CardColor::Black);
        assert_eq!(Suit::Spade.color(), CardColor::Black);
    }

    #[test]
    fn card_comparisons() {
        let five = Card::open(5, Suit::Heart).unwrap();
        let six = Card::open(6, Suit::Diamond).unwrap();
        let eight = Card::open(8, Suit::Spade).unwrap();

        assert!(five.is_lower(&six));
        assert!(six.is_higher(&five));
        assert!(five.is_adjacent(&six));
        assert!(six.is_adjacent(&five));
        assert!(!six.is_adjacent(&eight));
        assert!(five.is_same_color(&six));
        assert!(!five.is_same_suit(&six));
        assert!(!six.is_same_color(&eight));
    }

    #[test]
    fn flip_toggles_state() {
        let mut card = Card::closed(3, Suit::Club).unwrap();
        card.flip();
        assert!(card.is_open());
        card.flip();
        assert!(card.is_closed());
    }

    #[test]
    fn numeric_codes_roundtrip() {
        for suit in Suit::ALL {
            assert_eq!(Suit::from_index(suit.index()), Some(suit));
        }
        assert_eq!(Suit::from_index(4), None);
        assert_eq!(FaceState::from_index(0), Some(FaceState::Open));
        assert_eq!(FaceState::from_index(1), Some(FaceState::Closed));
        assert_eq!(FaceState::from_index(2), None);
    }

    #[test]
    fn labels() {
        assert_eq!(Card::open(1, Suit::Spade).unwrap().label(), "A");
        assert_eq!(Card::open(10, Suit::Spade).unwrap().label(), "10");
        assert_eq!(Card::open(11, Suit::Spade).unwrap().label(), "J");
        assert_eq!(Card::open(13, Suit::Spade).unwrap().label(), "K");
    }

    #[test]
    fn action_strings() {
        for action in [
            Action::Up,
            Action::Down,
            Action::Left,
            Action::Right,
            Action::Use,
            Action::Reset,
            Action::Exit,
            Action::None,
        ] {
            assert_eq!(Action::from_str(action.as_str()), Some(action));
        }
        assert_eq!(Action::from_str("UP"), Some(Action::Up));
        assert_eq!(Action::from_str("jump"), None);
    }
}
