//! RNG module - deterministic deck shuffling
//!
//! A deal is a pure function of its seed: the standard deck is built in a fixed
//! order and shuffled with Fisher-Yates driven by a small LCG. The same seed
//! always produces the same board, which keeps tests and bug reports
//! reproducible.

use crate::types::{Card, FaceState, Suit, DECK_SIZE, KING};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// The 52-card deck, face down, suit-major (all hearts Ace..King, then
/// diamonds, clubs, spades).
pub fn standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        deck.extend((1..=KING).filter_map(|rank| Card::new(rank, suit, FaceState::Closed)));
    }
    deck
}

/// A standard deck shuffled with `seed`
pub fn shuffled_deck(seed: u32) -> Vec<Card> {
    let mut deck = standard_deck();
    SimpleRng::new(seed).shuffle(&mut deck);
    deck
}
