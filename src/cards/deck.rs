//! The 52-card deck and five-card draws.

use rand::seq::SliceRandom;
use rand::Rng;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::card::{Card, Rank, Suit};
use crate::core::{DECK_SIZE, HAND_SIZE};

/// Errors building a draw from explicit cards.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DrawError {
    #[error("card {0} appears more than once in the draw")]
    DuplicateCard(Card),
}

/// Build the full deck, suit by suit, ranks low to high.
#[must_use]
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card::new(suit, rank));
        }
    }
    deck
}

/// An ordered sequence of five distinct cards.
///
/// Cards are revealed in draw order: index 0 is face-up when the round
/// starts, index 4 is the last card.
///
/// Deserializing goes through [`Draw::new`], so repeated cards are rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[Card; HAND_SIZE]")]
pub struct Draw([Card; HAND_SIZE]);

impl Draw {
    /// Build a draw from explicit cards, rejecting repeats.
    ///
    /// Useful for scripted rounds; normal play uses [`draw_five_cards`].
    pub fn new(cards: [Card; HAND_SIZE]) -> Result<Self, DrawError> {
        let mut seen = FxHashSet::default();
        for card in cards {
            if !seen.insert(card) {
                return Err(DrawError::DuplicateCard(card));
            }
        }
        Ok(Self(cards))
    }

    /// All five cards in draw order.
    #[must_use]
    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.0
    }

    /// Card at a draw position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Card> {
        self.0.get(index).copied()
    }

    /// Iterate cards in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.0.iter()
    }
}

impl TryFrom<[Card; HAND_SIZE]> for Draw {
    type Error = DrawError;

    fn try_from(cards: [Card; HAND_SIZE]) -> Result<Self, DrawError> {
        Self::new(cards)
    }
}

impl std::ops::Index<usize> for Draw {
    type Output = Card;

    fn index(&self, index: usize) -> &Card {
        &self.0[index]
    }
}

impl std::fmt::Display for Draw {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, card) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

/// Draw five cards from a freshly shuffled deck.
///
/// The shuffle is a uniform Fisher-Yates permutation driven by `rng`, so
/// every ordered five-card draw is equally likely and a seeded RNG always
/// yields the same draw.
pub fn draw_five_cards<R: Rng + ?Sized>(rng: &mut R) -> Draw {
    let mut deck = full_deck();
    deck.shuffle(rng);
    Draw(std::array::from_fn(|i| deck[i]))
}
