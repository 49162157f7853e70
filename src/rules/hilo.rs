//! Rank comparison and guess scoring.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// The player's prediction for the next card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Guess {
    Higher,
    Lower,
}

impl std::fmt::Display for Guess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Guess::Higher => write!(f, "higher"),
            Guess::Lower => write!(f, "lower"),
        }
    }
}

/// How the next card's rank relates to the previous one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompareResult {
    Higher,
    Lower,
    Tie,
}

/// Compare two cards by rank. Suits are ignored.
#[must_use]
pub fn compare(prev: Card, next: Card) -> CompareResult {
    use std::cmp::Ordering;

    match next.rank.value().cmp(&prev.rank.value()) {
        Ordering::Greater => CompareResult::Higher,
        Ordering::Less => CompareResult::Lower,
        Ordering::Equal => CompareResult::Tie,
    }
}

/// Score a guess.
///
/// A tie is never correct, whatever the guess; callers that need to tell a
/// tie apart from a miss check [`compare`] first.
#[must_use]
pub fn is_correct(guess: Guess, prev: Card, next: Card) -> bool {
    match compare(prev, next) {
        CompareResult::Tie => false,
        CompareResult::Higher => guess == Guess::Higher,
        CompareResult::Lower => guess == Guess::Lower,
    }
}
