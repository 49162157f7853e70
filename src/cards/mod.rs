//! Card model: suits, ranks, cards, the deck, and five-card draws.
//!
//! Everything here is a plain value. Draws take the random source as an
//! argument so callers control reproducibility.

mod card;
mod deck;

pub use card::{Card, Rank, Suit};
pub use deck::{draw_five_cards, full_deck, Draw, DrawError};
