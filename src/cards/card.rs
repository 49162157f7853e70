//! Card identity: suits, ranks, and the (suit, rank) pair.
//!
//! Ranks are totally ordered with Ace high (2..=14). Suits only identify
//! a card; the game never orders them.

use serde::{Deserialize, Serialize};

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All suits in deck-building order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Single-letter code ("c", "d", "h", "s").
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Suit::Clubs => "c",
            Suit::Diamonds => "d",
            Suit::Hearts => "h",
            Suit::Spades => "s",
        }
    }

    /// Display symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }
}

/// Card rank. The discriminant is the rank value, Ace high.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    /// All ranks, lowest first.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Numeric value (2..=14).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Rank for a numeric value, if it is in 2..=14.
    #[must_use]
    pub fn from_value(value: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|r| r.value() == value)
    }

    /// Label shown on a card face ("2".."10", "J", "Q", "K", "A").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

/// A playing card.
///
/// Equality is value-based: same suit and rank means the same card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Compact identifier, lowercase rank followed by suit code ("10h", "as").
    ///
    /// Presentation layers key their card artwork on this.
    #[must_use]
    pub fn code(&self) -> String {
        format!("{}{}", self.rank.label().to_lowercase(), self.suit.code())
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_values() {
        assert_eq!(Rank::Two.value(), 2);
        assert_eq!(Rank::Ten.value(), 10);
        assert_eq!(Rank::Jack.value(), 11);
        assert_eq!(Rank::Ace.value(), 14);
    }

    #[test]
    fn test_rank_order_is_ace_high() {
        assert!(Rank::Ace > Rank::King);
        assert!(Rank::King > Rank::Queen);
        assert!(Rank::Three > Rank::Two);

        let mut sorted = Rank::ALL;
        sorted.sort();
        assert_eq!(sorted, Rank::ALL);
    }

    #[test]
    fn test_rank_from_value() {
        assert_eq!(Rank::from_value(12), Some(Rank::Queen));
        assert_eq!(Rank::from_value(1), None);
        assert_eq!(Rank::from_value(15), None);
    }

    #[test]
    fn test_card_equality_is_value_based() {
        let a = Card::new(Suit::Hearts, Rank::Seven);
        let b = Card::new(Suit::Hearts, Rank::Seven);
        let c = Card::new(Suit::Spades, Rank::Seven);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_card_display() {
        assert_eq!(Card::new(Suit::Spades, Rank::Ace).to_string(), "A♠");
        assert_eq!(Card::new(Suit::Hearts, Rank::Ten).to_string(), "10♥");
    }

    #[test]
    fn test_card_code() {
        assert_eq!(Card::new(Suit::Spades, Rank::Ace).code(), "as");
        assert_eq!(Card::new(Suit::Hearts, Rank::Ten).code(), "10h");
        assert_eq!(Card::new(Suit::Clubs, Rank::Queen).code(), "qc");
    }
}
