//! Round state: exactly one variant is live at a time.
//!
//! ## Lifecycle
//!
//! ```text
//! Idle <-> AmountEntry -> Ready -> Playing -> { Playing | Lost | Won }
//! Lost / Won -> Idle          (enter)
//! any state  -> AmountEntry   (digit)
//! ```
//!
//! States are plain values. Transitions build a new value rather than
//! editing the old one in place.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Draw};
use crate::core::HAND_SIZE;

/// Fieldless tag for each `RoundState` variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Idle,
    AmountEntry,
    Ready,
    Playing,
    Lost,
    Won,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Idle => "idle",
            Phase::AmountEntry => "amount-entry",
            Phase::Ready => "ready",
            Phase::Playing => "playing",
            Phase::Lost => "lost",
            Phase::Won => "won",
        };
        write!(f, "{name}")
    }
}

/// An in-progress round.
///
/// `revealed_count` is in `1..HAND_SIZE`: at least the first card is face-up
/// and at least one card is still hidden. Transitions only build values in
/// that range; a hand-built value outside it has no current card and
/// ignores guesses.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Playing {
    /// Current stake, doubled on every correct guess.
    pub amount: u64,

    pub cards: Draw,

    /// Number of face-up cards, in draw order.
    pub revealed_count: usize,

    /// A guess is currently being asked for.
    pub awaiting_guess: bool,

    /// One-shot: a correct guess should be celebrated.
    pub pending_celebration: bool,

    /// One-shot: a coin sound should play.
    pub pending_coin_sound: bool,

    /// Number of correct guesses this round. Presentation restarts its
    /// celebration whenever this changes.
    pub celebration_tick: u32,
}

impl Playing {
    /// First card face-up, nothing pending.
    #[must_use]
    pub fn new(amount: u64, cards: Draw) -> Self {
        Self {
            amount,
            cards,
            revealed_count: 1,
            awaiting_guess: true,
            pending_celebration: false,
            pending_coin_sound: false,
            celebration_tick: 0,
        }
    }

    /// The last face-up card, if any card is face-up.
    #[must_use]
    pub fn current_card(&self) -> Option<Card> {
        self.revealed_count.checked_sub(1).and_then(|i| self.cards.get(i))
    }

    /// The next hidden card, if any.
    #[must_use]
    pub fn next_card(&self) -> Option<Card> {
        self.cards.get(self.revealed_count)
    }
}

/// Result of a finished round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// All cards revealed; `amount` includes every doubling.
    Won { amount: u64 },
    /// A wrong guess; `last_amount` is the stake that was lost.
    Lost { last_amount: u64 },
}

/// The single live state of the game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundState {
    /// No amount, no cards.
    #[default]
    Idle,

    /// An amount is being typed. `raw` is a non-empty digit string without
    /// leading zeros, except the literal "0".
    AmountEntry { raw: String },

    /// Cards drawn, nothing revealed yet. `amount > 0`.
    Ready { amount: u64, cards: Draw },

    Playing(Playing),

    /// A wrong guess ended the round. `revealed_count` includes the losing
    /// card.
    Lost {
        last_amount: u64,
        cards: Draw,
        revealed_count: usize,
    },

    /// Every card revealed without a miss.
    Won {
        amount: u64,
        cards: Draw,
        /// One-shot: the win sound should play.
        pending_win_sound: bool,
    },
}

impl RoundState {
    /// Tag of the live variant.
    #[must_use]
    pub fn phase(&self) -> Phase {
        match self {
            RoundState::Idle => Phase::Idle,
            RoundState::AmountEntry { .. } => Phase::AmountEntry,
            RoundState::Ready { .. } => Phase::Ready,
            RoundState::Playing(_) => Phase::Playing,
            RoundState::Lost { .. } => Phase::Lost,
            RoundState::Won { .. } => Phase::Won,
        }
    }

    /// The stake on display, if any.
    ///
    /// For `Lost` this is the amount that was lost.
    #[must_use]
    pub fn amount(&self) -> Option<u64> {
        match self {
            RoundState::Idle | RoundState::AmountEntry { .. } => None,
            RoundState::Ready { amount, .. } | RoundState::Won { amount, .. } => Some(*amount),
            RoundState::Playing(playing) => Some(playing.amount),
            RoundState::Lost { last_amount, .. } => Some(*last_amount),
        }
    }

    /// The round's draw, if cards have been dealt.
    #[must_use]
    pub fn cards(&self) -> Option<&Draw> {
        match self {
            RoundState::Idle | RoundState::AmountEntry { .. } => None,
            RoundState::Ready { cards, .. }
            | RoundState::Lost { cards, .. }
            | RoundState::Won { cards, .. } => Some(cards),
            RoundState::Playing(playing) => Some(&playing.cards),
        }
    }

    /// Number of face-up cards.
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        match self {
            RoundState::Idle | RoundState::AmountEntry { .. } | RoundState::Ready { .. } => 0,
            RoundState::Playing(playing) => playing.revealed_count,
            RoundState::Lost { revealed_count, .. } => *revealed_count,
            RoundState::Won { .. } => HAND_SIZE,
        }
    }

    /// Face-up cards in draw order.
    #[must_use]
    pub fn revealed_cards(&self) -> &[Card] {
        match self.cards() {
            Some(draw) => &draw.cards()[..self.revealed_count().min(HAND_SIZE)],
            None => &[],
        }
    }

    /// Digits typed so far, while entering an amount.
    #[must_use]
    pub fn raw_amount(&self) -> Option<&str> {
        match self {
            RoundState::AmountEntry { raw } => Some(raw),
            _ => None,
        }
    }

    /// The in-progress round, if playing.
    #[must_use]
    pub fn as_playing(&self) -> Option<&Playing> {
        match self {
            RoundState::Playing(playing) => Some(playing),
            _ => None,
        }
    }

    /// True for `Lost` and `Won`.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, RoundState::Lost { .. } | RoundState::Won { .. })
    }

    /// How the round ended, or `None` if it has not.
    #[must_use]
    pub fn outcome(&self) -> Option<RoundOutcome> {
        match self {
            RoundState::Won { amount, .. } => Some(RoundOutcome::Won { amount: *amount }),
            RoundState::Lost { last_amount, .. } => Some(RoundOutcome::Lost {
                last_amount: *last_amount,
            }),
            _ => None,
        }
    }
}
