//! # hi-lo
//!
//! A single-player Hi-Lo card round engine.
//!
//! The player stakes an amount, five cards are drawn, and the player
//! predicts whether each next card ranks higher or lower than the last one
//! revealed. A correct guess doubles the stake, a wrong guess loses it, a
//! tie reveals the card and changes nothing.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: draws come from a caller-seeded RNG. The same seed
//!    and the same intents replay the same session.
//!
//! 2. **Total state machine**: every intent is valid in every state; those
//!    that do not apply are no-ops, so input layers never pre-validate.
//!
//! 3. **Presentation outside**: rendering, animation and sound live outside
//!    the crate. They observe `RoundState` snapshots and consume one-shot
//!    effects.
//!
//! ## Modules
//!
//! - `core`: RNG, store configuration, clock
//! - `cards`: suits, ranks, cards, five-card draws
//! - `rules`: rank comparison and guess scoring
//! - `round`: round state, intents, transition functions
//! - `store`: the live state owner, timer, effect outbox, subscribers

pub mod core;
pub mod cards;
pub mod rules;
pub mod round;
pub mod store;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    GameRng, StoreConfig, Clock, SystemClock, ManualClock,
    DECK_SIZE, HAND_SIZE, DEFAULT_CELEBRATION_DELAY,
};

pub use crate::cards::{Card, Rank, Suit, Draw, DrawError, draw_five_cards, full_deck};

pub use crate::rules::{compare, is_correct, CompareResult, Guess};

pub use crate::round::{
    Intent, IntentParseError, IntentRecord,
    Phase, Playing, RoundOutcome, RoundState,
};

pub use crate::store::{
    HiLoStore, Effect, EffectBatch, EffectOutbox,
    SubscriberId, TimerHandle, TimerId,
};
