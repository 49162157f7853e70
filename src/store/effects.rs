//! One-shot effects for the presentation layer.
//!
//! The round state carries `pending_*` flags; the store mirrors each newly
//! raised flag as an `Effect` in an outbox. The boundary drains the outbox
//! once, plays what it finds, and the store clears the matching flags.
//!
//! Effects are only kept while the state that raised them is still live.
//! The store prunes the outbox on every state change, so typing a new
//! amount mid-celebration drops the stale coin sound before the next round
//! can raise its own.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::round::RoundState;

/// A side effect requested by the round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effect {
    /// Start the celebration overlay for the given tick.
    Celebrate { tick: u32 },
    /// Play the coin sound after a correct guess.
    CoinSound,
    /// Play the win sound after the final correct guess.
    WinSound,
}

/// Inline capacity covers one guess's worth of effects plus a straggler.
pub type EffectBatch = SmallVec<[Effect; 4]>;

impl Effect {
    /// Effects raised by moving from `prev` to `next`.
    #[must_use]
    pub fn between(prev: &RoundState, next: &RoundState) -> EffectBatch {
        let mut effects = EffectBatch::new();

        match next {
            RoundState::Playing(playing) => {
                let prev_tick = prev.as_playing().map(|p| p.celebration_tick);
                if playing.pending_celebration && prev_tick != Some(playing.celebration_tick) {
                    effects.push(Effect::Celebrate {
                        tick: playing.celebration_tick,
                    });
                    if playing.pending_coin_sound {
                        effects.push(Effect::CoinSound);
                    }
                }
            }
            RoundState::Won {
                pending_win_sound: true,
                ..
            } if !matches!(prev, RoundState::Won { .. }) => {
                effects.push(Effect::WinSound);
            }
            _ => {}
        }

        effects
    }

    /// Whether `state` still asks for this effect.
    #[must_use]
    pub fn is_live(&self, state: &RoundState) -> bool {
        match (self, state) {
            (Effect::Celebrate { tick }, RoundState::Playing(playing)) => {
                playing.pending_celebration && playing.celebration_tick == *tick
            }
            (Effect::CoinSound, RoundState::Playing(playing)) => playing.pending_coin_sound,
            (
                Effect::WinSound,
                RoundState::Won {
                    pending_win_sound, ..
                },
            ) => *pending_win_sound,
            _ => false,
        }
    }
}

impl std::fmt::Display for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Effect::Celebrate { tick } => write!(f, "celebrate({tick})"),
            Effect::CoinSound => write!(f, "coin-sound"),
            Effect::WinSound => write!(f, "win-sound"),
        }
    }
}

/// Queue of effects waiting for the boundary.
#[derive(Clone, Debug, Default)]
pub struct EffectOutbox {
    queue: EffectBatch,
}

impl EffectOutbox {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue effects.
    pub fn extend(&mut self, effects: impl IntoIterator<Item = Effect>) {
        self.queue.extend(effects);
    }

    /// Take every queued effect that `state` still asks for.
    ///
    /// Stale effects are discarded. The outbox is empty afterwards.
    pub fn drain_live(&mut self, state: &RoundState) -> EffectBatch {
        self.queue.drain(..).filter(|effect| effect.is_live(state)).collect()
    }

    /// Drop queued effects matching `predicate`.
    pub fn discard(&mut self, predicate: impl Fn(&Effect) -> bool) {
        self.queue.retain(|effect| !predicate(&*effect));
    }

    /// Drop queued effects that `state` no longer asks for.
    pub fn retain_live(&mut self, state: &RoundState) {
        self.queue.retain(|effect| effect.is_live(state));
    }

    /// Queued effects, oldest first.
    #[must_use]
    pub fn queued(&self) -> &[Effect] {
        &self.queue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::draw_five_cards;
    use crate::core::GameRng;
    use crate::round::Playing;

    fn celebrating(tick: u32) -> RoundState {
        RoundState::Playing(Playing {
            amount: 200,
            revealed_count: 2,
            pending_celebration: true,
            pending_coin_sound: true,
            celebration_tick: tick,
            ..Playing::new(100, draw_five_cards(&mut GameRng::new(5)))
        })
    }

    #[test]
    fn test_effects_for_correct_guess() {
        let cards = draw_five_cards(&mut GameRng::new(5));
        let prev = RoundState::Playing(Playing::new(100, cards));

        let effects = Effect::between(&prev, &celebrating(1));
        assert_eq!(effects.as_slice(), &[Effect::Celebrate { tick: 1 }, Effect::CoinSound]);
    }

    #[test]
    fn test_no_effects_when_tick_unchanged() {
        let effects = Effect::between(&celebrating(1), &celebrating(1));
        assert!(effects.is_empty());
    }

    #[test]
    fn test_win_sound() {
        let cards = draw_five_cards(&mut GameRng::new(5));
        let won = RoundState::Won {
            amount: 1600,
            cards,
            pending_win_sound: true,
        };

        let effects = Effect::between(&celebrating(3), &won);
        assert_eq!(effects.as_slice(), &[Effect::WinSound]);
        assert!(Effect::WinSound.is_live(&won));
        assert!(!Effect::CoinSound.is_live(&won));
    }

    #[test]
    fn test_drain_discards_stale() {
        let mut outbox = EffectOutbox::new();
        outbox.extend([Effect::Celebrate { tick: 1 }, Effect::CoinSound]);

        let drained = outbox.drain_live(&RoundState::Idle);
        assert!(drained.is_empty());
        assert!(outbox.queued().is_empty());
    }

    #[test]
    fn test_drain_keeps_live() {
        let mut outbox = EffectOutbox::new();
        outbox.extend([Effect::Celebrate { tick: 1 }, Effect::CoinSound, Effect::Celebrate { tick: 2 }]);

        let drained = outbox.drain_live(&celebrating(2));
        assert_eq!(drained.as_slice(), &[Effect::CoinSound, Effect::Celebrate { tick: 2 }]);
    }

    #[test]
    fn test_retain_live_prunes_in_place() {
        let mut outbox = EffectOutbox::new();
        outbox.extend([Effect::Celebrate { tick: 1 }, Effect::CoinSound, Effect::WinSound]);

        outbox.retain_live(&celebrating(1));
        assert_eq!(outbox.queued(), &[Effect::Celebrate { tick: 1 }, Effect::CoinSound]);

        outbox.retain_live(&RoundState::Idle);
        assert!(outbox.queued().is_empty());
    }

    #[test]
    fn test_discard() {
        let mut outbox = EffectOutbox::new();
        outbox.extend([Effect::CoinSound, Effect::Celebrate { tick: 1 }, Effect::CoinSound]);

        outbox.discard(|e| *e == Effect::CoinSound);
        assert_eq!(outbox.queued(), &[Effect::Celebrate { tick: 1 }]);
    }
}
