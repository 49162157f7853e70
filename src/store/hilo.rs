//! `HiLoStore`: owner of the single live round state.

use im::Vector;
use log::{debug, info, trace};

use super::effects::{Effect, EffectBatch, EffectOutbox};
use super::observer::{SubscriberId, Subscribers};
use super::timer::CelebrationTimer;
use crate::core::{Clock, GameRng, StoreConfig, SystemClock};
use crate::round::{machine, Intent, IntentRecord, RoundState};
use crate::rules::Guess;

/// Owns the live round state and everything scheduled around it.
///
/// Every accepted intent replaces the state wholesale and notifies
/// subscribers. Intents that do not apply to the current state are
/// ignored: the state, history and subscribers are left untouched.
///
/// ## Example
///
/// ```
/// use hi_lo::core::StoreConfig;
/// use hi_lo::round::Phase;
/// use hi_lo::store::HiLoStore;
///
/// let mut store = HiLoStore::new(StoreConfig::new().with_seed(42));
///
/// store.digit(5);
/// store.digit(0);
/// store.enter();
/// assert_eq!(store.current().phase(), Phase::Ready);
/// assert_eq!(store.current().amount(), Some(50));
///
/// store.start();
/// assert_eq!(store.current().revealed_count(), 1);
/// ```
pub struct HiLoStore<C: Clock = SystemClock> {
    config: StoreConfig,
    current: RoundState,
    seed: u64,
    deck_rng: GameRng,
    clock: C,
    timer: CelebrationTimer,
    outbox: EffectOutbox,
    subscribers: Subscribers,
    history: Vector<IntentRecord>,
    next_sequence: u64,
    input_locked: bool,
}

impl HiLoStore<SystemClock> {
    /// Create a store reading time from the wall clock.
    #[must_use]
    pub fn new(config: StoreConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> HiLoStore<C> {
    /// Create a store with an explicit clock.
    #[must_use]
    pub fn with_clock(config: StoreConfig, clock: C) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let seed = rng.seed();
        debug!("hi-lo store created with seed {seed}");

        Self {
            config,
            current: RoundState::Idle,
            seed,
            deck_rng: rng.for_context("deck"),
            clock,
            timer: CelebrationTimer::new(),
            outbox: EffectOutbox::new(),
            subscribers: Subscribers::new(),
            history: Vector::new(),
            next_sequence: 0,
            input_locked: false,
        }
    }

    /// The live state.
    #[must_use]
    pub fn current(&self) -> &RoundState {
        &self.current
    }

    #[must_use]
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Seed behind every draw of this store. Replaying the same intents on
    /// a store with this seed reproduces the session.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    // === Intents ===

    /// Apply a player intent and return the resulting state.
    ///
    /// # Panics
    ///
    /// Panics on `Intent::Digit` outside 0..=9.
    pub fn apply(&mut self, intent: Intent) -> &RoundState {
        if self.input_locked {
            trace!("input locked, ignoring {intent}");
            return &self.current;
        }

        let next = machine::apply(&self.current, intent, &mut self.deck_rng);
        if next == self.current {
            trace!("{intent} ignored in {}", self.current.phase());
            return &self.current;
        }

        if self.config.record_history {
            self.history.push_back(IntentRecord::new(intent, self.next_sequence));
        }
        self.next_sequence += 1;

        let prev = std::mem::replace(&mut self.current, next);
        debug!("{intent}: {} -> {}", prev.phase(), self.current.phase());
        self.log_round_events(&prev);

        let effects = Effect::between(&prev, &self.current);
        self.update_timer(&effects);
        self.outbox.retain_live(&self.current);
        self.outbox.extend(effects);

        self.subscribers.notify(&self.current);
        &self.current
    }

    pub fn digit(&mut self, d: u8) -> &RoundState {
        self.apply(Intent::Digit(d))
    }

    pub fn backspace(&mut self) -> &RoundState {
        self.apply(Intent::Backspace)
    }

    pub fn enter(&mut self) -> &RoundState {
        self.apply(Intent::Enter)
    }

    pub fn start(&mut self) -> &RoundState {
        self.apply(Intent::Start)
    }

    pub fn guess(&mut self, guess: Guess) -> &RoundState {
        self.apply(Intent::Guess(guess))
    }

    /// Block or unblock intents, e.g. while an animation plays.
    ///
    /// Acknowledgements and timers keep working while locked.
    pub fn set_input_locked(&mut self, locked: bool) {
        self.input_locked = locked;
    }

    #[must_use]
    pub fn is_input_locked(&self) -> bool {
        self.input_locked
    }

    // === One-shot signals ===

    /// Clear the celebration signal and cancel its auto-clear timer.
    pub fn acknowledge_celebration(&mut self) -> &RoundState {
        if let Some(handle) = self.timer.cancel() {
            debug!("celebration acknowledged, cancelled {}", handle.id);
        }
        self.outbox.discard(|e| matches!(e, Effect::Celebrate { .. }));
        let next = machine::acknowledge_celebration(&self.current);
        self.replace(next);
        &self.current
    }

    /// Clear the coin sound signal.
    pub fn acknowledge_coin_sound(&mut self) -> &RoundState {
        self.outbox.discard(|e| *e == Effect::CoinSound);
        let next = machine::acknowledge_coin_sound(&self.current);
        self.replace(next);
        &self.current
    }

    /// Clear the win sound signal.
    pub fn acknowledge_win_sound(&mut self) -> &RoundState {
        self.outbox.discard(|e| *e == Effect::WinSound);
        let next = machine::acknowledge_win_sound(&self.current);
        self.replace(next);
        &self.current
    }

    /// Take the effects the current state still asks for.
    ///
    /// Sound effects are consumed: their flags are cleared in the state.
    /// The celebration flag stays up until its timer fires or it is
    /// acknowledged.
    pub fn drain_effects(&mut self) -> EffectBatch {
        let effects = self.outbox.drain_live(&self.current);
        if effects.is_empty() {
            return effects;
        }
        debug!("draining {} effect(s)", effects.len());

        let mut next = self.current.clone();
        if effects.contains(&Effect::CoinSound) {
            next = machine::acknowledge_coin_sound(&next);
        }
        if effects.contains(&Effect::WinSound) {
            next = machine::acknowledge_win_sound(&next);
        }
        self.replace(next);

        effects
    }

    /// Effects queued but not yet drained.
    #[must_use]
    pub fn pending_effects(&self) -> &[Effect] {
        self.outbox.queued()
    }

    // === Timers ===

    /// Run timers whose deadline has passed.
    ///
    /// Returns true if the celebration timer fired.
    pub fn tick(&mut self) -> bool {
        let now = self.clock.now();
        match self.timer.fire_if_due(now) {
            Some(handle) => {
                debug!("{} fired, clearing celebration", handle.id);
                self.outbox.discard(|e| matches!(e, Effect::Celebrate { .. }));
                let next = machine::acknowledge_celebration(&self.current);
                self.replace(next);
                true
            }
            None => false,
        }
    }

    /// When the next timer is due, if one is outstanding.
    #[must_use]
    pub fn next_deadline(&self) -> Option<std::time::Instant> {
        self.timer.deadline()
    }

    // === Observers and history ===

    /// Register a callback run after every change to the live state.
    pub fn subscribe(&mut self, callback: impl FnMut(&RoundState) + 'static) -> SubscriberId {
        self.subscribers.subscribe(callback)
    }

    /// Returns true if the subscriber existed.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    /// Accepted intents, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<IntentRecord> {
        &self.history
    }

    // === Internals ===

    /// Swap in a new state, notifying subscribers if it differs.
    ///
    /// Queued effects the new state no longer asks for are dropped.
    fn replace(&mut self, next: RoundState) -> bool {
        if next == self.current {
            return false;
        }
        self.current = next;
        self.outbox.retain_live(&self.current);
        self.subscribers.notify(&self.current);
        true
    }

    fn update_timer(&mut self, effects: &EffectBatch) {
        let celebrating = effects.iter().any(|e| matches!(e, Effect::Celebrate { .. }));

        if celebrating {
            let (handle, replaced) = self.timer.schedule(self.clock.now(), self.config.celebration_delay);
            if let Some(old) = replaced {
                debug!("cancelled {} in favour of {}", old.id, handle.id);
            }
            debug!("{} scheduled in {:?}", handle.id, self.config.celebration_delay);
        } else if !self.current.as_playing().is_some_and(|p| p.pending_celebration) {
            if let Some(handle) = self.timer.cancel() {
                debug!("nothing left to celebrate in {}, cancelled {}", self.current.phase(), handle.id);
            }
        }
    }

    fn log_round_events(&self, prev: &RoundState) {
        match (prev, &self.current) {
            (RoundState::Ready { amount, cards }, RoundState::Playing(_)) => {
                info!("Hi-Lo round started, stake {amount}");
                for (index, card) in cards.iter().enumerate() {
                    info!("[{}] {card}", index + 1);
                }
            }
            (RoundState::Playing(_), RoundState::Won { amount, .. }) => {
                info!("Hi-Lo round won, amount {amount}");
            }
            (RoundState::Playing(_), RoundState::Lost { last_amount, revealed_count, .. }) => {
                info!("Hi-Lo round lost at card {revealed_count}, stake {last_amount}");
            }
            _ => {}
        }
    }
}

impl<C: Clock + std::fmt::Debug> std::fmt::Debug for HiLoStore<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HiLoStore")
            .field("current", &self.current)
            .field("seed", &self.seed)
            .field("clock", &self.clock)
            .field("timer", &self.timer)
            .field("outbox", &self.outbox)
            .field("subscribers", &self.subscribers)
            .field("history_len", &self.history.len())
            .field("input_locked", &self.input_locked)
            .finish()
    }
}
