//! The state store.
//!
//! `HiLoStore` owns the one live `RoundState` and is the only thing that
//! replaces it. Around that it keeps:
//! - the celebration auto-clear timer (`timer`)
//! - an outbox of one-shot effects for the boundary (`effects`)
//! - the subscriber list (`observer`)
//! - the history of accepted intents
//!
//! ## Example Usage
//!
//! ```
//! use std::time::Duration;
//! use hi_lo::core::{ManualClock, StoreConfig};
//! use hi_lo::store::HiLoStore;
//!
//! let clock = ManualClock::new();
//! let mut store = HiLoStore::with_clock(StoreConfig::new().with_seed(7), clock.clone());
//!
//! store.digit(1);
//! store.enter();
//! store.start();
//!
//! // Drive timers from the boundary loop.
//! clock.advance(Duration::from_millis(16));
//! store.tick();
//! for effect in store.drain_effects() {
//!     println!("play {effect}");
//! }
//! ```

mod effects;
mod hilo;
mod observer;
mod timer;

pub use effects::{Effect, EffectBatch, EffectOutbox};
pub use hilo::HiLoStore;
pub use observer::{SubscriberId, Subscribers};
pub use timer::{CelebrationTimer, TimerHandle, TimerId};
