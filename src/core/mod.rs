//! Core building blocks: RNG, configuration, clock.
//!
//! Nothing here knows about cards or rounds. The store is configured via
//! `StoreConfig` and reads time through `Clock`.

pub mod rng;
pub mod config;
pub mod clock;

pub use rng::GameRng;
pub use config::{StoreConfig, DECK_SIZE, HAND_SIZE, DEFAULT_CELEBRATION_DELAY};
pub use clock::{Clock, SystemClock, ManualClock};
