//! Store configuration and game constants.
//!
//! The rules themselves are fixed (one standard deck, five-card draws).
//! What a host can tune is how the store behaves around them:
//! - `celebration_delay`: how long the celebration signal stays asserted
//! - `seed`: fixed seed for reproducible sessions
//! - `record_history`: whether accepted intents are kept

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// Number of cards drawn for a round.
pub const HAND_SIZE: usize = 5;

/// How long the celebration signal stays up after a correct guess.
pub const DEFAULT_CELEBRATION_DELAY: Duration = Duration::from_millis(1200);

/// Configuration for a `HiLoStore`.
///
/// ## Example
///
/// ```
/// use std::time::Duration;
/// use hi_lo::core::StoreConfig;
///
/// let config = StoreConfig::new()
///     .with_seed(7)
///     .with_celebration_delay(Duration::from_millis(500));
///
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Delay before the celebration signal is cleared automatically.
    pub celebration_delay: Duration,

    /// Fixed RNG seed. `None` seeds from system entropy.
    pub seed: Option<u64>,

    /// Keep a history of accepted intents.
    pub record_history: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            celebration_delay: DEFAULT_CELEBRATION_DELAY,
            seed: None,
            record_history: true,
        }
    }
}

impl StoreConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed seed for all draws.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the celebration auto-clear delay.
    #[must_use]
    pub fn with_celebration_delay(mut self, delay: Duration) -> Self {
        self.celebration_delay = delay;
        self
    }

    /// Stop recording intent history.
    #[must_use]
    pub fn without_history(mut self) -> Self {
        self.record_history = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();

        assert_eq!(config.celebration_delay, Duration::from_millis(1200));
        assert_eq!(config.seed, None);
        assert!(config.record_history);
    }

    #[test]
    fn test_builder() {
        let config = StoreConfig::new()
            .with_seed(99)
            .with_celebration_delay(Duration::from_secs(2))
            .without_history();

        assert_eq!(config.seed, Some(99));
        assert_eq!(config.celebration_delay, Duration::from_secs(2));
        assert!(!config.record_history);
    }

    #[test]
    fn test_config_serde() {
        let config = StoreConfig::new().with_seed(3);

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: StoreConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, deserialized);
    }
}
