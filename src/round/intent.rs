//! Player intents: the only inputs the round accepts.
//!
//! Each intent maps 1:1 to a state machine operation. Input layers turn
//! raw events into intents with [`Intent::from_key`] or by parsing text.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rules::Guess;

/// A discrete player intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// Type a digit. Must be 0..=9.
    Digit(u8),
    Backspace,
    Enter,
    Start,
    Guess(Guess),
}

/// Errors parsing an intent from text.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IntentParseError {
    #[error("empty intent")]
    Empty,
    #[error("unknown intent: {0}")]
    Unknown(String),
    #[error("digit {0} out of range (expected 0-9)")]
    DigitOutOfRange(u32),
}

impl Intent {
    /// Map a key press to an intent.
    ///
    /// Digits type the amount, Enter / Backspace edit it, `s` starts the
    /// round, `h` / `l` guess higher / lower. Other keys map to nothing.
    #[must_use]
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            '0'..='9' => key.to_digit(10).map(|d| Intent::Digit(d as u8)),
            '\n' | '\r' => Some(Intent::Enter),
            '\u{8}' | '\u{7f}' => Some(Intent::Backspace),
            's' | 'S' => Some(Intent::Start),
            'h' | 'H' => Some(Intent::Guess(Guess::Higher)),
            'l' | 'L' => Some(Intent::Guess(Guess::Lower)),
            _ => None,
        }
    }
}

impl std::str::FromStr for Intent {
    type Err = IntentParseError;

    /// Parse "enter", "backspace", "start", "higher"/"h", "lower"/"l",
    /// a single digit, or "digit N".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim().to_ascii_lowercase();
        if text.is_empty() {
            return Err(IntentParseError::Empty);
        }

        let digit = text.strip_prefix("digit").map(str::trim).unwrap_or(text.as_str());
        if !digit.is_empty() && digit.chars().all(|c| c.is_ascii_digit()) {
            let value: u32 = digit
                .parse()
                .map_err(|_| IntentParseError::DigitOutOfRange(u32::MAX))?;
            return match value {
                0..=9 => Ok(Intent::Digit(value as u8)),
                _ => Err(IntentParseError::DigitOutOfRange(value)),
            };
        }

        match text.as_str() {
            "enter" => Ok(Intent::Enter),
            "backspace" | "back" => Ok(Intent::Backspace),
            "start" | "s" => Ok(Intent::Start),
            "higher" | "h" => Ok(Intent::Guess(Guess::Higher)),
            "lower" | "l" => Ok(Intent::Guess(Guess::Lower)),
            _ => Err(IntentParseError::Unknown(s.trim().to_string())),
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intent::Digit(d) => write!(f, "digit {d}"),
            Intent::Backspace => write!(f, "backspace"),
            Intent::Enter => write!(f, "enter"),
            Intent::Start => write!(f, "start"),
            Intent::Guess(guess) => write!(f, "{guess}"),
        }
    }
}

/// An accepted intent with its position in the session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentRecord {
    pub intent: Intent,

    /// Sequence number, starting at 0.
    pub sequence: u64,
}

impl IntentRecord {
    #[must_use]
    pub fn new(intent: Intent, sequence: u64) -> Self {
        Self { intent, sequence }
    }
}
