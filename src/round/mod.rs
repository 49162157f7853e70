//! The round state machine.
//!
//! - `state`: the tagged-union round state
//! - `intent`: the player inputs the machine accepts
//! - `machine`: pure transition functions from (state, intent) to state

pub mod intent;
pub mod machine;
pub mod state;

pub use intent::{Intent, IntentParseError, IntentRecord};
pub use state::{Phase, Playing, RoundOutcome, RoundState};
