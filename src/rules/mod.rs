//! Hi-Lo scoring rules.
//!
//! Stateless functions deciding how a revealed card relates to the one
//! before it and whether a guess was right. The round state machine calls
//! into these but never re-implements them.

pub mod hilo;

pub use hilo::{compare, is_correct, CompareResult, Guess};
