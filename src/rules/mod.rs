//! Round rules.
//!
//! Transitions are plain functions from state to state:
//! - `register_click`: score a fresh card or end the round on a repeat
//! - `end_round`: settle the high score and reset for the next round

pub mod engine;

pub use engine::{end_round, register_click, ClickOutcome, RoundOutcome, RoundSummary};
