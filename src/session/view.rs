//! Display layer trait.

use crate::core::GameState;
use crate::rules::RoundSummary;

/// A passive display layer.
///
/// The session calls `render` after every state change (including the
/// initial one) and `round_over` once per finished round, before the
/// render of the reset board.
pub trait GameView {
    /// Draw the board, score and high score.
    fn render(&mut self, state: &GameState);

    /// Announce a finished round.
    fn round_over(&mut self, summary: &RoundSummary);
}

/// View that ignores everything. Useful for headless play.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullView;

impl GameView for NullView {
    fn render(&mut self, _state: &GameState) {}

    fn round_over(&mut self, _summary: &RoundSummary) {}
}
