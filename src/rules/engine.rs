//! Click handling and round settlement.
//!
//! Both transitions take the state by value and hand back the next state,
//! so a caller can keep any earlier state around for free (`im` sharing).
//!
//! The win check runs synchronously at the end of `register_click`: the click
//! that brings the score up to the card count ends the round as a win before
//! the function returns.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::{GameRng, GameState};

/// How a round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Every card was clicked exactly once.
    Win,
    /// A card was clicked twice.
    Loss,
}

impl RoundOutcome {
    /// Check if this is a win.
    #[must_use]
    pub fn is_win(self) -> bool {
        matches!(self, RoundOutcome::Win)
    }
}

impl std::fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundOutcome::Win => write!(f, "win"),
            RoundOutcome::Loss => write!(f, "loss"),
        }
    }
}

/// What the display layer is told when a round ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    /// Round that just ended.
    pub round: u32,

    /// Win or loss.
    pub outcome: RoundOutcome,

    /// Score at the moment the round ended.
    pub score: u32,

    /// High score after this round was settled.
    pub highscore: u32,
}

/// Result of a single click.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClickOutcome {
    /// Fresh card: score went up and the board was reshuffled.
    Scored {
        /// The card that was clicked.
        card: CardId,
        /// Score after the click.
        score: u32,
    },
    /// The click ended the round; the returned state is already reset.
    RoundOver(RoundSummary),
}

impl ClickOutcome {
    /// The round summary, if the click ended the round.
    #[must_use]
    pub fn summary(&self) -> Option<&RoundSummary> {
        match self {
            ClickOutcome::RoundOver(summary) => Some(summary),
            ClickOutcome::Scored { .. } => None,
        }
    }
}

/// Register a click on card `id`.
///
/// - Unclicked card: count it, add one to the score, reshuffle the whole
///   board. If that was the last unclicked card the round ends as a win.
/// - Already clicked card: the round ends as a loss.
///
/// # Panics
///
/// Panics if `id` is not on the board. The display layer renders from the
/// same state, so an unknown id means the two are out of sync.
pub fn register_click(mut state: GameState, id: CardId, rng: &mut GameRng) -> (GameState, ClickOutcome) {
    let Some(index) = state.position(id) else {
        panic!("click on unknown card {id}");
    };

    if state.cards()[index].is_clicked() {
        let (state, summary) = end_round(state, RoundOutcome::Loss);
        return (state, ClickOutcome::RoundOver(summary));
    }

    state.mark_clicked(index);
    state.shuffle_cards(rng);

    if state.is_complete() {
        let (state, summary) = end_round(state, RoundOutcome::Win);
        return (state, ClickOutcome::RoundOver(summary));
    }

    let score = state.score();
    (state, ClickOutcome::Scored { card: id, score })
}

/// Settle the current round and reset for the next one.
///
/// Raises the high score if the round beat it, clears the score and every
/// click count, and advances the round number. Card order is kept.
pub fn end_round(mut state: GameState, outcome: RoundOutcome) -> (GameState, RoundSummary) {
    state.record_highscore();

    let summary = RoundSummary {
        round: state.round(),
        outcome,
        score: state.score(),
        highscore: state.highscore(),
    };

    state.reset_round();
    state.advance_round();

    (state, summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardCatalog, CardDefinition};

    fn four_cards() -> GameState {
        let catalog = CardCatalog::new(
            (1..=4)
                .map(|i| CardDefinition::new(CardId::new(i), format!("Card {i}"), format!("{i}.png")))
                .collect(),
        )
        .unwrap();
        GameState::new(&catalog)
    }

    #[test]
    fn test_first_click_scores() {
        let mut rng = GameRng::new(1);
        let (state, outcome) = register_click(four_cards(), CardId::new(2), &mut rng);

        assert_eq!(outcome, ClickOutcome::Scored { card: CardId::new(2), score: 1 });
        assert_eq!(state.score(), 1);
        assert_eq!(state.card(CardId::new(2)).unwrap().count(), 1);
        assert!(outcome.summary().is_none());
    }

    #[test]
    fn test_repeat_click_loses() {
        let mut rng = GameRng::new(1);
        let (state, _) = register_click(four_cards(), CardId::new(1), &mut rng);
        let (state, outcome) = register_click(state, CardId::new(1), &mut rng);

        let summary = outcome.summary().copied().unwrap();
        assert_eq!(summary.outcome, RoundOutcome::Loss);
        assert_eq!(summary.score, 1);
        assert_eq!(summary.highscore, 1);
        assert_eq!(summary.round, 1);

        assert_eq!(state.score(), 0);
        assert_eq!(state.highscore(), 1);
        assert_eq!(state.round(), 2);
    }

    #[test]
    fn test_last_card_wins() {
        let mut rng = GameRng::new(1);
        let mut state = four_cards();
        let mut last = None;

        for id in 1..=4 {
            let (next, outcome) = register_click(state, CardId::new(id), &mut rng);
            state = next;
            last = Some(outcome);
        }

        let summary = last.and_then(|o| o.summary().copied()).unwrap();
        assert!(summary.outcome.is_win());
        assert_eq!(summary.score, 4);
        assert_eq!(state.highscore(), 4);
        assert_eq!(state.clicked_count(), 0);
    }

    #[test]
    fn test_end_round_keeps_order() {
        let mut rng = GameRng::new(5);
        let (state, _) = register_click(four_cards(), CardId::new(3), &mut rng);
        let order: Vec<_> = state.card_ids().collect();

        let (state, summary) = end_round(state, RoundOutcome::Loss);

        assert_eq!(summary.score, 1);
        assert_eq!(state.card_ids().collect::<Vec<_>>(), order);
    }

    #[test]
    fn test_end_round_keeps_higher_highscore() {
        let state = four_cards().with_highscore(5);
        let (state, summary) = end_round(state, RoundOutcome::Loss);

        assert_eq!(summary.highscore, 5);
        assert_eq!(state.highscore(), 5);
    }

    #[test]
    fn test_previous_state_untouched() {
        let mut rng = GameRng::new(1);
        let before = four_cards();
        let (after, _) = register_click(before.clone(), CardId::new(1), &mut rng);

        assert_eq!(before.score(), 0);
        assert_eq!(after.score(), 1);
    }

    #[test]
    #[should_panic(expected = "unknown card")]
    fn test_unknown_card_panics() {
        let mut rng = GameRng::new(1);
        let _ = register_click(four_cards(), CardId::new(99), &mut rng);
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(RoundOutcome::Win.to_string(), "win");
        assert_eq!(RoundOutcome::Loss.to_string(), "loss");
    }
}
