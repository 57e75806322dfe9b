//! Session loop: one click in, one state update out.
//!
//! A round has two phases. While playing, each click goes through
//! [`register_click`]. When a click ends the round, settlement (high score,
//! notification, reset) happens inside the same `click` call, which holds
//! `&mut self` throughout, so no other click can be handled mid-reset.

use im::Vector;
use tracing::{debug, info};

use super::view::GameView;
use crate::cards::{CardCatalog, CardId};
use crate::core::{GameConfig, GameRng, GameState};
use crate::rules::{register_click, ClickOutcome, RoundSummary};

/// A running game bound to a display layer.
pub struct Session<V: GameView> {
    state: GameState,
    rng: GameRng,
    view: V,
    config: GameConfig,
    /// Finished rounds, oldest first, capped at `config.history_limit`.
    history: Vector<RoundSummary>,
}

impl<V: GameView> Session<V> {
    /// Start a session and render the initial board.
    pub fn new(catalog: &CardCatalog, config: GameConfig, view: V) -> Self {
        Self::with_state(GameState::new(catalog), config, view)
    }

    /// Start a session from an existing state.
    pub fn with_state(state: GameState, config: GameConfig, view: V) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        debug!(seed = rng.seed(), cards = state.card_count(), "session started");

        let mut session = Self {
            state,
            rng,
            view,
            config,
            history: Vector::new(),
        };
        session.view.render(&session.state);
        session
    }

    /// Handle a click on card `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not on the board.
    pub fn click(&mut self, id: CardId) -> ClickOutcome {
        let (state, outcome) = register_click(self.state.clone(), id, &mut self.rng);
        self.state = state;

        match &outcome {
            ClickOutcome::Scored { score, .. } => {
                debug!(card = id.raw(), score, "card scored");
            }
            ClickOutcome::RoundOver(summary) => {
                info!(
                    round = summary.round,
                    outcome = %summary.outcome,
                    score = summary.score,
                    highscore = summary.highscore,
                    "round over"
                );
                self.remember(*summary);
                self.view.round_over(summary);
            }
        }

        self.view.render(&self.state);
        outcome
    }

    fn remember(&mut self, summary: RoundSummary) {
        if self.config.history_limit == 0 {
            return;
        }
        self.history.push_back(summary);
        while self.history.len() > self.config.history_limit {
            self.history.pop_front();
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Finished rounds still in the history, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<RoundSummary> {
        &self.history
    }

    /// Highest-scoring round in the history (earliest on ties).
    #[must_use]
    pub fn best_round(&self) -> Option<&RoundSummary> {
        self.history
            .iter()
            .fold(None, |best: Option<&RoundSummary>, r| match best {
                Some(b) if b.score >= r.score => Some(b),
                _ => Some(r),
            })
    }

    /// Seed the shuffle RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// The display layer.
    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Tear down the session and return the display layer.
    pub fn into_view(self) -> V {
        self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardDefinition;
    use crate::rules::RoundOutcome;
    use crate::session::NullView;

    #[derive(Default)]
    struct CountingView {
        renders: usize,
        rounds: Vec<RoundSummary>,
    }

    impl GameView for CountingView {
        fn render(&mut self, _state: &GameState) {
            self.renders += 1;
        }

        fn round_over(&mut self, summary: &RoundSummary) {
            self.rounds.push(*summary);
        }
    }

    fn catalog(n: u32) -> CardCatalog {
        CardCatalog::new(
            (1..=n)
                .map(|i| CardDefinition::new(CardId::new(i), format!("Card {i}"), format!("{i}.png")))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_initial_render() {
        let session = Session::new(&catalog(3), GameConfig::new().with_seed(1), CountingView::default());
        assert_eq!(session.view().renders, 1);
        assert_eq!(session.seed(), 1);
    }

    #[test]
    fn test_render_after_each_click() {
        let mut session = Session::new(&catalog(3), GameConfig::new().with_seed(1), CountingView::default());

        session.click(CardId::new(1));
        session.click(CardId::new(2));

        assert_eq!(session.view().renders, 3);
        assert!(session.view().rounds.is_empty());
    }

    #[test]
    fn test_round_over_notifies_view() {
        let mut session = Session::new(&catalog(3), GameConfig::new().with_seed(1), CountingView::default());

        session.click(CardId::new(2));
        let outcome = session.click(CardId::new(2));

        assert!(matches!(outcome, ClickOutcome::RoundOver(_)));
        let view = session.into_view();
        assert_eq!(view.rounds.len(), 1);
        assert_eq!(view.rounds[0].outcome, RoundOutcome::Loss);
        assert_eq!(view.rounds[0].score, 1);
    }

    #[test]
    fn test_history_is_bounded() {
        let config = GameConfig::new().with_seed(1).with_history_limit(2);
        let mut session = Session::new(&catalog(3), config, NullView);

        for _ in 0..3 {
            session.click(CardId::new(1));
            session.click(CardId::new(1));
        }

        assert_eq!(session.history().len(), 2);
        let rounds: Vec<_> = session.history().iter().map(|s| s.round).collect();
        assert_eq!(rounds, vec![2, 3]);
    }

    #[test]
    fn test_history_disabled() {
        let config = GameConfig::new().with_seed(1).with_history_limit(0);
        let mut session = Session::new(&catalog(2), config, NullView);

        session.click(CardId::new(1));
        session.click(CardId::new(1));

        assert!(session.history().is_empty());
        assert!(session.best_round().is_none());
    }

    #[test]
    fn test_best_round() {
        let mut session = Session::new(&catalog(3), GameConfig::new().with_seed(4), NullView);

        // Round 1: score 2, then repeat.
        session.click(CardId::new(1));
        session.click(CardId::new(2));
        session.click(CardId::new(2));

        // Round 2: score 1, then repeat.
        session.click(CardId::new(3));
        session.click(CardId::new(3));

        let best = session.best_round().unwrap();
        assert_eq!(best.round, 1);
        assert_eq!(best.score, 2);
        assert_eq!(session.state().highscore(), 2);
    }

    #[test]
    fn test_with_state_keeps_highscore() {
        let state = GameState::new(&catalog(2)).with_highscore(7);
        let session = Session::with_state(state, GameConfig::new().with_seed(1), NullView);
        assert_eq!(session.state().highscore(), 7);
    }

    #[test]
    #[should_panic(expected = "unknown card")]
    fn test_unknown_click_panics() {
        let mut session = Session::new(&catalog(2), GameConfig::new().with_seed(1), NullView);
        session.click(CardId::new(9));
    }
}
