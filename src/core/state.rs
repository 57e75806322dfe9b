//! Game state: the board, the running score and the high score.
//!
//! ## Round lifecycle
//!
//! - A state is created from a [`CardCatalog`] with every count at zero,
//!   score 0 and high score 0.
//! - Clicks mutate card counts, the score and the card order.
//! - At the end of a round the high score absorbs the score, then the score
//!   and all counts return to zero. Card order is left alone.
//!
//! Uses `im` persistent data structures, so cloning a state is O(1) and
//! the rules can take and return states by value.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::rng::GameRng;
use crate::cards::{Card, CardCatalog, CardId};

/// Reasons a deserialized state is rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("state has no cards")]
    NoCards,

    #[error("duplicate card id {0}")]
    DuplicateId(CardId),

    #[error("{0} counted more than once this round")]
    RepeatedCount(CardId),

    #[error("score {score} does not match {clicked} clicked cards")]
    ScoreMismatch { score: u32, clicked: usize },

    #[error("round number must start at 1")]
    ZeroRound,
}

/// Wire form of [`GameState`], checked before it becomes a real state.
#[derive(Deserialize)]
struct RawGameState {
    cards: Vector<Card>,
    score: u32,
    highscore: u32,
    round: u32,
}

impl TryFrom<RawGameState> for GameState {
    type Error = StateError;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        if raw.cards.is_empty() {
            return Err(StateError::NoCards);
        }
        if raw.round == 0 {
            return Err(StateError::ZeroRound);
        }

        let mut seen = FxHashSet::default();
        for card in &raw.cards {
            if !seen.insert(card.id) {
                return Err(StateError::DuplicateId(card.id));
            }
            if card.count() > 1 {
                return Err(StateError::RepeatedCount(card.id));
            }
        }

        // Also bounds the score by the card count.
        let clicked = raw.cards.iter().filter(|c| c.is_clicked()).count();
        if raw.score as usize != clicked {
            return Err(StateError::ScoreMismatch { score: raw.score, clicked });
        }

        Ok(Self {
            cards: raw.cards,
            score: raw.score,
            highscore: raw.highscore,
            round: raw.round,
        })
    }
}

/// Complete state of a game session.
///
/// Deserializing checks the round invariants: unique ids, counts of 0 or 1,
/// and a score equal to the number of clicked cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    /// Cards in display order.
    cards: Vector<Card>,

    /// Distinct cards clicked this round.
    score: u32,

    /// Best score at the end of any finished round.
    highscore: u32,

    /// Current round number (starts at 1).
    round: u32,
}

impl GameState {
    /// Create a fresh state seeded from the catalog, in catalog order.
    #[must_use]
    pub fn new(catalog: &CardCatalog) -> Self {
        Self {
            cards: catalog.iter().map(Card::from_definition).collect(),
            score: 0,
            highscore: 0,
            round: 1,
        }
    }

    /// Start from a known high score (e.g. carried over by the caller).
    #[must_use]
    pub fn with_highscore(mut self, highscore: u32) -> Self {
        self.highscore = highscore;
        self
    }

    // === Queries ===

    /// Cards in display order.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    /// Card ids in display order.
    pub fn card_ids(&self) -> impl Iterator<Item = CardId> + '_ {
        self.cards.iter().map(|c| c.id)
    }

    /// Look up a card by ID.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Current display position of a card.
    #[must_use]
    pub fn position(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.id == id)
    }

    /// Check if a card is on the board.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.position(id).is_some()
    }

    /// Number of cards on the board.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Running score of the current round.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Best finished-round score so far.
    #[must_use]
    pub fn highscore(&self) -> u32 {
        self.highscore
    }

    /// Current round number.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Number of cards clicked at least once this round.
    #[must_use]
    pub fn clicked_count(&self) -> usize {
        self.cards.iter().filter(|c| c.is_clicked()).count()
    }

    /// Has every card been clicked exactly once?
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.score as usize == self.cards.len()
    }

    // === Mutations ===

    /// Count a first click on the card at `index` and bump the score.
    pub(crate) fn mark_clicked(&mut self, index: usize) {
        self.cards[index].mark_clicked();
        self.score += 1;
    }

    /// Reorder the board uniformly at random.
    pub(crate) fn shuffle_cards(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Raise the high score to the current score if it is higher.
    pub(crate) fn record_highscore(&mut self) {
        self.highscore = self.highscore.max(self.score);
    }

    /// Clear the score and every click count. Keeps order and high score.
    ///
    /// Calling this twice in a row has the same effect as calling it once.
    pub fn reset_round(&mut self) {
        self.score = 0;
        for card in self.cards.iter_mut() {
            card.clear();
        }
    }

    pub(crate) fn advance_round(&mut self) {
        self.round += 1;
    }
}
