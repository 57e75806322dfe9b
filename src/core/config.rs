//! Session configuration.
//!
//! Everything is set in code; there is no file or environment layer.

use serde::{Deserialize, Serialize};

/// Default number of finished rounds a session remembers.
pub const DEFAULT_HISTORY_LIMIT: usize = 32;

/// Configuration for a game session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for the shuffle RNG. `None` draws one from the OS.
    pub seed: Option<u64>,

    /// How many finished-round summaries to keep (oldest dropped first).
    /// 0 disables the history.
    pub history_limit: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl GameConfig {
    /// Create a config with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed seed so shuffles are reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the round history limit.
    #[must_use]
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }
}
