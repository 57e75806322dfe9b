//! Core types: RNG, configuration and game state.

pub mod config;
pub mod rng;
pub mod state;

pub use config::{GameConfig, DEFAULT_HISTORY_LIMIT};
pub use rng::GameRng;
pub use state::{GameState, StateError};
