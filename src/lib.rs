//! # clicky-game
//!
//! A card-clicking memory game.
//!
//! A fixed set of character cards is shown. Clicking a card that has not been
//! clicked this round scores a point and reshuffles the board. Clicking a card
//! twice ends the round as a loss; clicking every card exactly once is a win.
//! The high score survives from round to round.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: Transitions take a `GameState` and return the next
//!    one. No globals, so every rule is testable in isolation.
//!
//! 2. **Uniform Shuffle**: Fisher–Yates on a seeded ChaCha8 RNG. Same seed,
//!    same boards.
//!
//! 3. **Passive Display**: Rendering sits behind the `GameView` trait. The
//!    core never draws anything itself.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, game state
//! - `cards`: Card ids, definitions, board cards, catalog
//! - `rules`: Click handling and round settlement
//! - `session`: Driver loop and the display-layer trait

pub mod cards;
pub mod core;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, GameState, StateError};

pub use crate::cards::{Card, CardCatalog, CardDefinition, CardId, CatalogError};

pub use crate::rules::{end_round, register_click, ClickOutcome, RoundOutcome, RoundSummary};

pub use crate::session::{GameView, NullView, Session};
