//! Session driver and the display-layer seam.
//!
//! - `GameView`: what a display layer implements to render the board and
//!   announce round results
//! - `Session`: owns the state and RNG, forwards clicks through the rules and
//!   keeps the view up to date

pub mod driver;
pub mod view;

pub use driver::Session;
pub use view::{GameView, NullView};
