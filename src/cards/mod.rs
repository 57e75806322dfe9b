//! Card system: definitions, board instances and the catalog.
//!
//! ## Key Types
//!
//! - `CardId`: Stable card identity
//! - `CardDefinition`: Catalog entry (id, name, image)
//! - `Card`: A definition on the board, with its per-round click count
//! - `CardCatalog`: Validated, ordered list of definitions

pub mod catalog;
pub mod definition;
pub mod instance;

pub use catalog::{CardCatalog, CatalogError};
pub use definition::{CardDefinition, CardId};
pub use instance::Card;
