//! Card catalog: the ordered list of playable characters.
//!
//! The catalog seeds every new [`GameState`](crate::core::GameState). It is
//! validated once at construction so the rules never see an empty board or
//! two cards sharing an id.

use rustc_hash::FxHashSet;
use thiserror::Error;

use super::definition::{CardDefinition, CardId};

const BUILTIN_CARDS: &str = include_str!("../../assets/cards.json");

/// Reasons a catalog can be rejected.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("card catalog is empty")]
    Empty,

    #[error("duplicate card id {0}")]
    DuplicateId(CardId),

    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Ordered, validated card catalog.
///
/// ```
/// use clicky_game::cards::{CardCatalog, CardDefinition, CardId};
///
/// let catalog = CardCatalog::new(vec![
///     CardDefinition::new(CardId::new(1), "Bugs Bunny", "bugs.png"),
///     CardDefinition::new(CardId::new(2), "Daffy Duck", "daffy.png"),
/// ])
/// .unwrap();
///
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.get(CardId::new(2)).unwrap().name, "Daffy Duck");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardCatalog {
    cards: Vec<CardDefinition>,
}

impl CardCatalog {
    /// Build a catalog, rejecting empty lists and repeated ids.
    pub fn new(cards: Vec<CardDefinition>) -> Result<Self, CatalogError> {
        if cards.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = FxHashSet::default();
        for card in &cards {
            if !seen.insert(card.id) {
                return Err(CatalogError::DuplicateId(card.id));
            }
        }

        Ok(Self { cards })
    }

    /// Parse a catalog from a JSON array of `{id, name, image}` records.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let cards: Vec<CardDefinition> = serde_json::from_str(json)?;
        Self::new(cards)
    }

    /// The bundled Looney Tunes catalog.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CARDS)
    }

    /// Get a definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Check if a card ID is in the catalog.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.get(id).is_some()
    }

    /// Number of cards. Never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over definitions in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.iter()
    }
}
