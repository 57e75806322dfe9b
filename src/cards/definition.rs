//! Card definitions - static catalog data.
//!
//! A `CardDefinition` is what the catalog supplies: an identity plus an
//! opaque display payload. The per-round click counter lives on
//! [`Card`](super::Card), not here.

use serde::{Deserialize, Serialize};

/// Stable identifier of a card.
///
/// Serializes as a bare integer in JSON.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Static card definition.
///
/// `name` and `image` are never interpreted by the game rules; they are
/// passed through to whatever renders the board.
///
/// ```
/// use clicky_game::cards::{CardDefinition, CardId};
///
/// let bugs = CardDefinition::new(CardId::new(1), "Bugs Bunny", "images/bugs.png");
/// assert_eq!(bugs.id.raw(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier.
    pub id: CardId,

    /// Character name.
    pub name: String,

    /// Image reference (path or URL).
    pub image: String,
}

impl CardDefinition {
    /// Create a new card definition.
    pub fn new(id: CardId, name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            image: image.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(5);
        assert_eq!(id.raw(), 5);
        assert_eq!(format!("{}", id), "Card(5)");
    }

    #[test]
    fn test_definition_json_shape() {
        let json = r#"{"id": 3, "name": "Tweety", "image": "images/tweety.png"}"#;
        let def: CardDefinition = serde_json::from_str(json).unwrap();

        assert_eq!(def.id, CardId::new(3));
        assert_eq!(def.name, "Tweety");
        assert_eq!(def.image, "images/tweety.png");
    }
}
