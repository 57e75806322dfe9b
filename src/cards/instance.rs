//! Card instances - a catalog entry on the board with its click counter.

use serde::{Deserialize, Serialize};

use super::definition::{CardDefinition, CardId};

/// A card on the board.
///
/// `id` never changes. `count` is zero until the card is clicked in the
/// current round, and is cleared when the round ends.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Identity, copied from the definition.
    pub id: CardId,

    /// Display name.
    pub name: String,

    /// Image reference.
    pub image: String,

    count: u32,
}

impl Card {
    /// Create an unclicked card from its definition.
    #[must_use]
    pub fn from_definition(def: &CardDefinition) -> Self {
        Self {
            id: def.id,
            name: def.name.clone(),
            image: def.image.clone(),
            count: 0,
        }
    }

    /// Clicks registered on this card in the current round.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Has this card been clicked this round?
    #[must_use]
    pub fn is_clicked(&self) -> bool {
        self.count > 0
    }

    pub(crate) fn mark_clicked(&mut self) {
        self.count += 1;
    }

    pub(crate) fn clear(&mut self) {
        self.count = 0;
    }
}

impl From<&CardDefinition> for Card {
    fn from(def: &CardDefinition) -> Self {
        Self::from_definition(def)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_definition() {
        let def = CardDefinition::new(CardId::new(2), "Daffy Duck", "images/daffy.png");
        let card = Card::from(&def);

        assert_eq!(card.id, CardId::new(2));
        assert_eq!(card.name, "Daffy Duck");
        assert_eq!(card.count(), 0);
        assert!(!card.is_clicked());
    }

    #[test]
    fn test_click_and_clear() {
        let def = CardDefinition::new(CardId::new(2), "Daffy Duck", "images/daffy.png");
        let mut card = Card::from_definition(&def);

        card.mark_clicked();
        assert_eq!(card.count(), 1);
        assert!(card.is_clicked());

        card.clear();
        assert_eq!(card.count(), 0);
    }
}
