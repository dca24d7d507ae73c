use edgesage_models::PersonaCard;
use tracing::debug;

/// Outcome of picking a card on the landing view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Navigate to the chat view for this persona id.
    Open(String),
    /// Card exists but is disabled; nothing happens.
    Disabled,
    /// No card carries this id.
    Unknown,
}

/// Landing catalog of persona cards, in display order.
#[derive(Debug, Clone)]
pub struct Catalog {
    cards: Vec<PersonaCard>,
}

impl Catalog {
    pub fn new(cards: Vec<PersonaCard>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[PersonaCard] {
        &self.cards
    }

    pub fn get(&self, id: &str) -> Option<&PersonaCard> {
        self.cards.iter().find(|card| card.id == id)
    }

    pub fn select(&self, id: &str) -> Selection {
        match self.get(id) {
            Some(card) if !card.is_enabled() => {
                debug!(persona = %id, "Ignoring selection of disabled card");
                Selection::Disabled
            }
            Some(card) => Selection::Open(card.id.clone()),
            None => Selection::Unknown,
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(edgesage_models::persona_card::default_cards())
    }
}
