use serde::{Deserialize, Serialize};

/// A persona as listed on the landing catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PersonaCard {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Portrait shown on the card and the chat view.
    pub image_src: String,
    /// Backdrop shown while the card is active.
    pub background_src: String,
    /// Disabled cards are listed but cannot be opened.
    #[serde(default)]
    pub disabled: bool,
}

impl PersonaCard {
    pub fn is_enabled(&self) -> bool {
        !self.disabled
    }
}

/// The catalog shipped with the application.
pub fn default_cards() -> Vec<PersonaCard> {
    vec![
        PersonaCard {
            id: "memes".to_string(),
            name: "MEME SAGE".to_string(),
            description: "Crypto-native meme coin analysis and risk framework".to_string(),
            image_src: "/images/memes.jpg".to_string(),
            background_src: "/images/memes2.jpg".to_string(),
            disabled: false,
        },
        PersonaCard {
            id: "casino".to_string(),
            name: "EDGE CALCULATOR".to_string(),
            description: "House edge analysis and responsible betting strategies".to_string(),
            image_src: "/images/casino.jpg".to_string(),
            background_src: "/images/casino2.jpg".to_string(),
            disabled: false,
        },
        PersonaCard {
            id: "sport".to_string(),
            name: "SPORTS ANALYST".to_string(),
            description: "Coming soon...".to_string(),
            image_src: "/images/sport.jpg".to_string(),
            background_src: "/images/sport2.jpg".to_string(),
            disabled: true,
        },
    ]
}
