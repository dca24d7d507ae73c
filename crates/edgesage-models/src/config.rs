use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::context::{validate_bankroll, RiskLevel, DEFAULT_BANKROLL};
use crate::error::ModelError;
use crate::persona_card::{default_cards, PersonaCard};

/// Top-level configuration for EdgeSage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EdgeSageConfig {
    #[serde(default)]
    pub session: SessionConfig,
    /// Landing catalog. Falls back to the built-in three cards.
    #[serde(default = "default_cards")]
    pub catalog: Vec<PersonaCard>,
}

impl Default for EdgeSageConfig {
    fn default() -> Self {
        Self {
            session: SessionConfig::default(),
            catalog: default_cards(),
        }
    }
}

/// Settings applied to every chat session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionConfig {
    /// Bankroll in dollars passed to personas on each reply.
    #[serde(default = "default_bankroll")]
    pub default_bankroll: Decimal,
    #[serde(default)]
    pub default_risk_level: RiskLevel,
    /// Pause before the persona "answers", in milliseconds. 0 disables it.
    #[serde(default = "default_reply_delay")]
    pub reply_delay_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_bankroll: default_bankroll(),
            default_risk_level: RiskLevel::default(),
            reply_delay_ms: default_reply_delay(),
        }
    }
}

impl SessionConfig {
    /// Reject settings no reply could be built from.
    pub fn validate(&self) -> Result<(), ModelError> {
        validate_bankroll(self.default_bankroll)?;
        Ok(())
    }
}

fn default_bankroll() -> Decimal {
    DEFAULT_BANKROLL
}
fn default_reply_delay() -> u64 {
    1200
}
