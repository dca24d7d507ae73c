pub mod config;
pub mod context;
pub mod error;
pub mod intent;
pub mod message;
pub mod persona_card;

pub use config::{EdgeSageConfig, SessionConfig};
pub use context::{AgentContext, RiskLevel, DEFAULT_BANKROLL, MAX_BANKROLL};
pub use error::ModelError;
pub use intent::IntentClassification;
pub use message::{Message, Role};
pub use persona_card::PersonaCard;
