//! EdgeSage - rule-based advisor personas for meme coins and casino games.
//!
//! A persona answers chat input with templated risk frameworks. It never
//! gives a direct pick: requests for exact numbers, all-ins or guarantees
//! get a refusal plus a safe process instead.
//!
//! # Library Usage
//!
//! ```rust,no_run
//! use edgesage::models::EdgeSageConfig;
//! use edgesage::agents::RandomSelector;
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), edgesage::agents::AgentError> {
//! let config = EdgeSageConfig::default();
//! let registry = edgesage::build_registry(Arc::new(RandomSelector))?;
//! if let Some(mut session) = edgesage::open_session(&registry, &config, "memes")? {
//!     session.submit_now("what should I check before entering?")?;
//! }
//! # Ok(())
//! # }
//! ```

pub use edgesage_agents as agents;
pub use edgesage_models as models;

use std::sync::Arc;

use edgesage_agents::{
    AgentError, AgentRegistry, Catalog, ChatSession, RandomSelector, SeededSelector,
    TemplateSelector,
};
use edgesage_models::config::EdgeSageConfig;

/// Message shown when a chat view is opened for an id the registry lacks.
pub const NOT_FOUND: &str = "Agent not found";

/// Build the template selector: seeded when a seed is given, random otherwise.
pub fn build_selector(seed: Option<u64>) -> Arc<dyn TemplateSelector> {
    match seed {
        Some(seed) => Arc::new(SeededSelector::new(seed)),
        None => Arc::new(RandomSelector),
    }
}

/// Build the registry of active personas.
pub fn build_registry(selector: Arc<dyn TemplateSelector>) -> Result<AgentRegistry, AgentError> {
    AgentRegistry::with_default_personas(selector)
}

/// Build the landing catalog from configuration.
pub fn build_catalog(config: &EdgeSageConfig) -> Catalog {
    Catalog::new(config.catalog.clone())
}

/// Open a chat session for `id`, or None when the registry does not know it.
/// Invalid session settings are an error, whatever the id.
pub fn open_session(
    registry: &AgentRegistry,
    config: &EdgeSageConfig,
    id: &str,
) -> Result<Option<ChatSession>, AgentError> {
    registry
        .lookup(id)
        .map(|persona| ChatSession::open(persona, config.session.clone()))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use edgesage_agents::Selection;

    #[test]
    fn open_known_persona() {
        let config = EdgeSageConfig::default();
        let registry = build_registry(build_selector(Some(1))).unwrap();
        let session = open_session(&registry, &config, "casino").unwrap().unwrap();
        assert_eq!(session.len(), 1);
        assert_eq!(session.persona().name(), "EDGE CALCULATOR");
    }

    #[test]
    fn unknown_persona_has_no_session() {
        let config = EdgeSageConfig::default();
        let registry = build_registry(build_selector(None)).unwrap();
        assert!(open_session(&registry, &config, "nope").unwrap().is_none());
        assert!(open_session(&registry, &config, "sport").unwrap().is_none());
    }

    #[test]
    fn out_of_range_bankroll_blocks_every_session() {
        let registry = build_registry(build_selector(None)).unwrap();
        for bankroll in [rust_decimal_macros::dec!(-5), rust_decimal::Decimal::MAX] {
            let mut config = EdgeSageConfig::default();
            config.session.default_bankroll = bankroll;
            assert!(matches!(
                open_session(&registry, &config, "memes"),
                Err(AgentError::Context(_))
            ));
        }
    }

    #[test]
    fn catalog_comes_from_config() {
        let mut config = EdgeSageConfig::default();
        config.catalog.retain(|card| card.id != "casino");
        let catalog = build_catalog(&config);
        assert_eq!(catalog.cards().len(), 2);
        assert_eq!(catalog.select("casino"), Selection::Unknown);
    }

    #[test]
    fn shipped_config_matches_defaults() {
        let config: EdgeSageConfig =
            toml::from_str(include_str!("../../../config/edgesage.toml")).unwrap();
        assert_eq!(config, EdgeSageConfig::default());
    }

    #[test]
    fn session_uses_configured_settings() {
        let mut config = EdgeSageConfig::default();
        config.session.reply_delay_ms = 0;
        config.session.default_bankroll = rust_decimal_macros::dec!(200);
        let registry = build_registry(build_selector(Some(3))).unwrap();
        let mut session = open_session(&registry, &config, "memes").unwrap().unwrap();
        let reply = session
            .submit_now("thoughts on this meme launch?")
            .unwrap()
            .unwrap();
        assert!(reply.content.contains("5% of bankroll ($10.00)"));
    }
}
