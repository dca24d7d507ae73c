use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;

use crate::casino::EdgeCalculator;
use crate::error::AgentError;
use crate::meme::MemeSage;
use crate::persona::Persona;
use crate::selector::TemplateSelector;

/// Id -> persona mapping. Built once at startup and handed to whoever needs it.
#[derive(Default)]
pub struct AgentRegistry {
    agents: HashMap<String, Arc<dyn Persona>>,
}

impl AgentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the two active personas sharing one selector.
    pub fn with_default_personas(selector: Arc<dyn TemplateSelector>) -> Result<Self, AgentError> {
        let mut registry = Self::new();
        registry.register(Arc::new(MemeSage::new(Arc::clone(&selector))))?;
        registry.register(Arc::new(EdgeCalculator::new(selector)))?;
        Ok(registry)
    }

    pub fn register(&mut self, persona: Arc<dyn Persona>) -> Result<(), AgentError> {
        let id = persona.id().to_string();
        if self.agents.contains_key(&id) {
            return Err(AgentError::DuplicateAgent(id));
        }
        info!(persona = %id, name = %persona.name(), "Registered persona");
        self.agents.insert(id, persona);
        Ok(())
    }

    pub fn lookup(&self, id: &str) -> Option<Arc<dyn Persona>> {
        self.agents.get(id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.agents.contains_key(id)
    }

    /// Registered ids, sorted.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.agents.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}
