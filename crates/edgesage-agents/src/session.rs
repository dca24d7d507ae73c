use std::sync::Arc;
use std::time::{Duration, Instant};

use edgesage_models::config::SessionConfig;
use edgesage_models::{AgentContext, Message};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::AgentError;
use crate::persona::Persona;

/// One conversation with one persona. Lives as long as the chat view and
/// keeps nothing afterwards.
///
/// `submit` takes `&mut self`, so replies are strictly serialized: a second
/// message cannot be recorded while the previous reply is still pending.
pub struct ChatSession {
    id: Uuid,
    persona: Arc<dyn Persona>,
    settings: SessionConfig,
    messages: Vec<Message>,
}

impl ChatSession {
    /// Start a session; the persona's welcome is the first message.
    ///
    /// Fails if the settings carry a bankroll no reply could be built from.
    pub fn open(persona: Arc<dyn Persona>, settings: SessionConfig) -> Result<Self, AgentError> {
        settings.validate()?;
        let id = Uuid::new_v4();
        info!(session = %id, persona = %persona.id(), "Opening chat session");
        let welcome = Message::assistant(persona.welcome_message());
        Ok(Self {
            id,
            persona,
            settings,
            messages: vec![welcome],
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn persona(&self) -> &Arc<dyn Persona> {
        &self.persona
    }

    pub fn settings(&self) -> &SessionConfig {
        &self.settings
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Submit user input and wait for the persona's reply.
    ///
    /// Blank input is ignored and returns `None`. Otherwise the user message
    /// is recorded, the configured reply delay elapses, and the reply is
    /// recorded and returned.
    pub async fn submit(&mut self, input: &str) -> Result<Option<&Message>, AgentError> {
        let Some((text, context)) = self.record_user(input)? else {
            return Ok(None);
        };

        if self.settings.reply_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.settings.reply_delay_ms)).await;
        }

        Ok(Some(self.reply_to(&text, &context)))
    }

    /// Like `submit` but without the reply delay.
    pub fn submit_now(&mut self, input: &str) -> Result<Option<&Message>, AgentError> {
        match self.record_user(input)? {
            Some((text, context)) => Ok(Some(self.reply_to(&text, &context))),
            None => Ok(None),
        }
    }

    /// Serialize the transcript as pretty JSON.
    pub fn transcript_json(&self) -> Result<String, AgentError> {
        Ok(serde_json::to_string_pretty(&self.messages)?)
    }

    /// Build the reply context first; the user message is only appended
    /// once a reply is guaranteed.
    fn record_user(&mut self, input: &str) -> Result<Option<(String, AgentContext)>, AgentError> {
        let text = input.trim();
        if text.is_empty() {
            debug!(session = %self.id, "Ignoring blank submission");
            return Ok(None);
        }

        let message = Message::user(text);
        let mut history = self.messages.clone();
        history.push(message.clone());
        let context = AgentContext::new(history)
            .with_bankroll(self.settings.default_bankroll)?
            .with_risk_level(self.settings.default_risk_level);

        self.messages.push(message);
        Ok(Some((text.to_string(), context)))
    }

    fn reply_to(&mut self, text: &str, context: &AgentContext) -> &Message {
        let start = Instant::now();
        let reply = self.persona.respond(text, context);
        info!(
            session = %self.id,
            persona = %self.persona.id(),
            history = context.messages.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "Persona replied"
        );

        self.messages.push(Message::assistant(reply));
        &self.messages[self.messages.len() - 1]
    }
}
