use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Agent already registered: {0}")]
    DuplicateAgent(String),

    #[error("Invalid context: {0}")]
    Context(#[from] edgesage_models::ModelError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
