pub mod casino;
pub mod catalog;
pub mod error;
pub mod intent;
pub mod meme;
pub mod persona;
pub mod registry;
pub mod selector;
pub mod session;
pub mod templates;

pub mod test_support;

pub use casino::{EdgeCalculator, GameType};
pub use catalog::{Catalog, Selection};
pub use error::AgentError;
pub use intent::classify;
pub use meme::MemeSage;
pub use persona::Persona;
pub use registry::AgentRegistry;
pub use selector::{FixedSelector, RandomSelector, SeededSelector, TemplateSelector};
pub use session::ChatSession;
