//! Static knowledge base: topic definitions loaded once at process start.

mod store;

pub use store::{KnowledgeBase, ModuleDefinition, TopicDefinition};
