//! tutor-core: learning chatbot pipeline.
//!
//! Classifies free-text chat messages into response categories and, for
//! learning requests, composes a multi-week curriculum from the static
//! knowledge base and renders it as a Bot-Framework Activity payload.
//! The HTTP gateway calls [`ReplyOrchestrator::reply`] with one message
//! string and serializes the returned [`ChatResponse`].

mod activity;
mod classifier;
mod curriculum;
mod knowledge;
mod orchestrator;
mod shared;

pub use activity::render_activity;
pub use classifier::{classify, normalize, Intent, LEARNING_KEYWORDS};
pub use curriculum::{compose, LearningModule, LearningPlan, DEFAULT_LEVEL};
pub use knowledge::{KnowledgeBase, ModuleDefinition, TopicDefinition};
pub use orchestrator::ReplyOrchestrator;
pub use shared::{ChatResponse, CoreConfig, ReplyPayload, DEFAULT_MAX_MESSAGE_LENGTH};
