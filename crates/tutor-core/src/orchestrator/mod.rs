//! Reply orchestration: classifies the message and assembles the final
//! [`ChatResponse`], invoking the composer and renderer for learning requests.

use crate::activity::render_activity;
use crate::classifier::{classify, normalize, Intent};
use crate::curriculum::compose;
use crate::knowledge::KnowledgeBase;
use crate::shared::{ChatResponse, ReplyPayload, DEFAULT_MAX_MESSAGE_LENGTH};

const GREETING_REPLY: &str = "Hi! 👋 I'm your learning chatbot. I can help you generate curated learning plans with YouTube and LinkedIn Learning videos.";
const IDENTITY_REPLY: &str = "I'm a learning chatbot. I generate curated learning curriculums with YouTube and LinkedIn Learning videos.";
const HELP_REPLY: &str = "You can ask me things like:\n- 'I want to learn Python'\n- 'Teach me React'\n- 'Create a learning curriculum for Java'\n";
const NO_MATCH_REPLY: &str = "I can help you with your learning curriculum. Try topics from my knowledge base: Python, React, etc. You may also add new topics in knowledge_base.json 🙂.";

/// Single entry point the HTTP layer calls: one message string in, one
/// [`ChatResponse`] out. Holds the immutable knowledge base for its lifetime,
/// so distinct instances with distinct fixture bases can run in parallel.
pub struct ReplyOrchestrator {
    knowledge: KnowledgeBase,
    max_message_length: usize,
}

impl ReplyOrchestrator {
    pub fn new(knowledge: KnowledgeBase) -> Self {
        Self {
            knowledge,
            max_message_length: DEFAULT_MAX_MESSAGE_LENGTH,
        }
    }

    /// Overrides the message length limit (config-driven in the gateway).
    pub fn with_max_length(mut self, max_message_length: usize) -> Self {
        self.max_message_length = max_message_length;
        self
    }

    /// Produces the response for one chat message. Every category yields a
    /// response; no input is fatal.
    pub fn reply(&self, message: &str) -> ChatResponse {
        match classify(message, self.max_message_length) {
            Intent::TooLong { length, limit } => ChatResponse::text(format!(
                "⚠️ Your message is too long ({length} characters). Maximum allowed: {limit}. Please shorten your message and try again."
            )),
            Intent::LearningRequest => self.learning_reply(message),
            Intent::Greeting => ChatResponse::text(GREETING_REPLY),
            Intent::TimeQuery => {
                let now = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
                ChatResponse::text(format!("The current server time is {now}."))
            }
            Intent::IdentityQuery => ChatResponse::text(IDENTITY_REPLY),
            Intent::HelpQuery => ChatResponse::text(HELP_REPLY),
            Intent::Fallback => ChatResponse::text(format!(
                "You said: '{message}'. If this is about learning, try something like: 'I want to learn Python'."
            )),
        }
    }

    fn learning_reply(&self, message: &str) -> ChatResponse {
        let normalized = normalize(message);
        match compose(&normalized, &self.knowledge) {
            Some(plan) => {
                let (summary, activity) = render_activity(&plan);
                tracing::info!(
                    target: "tutor::orchestrator",
                    topic = %plan.topic,
                    modules = plan.modules.len(),
                    "learning plan composed"
                );
                ChatResponse::new(
                    format!("Hi! 👋 {summary} I've also included YouTube and LinkedIn Learning videos."),
                    ReplyPayload::Learning { plan, activity },
                )
            }
            None => ChatResponse::text(NO_MATCH_REPLY),
        }
    }
}
