//! Shared types used across the tutor crates.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::curriculum::LearningPlan;

/// Maximum characters allowed per user message when not configured otherwise.
pub const DEFAULT_MAX_MESSAGE_LENGTH: usize = 1500;

/// Response returned for every chat message, regardless of category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Human-readable reply text.
    pub reply: String,
    /// UTC timestamp (second precision, trailing `Z`) stamped at construction.
    pub timestamp: String,
    /// Bot-Framework Activity with an Adaptive Card attachment. Present if
    /// and only if `learning_plan` is present.
    pub agent_activity: Option<serde_json::Value>,
    /// Structured curriculum for a matched learning request.
    pub learning_plan: Option<LearningPlan>,
}

/// Tagged payload for a reply: either bare text or a learning result carrying
/// both the structured plan and its rendered activity. Constructing
/// [`ChatResponse`] through this type keeps plan and activity both-or-neither.
#[derive(Debug, Clone)]
pub enum ReplyPayload {
    Plain,
    Learning {
        plan: LearningPlan,
        activity: serde_json::Value,
    },
}

impl ChatResponse {
    /// Builds a response stamped with a fresh UTC timestamp.
    pub fn new(reply: impl Into<String>, payload: ReplyPayload) -> Self {
        let (agent_activity, learning_plan) = match payload {
            ReplyPayload::Plain => (None, None),
            ReplyPayload::Learning { plan, activity } => (Some(activity), Some(plan)),
        };
        Self {
            reply: reply.into(),
            timestamp: utc_timestamp(),
            agent_activity,
            learning_plan,
        }
    }

    /// Bare text reply with no plan or activity.
    pub fn text(reply: impl Into<String>) -> Self {
        Self::new(reply, ReplyPayload::Plain)
    }
}

/// Current UTC time as ISO-8601 with second precision and trailing `Z`.
pub fn utc_timestamp() -> String {
    chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Global application configuration (gateway + pipeline). Load from TOML or env.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Application identity shown in logs.
    pub app_name: String,
    /// HTTP port for the gateway.
    pub port: u16,
    /// Path to the knowledge base JSON document.
    pub knowledge_base_path: String,
    /// Maximum characters allowed per user message.
    pub max_message_length: usize,
}

impl CoreConfig {
    /// Load config from file and environment. Precedence: env `TUTOR_CONFIG`
    /// path > `config/gateway.toml` > defaults.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_path =
            std::env::var("TUTOR_CONFIG").unwrap_or_else(|_| "config/gateway".to_string());
        let builder = config::Config::builder()
            .set_default("app_name", "Learning Chatbot")?
            .set_default("port", 8000_i64)?
            .set_default("knowledge_base_path", "config/knowledge_base.json")?
            .set_default("max_message_length", DEFAULT_MAX_MESSAGE_LENGTH as i64)?;

        let path = Path::new(&config_path);
        let builder = if path.exists() {
            builder.add_source(config::File::from(path))
        } else {
            builder
        };

        let built = builder
            .add_source(config::Environment::with_prefix("TUTOR").separator("__"))
            .build()?;

        built.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_response_has_no_plan_or_activity() {
        let res = ChatResponse::text("hi");
        assert_eq!(res.reply, "hi");
        assert!(res.agent_activity.is_none());
        assert!(res.learning_plan.is_none());
    }

    #[test]
    fn test_learning_payload_populates_both_fields() {
        let plan = LearningPlan {
            topic: "Python".to_string(),
            level: "Beginner".to_string(),
            duration_weeks: 1,
            modules: vec![],
            youtube_links: vec![],
            linkedin_links: vec![],
        };
        let res = ChatResponse::new(
            "ok",
            ReplyPayload::Learning {
                plan,
                activity: serde_json::json!({ "type": "message" }),
            },
        );
        assert!(res.agent_activity.is_some());
        assert!(res.learning_plan.is_some());
    }

    #[test]
    fn test_timestamp_is_second_precision_utc() {
        let ts = utc_timestamp();
        assert!(ts.ends_with('Z'));
        chrono::NaiveDateTime::parse_from_str(&ts, "%Y-%m-%dT%H:%M:%SZ")
            .expect("timestamp must be ISO-8601 with second precision");
    }
}
