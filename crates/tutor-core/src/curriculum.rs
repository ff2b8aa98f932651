//! Curriculum composition: resolves a matched knowledge-base topic into a
//! fully-populated learning plan.

use serde::{Deserialize, Serialize};

use crate::knowledge::{KnowledgeBase, TopicDefinition};

/// Level assigned when a topic definition does not specify one.
pub const DEFAULT_LEVEL: &str = "Beginner";
const DEFAULT_MODULE_TITLE: &str = "Untitled";

/// One resolved module of a learning plan. No optional fields remain here;
/// the composer has already applied defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningModule {
    pub title: String,
    pub description: String,
    pub daily_plan: Vec<String>,
}

/// Derived curriculum for one matched topic. Constructed fresh per request,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPlan {
    pub topic: String,
    pub level: String,
    pub duration_weeks: u32,
    pub modules: Vec<LearningModule>,
    pub youtube_links: Vec<String>,
    pub linkedin_links: Vec<String>,
}

/// Composes a learning plan for the first topic key (stored order) whose
/// lowercased form is a substring of `normalized_text`. First match wins;
/// there is no ranking. Returns `None` when no key matches, including for an
/// empty knowledge base.
pub fn compose(normalized_text: &str, knowledge: &KnowledgeBase) -> Option<LearningPlan> {
    let (key, def) = knowledge
        .iter()
        .find(|(key, _)| normalized_text.contains(&key.to_lowercase()))?;
    Some(resolve(key, def))
}

/// Copies fields out of the topic definition, applying field-level defaults.
/// Module, video-link, and course-link order is preserved verbatim.
fn resolve(matched_key: &str, def: &TopicDefinition) -> LearningPlan {
    let modules: Vec<LearningModule> = def
        .modules
        .as_deref()
        .unwrap_or(&[])
        .iter()
        .map(|m| LearningModule {
            title: m
                .title
                .clone()
                .unwrap_or_else(|| DEFAULT_MODULE_TITLE.to_string()),
            description: m.description.clone().unwrap_or_default(),
            daily_plan: m.daily_plan.clone().unwrap_or_default(),
        })
        .collect();

    LearningPlan {
        topic: def
            .topic
            .clone()
            .unwrap_or_else(|| capitalize(matched_key)),
        level: def.level.clone().unwrap_or_else(|| DEFAULT_LEVEL.to_string()),
        duration_weeks: def.duration_weeks.unwrap_or(modules.len() as u32),
        modules,
        youtube_links: def.youtube_links.clone().unwrap_or_default(),
        linkedin_links: def.linkedin_links.clone().unwrap_or_default(),
    }
}

/// First character uppercased, remainder lowercased ("pYthon" -> "Python").
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
