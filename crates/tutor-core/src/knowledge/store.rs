//! Topic store backing the curriculum composer.
//!
//! The source document nests the topic map under `channelData.knowledgeBase`
//! (webchat envelope), with a plain top-level `knowledgeBase` key accepted as
//! fallback. A missing or malformed source degrades to an empty base; the
//! service must stay available for non-learning intents either way.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// One module inside a topic definition. All fields are optional in the
/// source; defaults are applied when the curriculum is composed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModuleDefinition {
    pub title: Option<String>,
    pub description: Option<String>,
    pub daily_plan: Option<Vec<String>>,
}

/// One topic entry. All fields optional; absent fields are defaulted by the
/// composer, never treated as errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TopicDefinition {
    pub topic: Option<String>,
    pub level: Option<String>,
    pub duration_weeks: Option<u32>,
    pub modules: Option<Vec<ModuleDefinition>>,
    pub youtube_links: Option<Vec<String>>,
    pub linkedin_links: Option<Vec<String>>,
}

/// Immutable mapping from topic key to definition, in stored key order.
/// Built once at startup; the rest of the pipeline only reads it. Key order
/// matters: topic matching takes the first key whose lowercased form appears
/// in the message.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    topics: Vec<(String, TopicDefinition)>,
}

impl KnowledgeBase {
    /// Builds a knowledge base from an already-parsed document.
    ///
    /// Reads `channelData.knowledgeBase` first, then a top-level
    /// `knowledgeBase` key. Neither present yields an empty base.
    pub fn from_value(source: &serde_json::Value) -> Self {
        let section = source
            .get("channelData")
            .and_then(|cd| cd.get("knowledgeBase"))
            .or_else(|| source.get("knowledgeBase"));

        let Some(serde_json::Value::Object(map)) = section else {
            return Self::default();
        };

        let topics = map
            .iter()
            .map(|(key, value)| {
                let def = serde_json::from_value(value.clone()).unwrap_or_default();
                (key.clone(), def)
            })
            .collect();
        Self { topics }
    }

    /// Loads the knowledge base document from disk. A missing or unreadable
    /// file degrades to an empty base rather than failing startup.
    pub fn load_path<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(
                    target: "tutor::knowledge",
                    path = %path.display(),
                    error = %e,
                    "knowledge base not found, learning mode will be limited"
                );
                return Self::default();
            }
        };
        match serde_json::from_str::<serde_json::Value>(&raw) {
            Ok(value) => {
                let kb = Self::from_value(&value);
                tracing::info!(
                    target: "tutor::knowledge",
                    path = %path.display(),
                    topics = kb.len(),
                    "knowledge base loaded"
                );
                kb
            }
            Err(e) => {
                tracing::warn!(
                    target: "tutor::knowledge",
                    path = %path.display(),
                    error = %e,
                    "knowledge base unparseable, learning mode will be limited"
                );
                Self::default()
            }
        }
    }

    /// Topic entries in stored order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TopicDefinition)> {
        self.topics.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of topics.
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_channel_data_path_preferred_over_top_level() {
        let source = json!({
            "channelData": {
                "responseType": "knowledgeBase",
                "knowledgeBase": { "python": { "level": "Beginner" } }
            },
            "knowledgeBase": { "java": {} }
        });
        let kb = KnowledgeBase::from_value(&source);
        assert_eq!(kb.len(), 1);
        let (key, def) = kb.iter().next().unwrap();
        assert_eq!(key, "python");
        assert_eq!(def.level.as_deref(), Some("Beginner"));
    }

    #[test]
    fn test_top_level_fallback() {
        let source = json!({ "knowledgeBase": { "react": { "durationWeeks": 4 } } });
        let kb = KnowledgeBase::from_value(&source);
        assert_eq!(kb.len(), 1);
        let (key, def) = kb.iter().next().unwrap();
        assert_eq!(key, "react");
        assert_eq!(def.duration_weeks, Some(4));
    }

    #[test]
    fn test_missing_sections_yield_empty_base() {
        let kb = KnowledgeBase::from_value(&json!({ "id": "doc-1", "type": "message" }));
        assert!(kb.is_empty());

        let kb = KnowledgeBase::from_value(&json!("not an object"));
        assert!(kb.is_empty());
    }

    #[test]
    fn test_key_order_is_stored_order() {
        let source = json!({
            "knowledgeBase": {
                "zebra": {},
                "alpha": {},
                "python": {}
            }
        });
        let kb = KnowledgeBase::from_value(&source);
        let keys: Vec<&str> = kb.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["zebra", "alpha", "python"]);
    }

    #[test]
    fn test_malformed_topic_entry_defaults() {
        let source = json!({
            "knowledgeBase": { "python": "not an object" }
        });
        let kb = KnowledgeBase::from_value(&source);
        assert_eq!(kb.len(), 1);
        let (_, def) = kb.iter().next().unwrap();
        assert!(def.modules.is_none());
        assert!(def.level.is_none());
    }

    #[test]
    fn test_load_path_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let kb = KnowledgeBase::load_path(dir.path().join("nope.json"));
        assert!(kb.is_empty());
    }

    #[test]
    fn test_load_path_malformed_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kb.json");
        std::fs::write(&path, "{ this is not json").unwrap();
        let kb = KnowledgeBase::load_path(&path);
        assert!(kb.is_empty());
    }

    #[test]
    fn test_load_path_reads_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kb.json");
        let doc = json!({
            "channelData": {
                "knowledgeBase": {
                    "python": {
                        "modules": [
                            { "title": "Basics", "description": "Syntax", "dailyPlan": ["Day 1"] }
                        ]
                    }
                }
            }
        });
        std::fs::write(&path, serde_json::to_string(&doc).unwrap()).unwrap();
        let kb = KnowledgeBase::load_path(&path);
        assert_eq!(kb.len(), 1);
        let (_, def) = kb.iter().next().unwrap();
        let modules = def.modules.as_ref().unwrap();
        assert_eq!(modules[0].title.as_deref(), Some("Basics"));
        assert_eq!(modules[0].daily_plan.as_ref().unwrap(), &vec!["Day 1".to_string()]);
    }
}
