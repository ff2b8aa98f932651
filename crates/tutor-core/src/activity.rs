//! Activity rendering: turns a learning plan into a Bot-Framework-compatible
//! Activity with an Adaptive Card attachment.
//!
//! Field names and nesting are a compatibility contract with the webchat
//! channel format. Do not rename or restructure them.

use serde_json::{json, Value};

use crate::curriculum::LearningPlan;
use crate::shared::utc_timestamp;

const CARD_SCHEMA: &str = "http://adaptivecards.io/schemas/adaptive-card.json";
const CARD_VERSION: &str = "1.5";
const CARD_CONTENT_TYPE: &str = "application/vnd.microsoft.card.adaptive";
const SERVICE_URL: &str = "https://example.contoso.com";

/// Renders the plan into its one-line summary and the full Activity payload.
/// Deterministic from the plan except for the timestamp field.
pub fn render_activity(plan: &LearningPlan) -> (String, Value) {
    let summary = format!("Here is a {} learning plan for {}.", plan.level, plan.topic);
    let activity = json!({
        "id": format!("activity-{}", plan.topic.to_lowercase().replace(' ', "-")),
        "type": "message",
        "timestamp": utc_timestamp(),
        "serviceUrl": SERVICE_URL,
        "channelId": "webchat",
        "conversation": { "id": "conv-learning-response" },
        "from": { "id": "agent-learning", "name": "Learning Assistant", "role": "bot" },
        "recipient": { "id": "user-request", "name": "User", "role": "user" },
        "replyToId": "incoming-activity-id",
        "locale": "en-US",
        "text": summary,
        "attachments": [
            { "contentType": CARD_CONTENT_TYPE, "content": card_content(plan) }
        ],
    });
    (summary, activity)
}

/// Adaptive Card body: title, level/duration subtitle, module blocks, and
/// conditional link sections. Daily plans are not rendered into the card;
/// they remain only in the structured plan.
fn card_content(plan: &LearningPlan) -> Value {
    let module_items: Vec<Value> = plan
        .modules
        .iter()
        .map(|module| {
            json!({
                "type": "TextBlock",
                "text": format!("{}\n- {}", module.title, module.description),
                "wrap": true,
            })
        })
        .collect();

    let mut body = vec![
        json!({
            "type": "TextBlock",
            "text": format!("{} – Learning Curriculum", plan.topic),
            "weight": "Bolder",
            "size": "Large",
            "wrap": true,
        }),
        json!({
            "type": "TextBlock",
            "text": format!("Level: {}, Duration: {} weeks", plan.level, plan.duration_weeks),
            "wrap": true,
        }),
        json!({
            "type": "TextBlock",
            "text": "Modules:",
            "weight": "Bolder",
            "spacing": "Medium",
        }),
        json!({
            "type": "Container",
            "items": module_items,
            "spacing": "Small",
        }),
    ];

    if !plan.youtube_links.is_empty() {
        body.push(section_label("YouTube Links:"));
        body.push(link_list(&plan.youtube_links));
    }
    if !plan.linkedin_links.is_empty() {
        body.push(section_label("LinkedIn Learning Paths:"));
        body.push(link_list(&plan.linkedin_links));
    }

    json!({
        "$schema": CARD_SCHEMA,
        "type": "AdaptiveCard",
        "version": CARD_VERSION,
        "body": body,
    })
}

fn section_label(text: &str) -> Value {
    json!({ "type": "TextBlock", "text": text, "weight": "Bolder", "spacing": "Medium" })
}

/// Newline-joined, hyphen-prefixed list of URLs.
fn link_list(links: &[String]) -> Value {
    let text = links
        .iter()
        .map(|url| format!("- {}", url))
        .collect::<Vec<_>>()
        .join("\n");
    json!({ "type": "TextBlock", "text": text, "wrap": true })
}
