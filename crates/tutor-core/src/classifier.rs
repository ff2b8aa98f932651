//! Intent classification over normalized message text.
//!
//! Pure substring matching: a keyword may match inside a larger word
//! ("sometimes" contains "time"). That behavior is a compatibility contract
//! with existing clients, not a defect to fix. Rules are evaluated in order;
//! the first match wins regardless of later rules.

use serde::{Deserialize, Serialize};

/// Keywords that trigger the learning-request category.
pub const LEARNING_KEYWORDS: &[&str] = &["learn", "learning", "study", "course", "curriculum"];

const GREETING_KEYWORDS: &[&str] = &["hello", "hi", "hey", "mingalaba"];
const TIME_KEYWORDS: &[&str] = &["time"];
const IDENTITY_KEYWORDS: &[&str] = &["your name", "who are you"];
const HELP_KEYWORDS: &[&str] = &["help"];

/// Response category for a chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Message exceeds the configured maximum length. Carries the actual
    /// character count and the limit for reply formatting.
    TooLong { length: usize, limit: usize },
    LearningRequest,
    Greeting,
    TimeQuery,
    IdentityQuery,
    HelpQuery,
    /// No rule matched; the reply echoes the raw message back.
    Fallback,
}

/// Ordered (keywords, category) rules. Order is the priority contract.
const RULES: &[(&[&str], Intent)] = &[
    (LEARNING_KEYWORDS, Intent::LearningRequest),
    (GREETING_KEYWORDS, Intent::Greeting),
    (TIME_KEYWORDS, Intent::TimeQuery),
    (IDENTITY_KEYWORDS, Intent::IdentityQuery),
    (HELP_KEYWORDS, Intent::HelpQuery),
];

/// Classifies a raw message: length violation first (on the raw character
/// count), then the keyword rules over the lowercased trimmed text, then
/// fallback.
pub fn classify(raw_message: &str, max_length: usize) -> Intent {
    let length = raw_message.chars().count();
    if length > max_length {
        return Intent::TooLong {
            length,
            limit: max_length,
        };
    }

    let normalized = normalize(raw_message);
    for (keywords, intent) in RULES {
        if keywords.iter().any(|k| normalized.contains(k)) {
            return intent.clone();
        }
    }
    Intent::Fallback
}

/// Lowercased, trimmed form of a message, as seen by the keyword rules and
/// the topic matcher.
pub fn normalize(raw_message: &str) -> String {
    raw_message.to_lowercase().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX: usize = 1500;

    #[test]
    fn test_learning_request_beats_greeting() {
        assert_eq!(
            classify("hi, I want to learn Python", MAX),
            Intent::LearningRequest
        );
    }

    #[test]
    fn test_greeting() {
        assert_eq!(classify("hello", MAX), Intent::Greeting);
        assert_eq!(classify("Mingalaba!", MAX), Intent::Greeting);
    }

    #[test]
    fn test_time_query_substring_false_positive() {
        // "sometimes" contains "time"; accepted by design.
        assert_eq!(classify("sometimes it rains", MAX), Intent::TimeQuery);
        assert_eq!(classify("what's the time", MAX), Intent::TimeQuery);
    }

    #[test]
    fn test_identity_query() {
        assert_eq!(classify("what's your name?", MAX), Intent::IdentityQuery);
        assert_eq!(classify("so, who are you", MAX), Intent::IdentityQuery);
    }

    #[test]
    fn test_help_query() {
        assert_eq!(classify("please help me out", MAX), Intent::HelpQuery);
    }

    #[test]
    fn test_fallback() {
        assert_eq!(classify("good weather today", MAX), Intent::Fallback);
        assert_eq!(classify("", MAX), Intent::Fallback);
    }

    #[test]
    fn test_too_long_carries_counts() {
        let message = "a".repeat(2000);
        assert_eq!(
            classify(&message, MAX),
            Intent::TooLong {
                length: 2000,
                limit: 1500
            }
        );
    }

    #[test]
    fn test_length_check_precedes_keyword_rules() {
        let message = format!("I want to learn Python{}", " ".repeat(2000));
        assert!(matches!(classify(&message, MAX), Intent::TooLong { .. }));
    }

    #[test]
    fn test_normalize_lowercases_and_trims() {
        assert_eq!(normalize("  Teach Me PYTHON  "), "teach me python");
    }

    #[test]
    fn test_mid_word_learning_keyword_matches() {
        // "studying" contains "study"; accepted by design.
        assert_eq!(classify("I am studying hard", MAX), Intent::LearningRequest);
    }
}
