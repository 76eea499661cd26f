//! Keyword Responder
//!
//! First-match substring lookup over an ordered rule list.

use crate::domain::entities::{ChatbotRule, DEFAULT_REPLY, DEFAULT_RULES};
use crate::ports::Responder;

/// Rule-based responder: lowercases the query and returns the reply of the
/// first rule whose trigger it contains.
#[derive(Debug, Clone)]
pub struct KeywordResponder {
    rules: Vec<ChatbotRule>,
    default_reply: String,
}

impl KeywordResponder {
    pub fn new(rules: Vec<ChatbotRule>, default_reply: impl Into<String>) -> Self {
        Self {
            rules,
            default_reply: default_reply.into(),
        }
    }

    pub fn rules(&self) -> &[ChatbotRule] {
        &self.rules
    }

    /// Rule that answers `query`, if any
    pub fn matching_rule(&self, query: &str) -> Option<&ChatbotRule> {
        let normalized = query.to_lowercase();
        self.rules.iter().find(|rule| rule.matches(&normalized))
    }
}

impl Default for KeywordResponder {
    fn default() -> Self {
        Self::new(DEFAULT_RULES.to_vec(), DEFAULT_REPLY)
    }
}

impl Responder for KeywordResponder {
    fn respond(&self, query: &str) -> String {
        match self.matching_rule(query) {
            Some(rule) => {
                tracing::debug!("Matched trigger '{}'", rule.trigger);
                rule.reply.to_string()
            }
            None => self.default_reply.clone(),
        }
    }

    fn name(&self) -> &str {
        "keyword"
    }
}

/// Reply to `query` with the built-in rules
pub fn chatbot_reply(query: &str) -> String {
    KeywordResponder::default().respond(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hello() {
        assert_eq!(
            chatbot_reply("Hello there"),
            "Hi! How can I help you with unit conversion today?"
        );
    }

    #[test]
    fn test_default_reply() {
        assert_eq!(
            chatbot_reply("xyz"),
            "I'm here to help with unit conversions. Try asking about length, weight, \
             or temperature conversions!"
        );
        assert_eq!(chatbot_reply(""), DEFAULT_REPLY);
    }

    #[test]
    fn test_case_insensitive_substring() {
        assert_eq!(
            chatbot_reply("THANKS a lot"),
            "You're welcome! Let me know if you need any other help."
        );
        assert_eq!(
            chatbot_reply("ok, goodbye"),
            "Goodbye! Come back anytime for more conversions!"
        );
    }

    #[test]
    fn test_first_rule_wins() {
        // contains both "hello" and "help"
        assert_eq!(
            chatbot_reply("hello, I need help"),
            "Hi! How can I help you with unit conversion today?"
        );
        // "help" precedes "thank"
        assert!(chatbot_reply("thanks for the help").starts_with("I can help you convert"));
    }

    #[test]
    fn test_custom_rules() {
        let responder = KeywordResponder::new(
            vec![ChatbotRule::new("kelvin", "Kelvin starts at absolute zero.")],
            "Ask me about kelvin.",
        );
        assert_eq!(responder.respond("What is Kelvin?"), "Kelvin starts at absolute zero.");
        assert_eq!(responder.respond("hello"), "Ask me about kelvin.");
        assert_eq!(responder.rules().len(), 1);
    }

    #[test]
    fn test_stateless() {
        let responder = KeywordResponder::default();
        let first = responder.respond("help");
        responder.respond("bye");
        assert_eq!(responder.respond("help"), first);
    }
}
