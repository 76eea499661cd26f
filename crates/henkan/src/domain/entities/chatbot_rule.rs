//! ChatbotRule - Trigger substrings and canned replies

use serde::Serialize;

/// A trigger substring and the reply it selects
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ChatbotRule {
    pub trigger: &'static str,
    pub reply: &'static str,
}

impl ChatbotRule {
    pub const fn new(trigger: &'static str, reply: &'static str) -> Self {
        Self { trigger, reply }
    }

    /// `query` must already be lowercased
    pub fn matches(&self, query: &str) -> bool {
        query.contains(self.trigger)
    }
}

const HELP_REPLY: &str = "I can help you convert between different units of length, \
    weight, and temperature. Just select the conversion type and units!";

/// The rule that ends a conversation
pub const FAREWELL_RULE: ChatbotRule =
    ChatbotRule::new("bye", "Goodbye! Come back anytime for more conversions!");

/// Built-in rules. Earlier rules win when several triggers match.
pub static DEFAULT_RULES: &[ChatbotRule] = &[
    ChatbotRule::new(
        "hello",
        "Hi! How can I help you with unit conversion today?",
    ),
    ChatbotRule::new("help", HELP_REPLY),
    ChatbotRule::new(
        "thank",
        "You're welcome! Let me know if you need any other help.",
    ),
    FAREWELL_RULE,
];

/// Reply when no trigger matches
pub const DEFAULT_REPLY: &str = "I'm here to help with unit conversions. \
    Try asking about length, weight, or temperature conversions!";
