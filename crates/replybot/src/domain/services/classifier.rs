//! Reply Classifier
//!
//! Maps free text to a canned reply with first-match substring rules.
//! Matching is plain containment on the trimmed, lowercased text, so
//! "this" matches the greeting rule through "hi". Rule order is the
//! only tie-breaker.

use crate::domain::value_objects::ReplyCategory;

/// A set of trigger substrings and the category they select
#[derive(Debug, Clone, Copy)]
pub struct ReplyRule {
    pub triggers: &'static [&'static str],
    pub category: ReplyCategory,
}

impl ReplyRule {
    /// Whether any trigger occurs in already-normalized text
    pub fn matches(&self, normalized: &str) -> bool {
        self.triggers.iter().any(|t| normalized.contains(t))
    }
}

/// Reply rules in priority order
pub const REPLY_RULES: &[ReplyRule] = &[
    ReplyRule {
        triggers: &["hi", "hello", "hey"],
        category: ReplyCategory::Greeting,
    },
    ReplyRule {
        triggers: &["price", "how much", "cost"],
        category: ReplyCategory::Price,
    },
    ReplyRule {
        triggers: &["hours", "open", "time"],
        category: ReplyCategory::Hours,
    },
    ReplyRule {
        triggers: &["contact", "number", "email"],
        category: ReplyCategory::Contact,
    },
    ReplyRule {
        triggers: &["service", "offer", "provide"],
        category: ReplyCategory::Service,
    },
    ReplyRule {
        triggers: &["thank", "thanks"],
        category: ReplyCategory::Thanks,
    },
    ReplyRule {
        triggers: &["bye", "goodbye"],
        category: ReplyCategory::Farewell,
    },
];

/// Classify message text into a reply category
pub fn classify(text: &str) -> ReplyCategory {
    let normalized = text.trim().to_lowercase();

    REPLY_RULES
        .iter()
        .find(|rule| rule.matches(&normalized))
        .map(|rule| rule.category)
        .unwrap_or(ReplyCategory::Fallback)
}

/// Canned reply text for message text
pub fn reply_for(text: &str) -> &'static str {
    classify(text).reply_text()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_wins_over_price() {
        assert_eq!(
            classify("Hi there, what's your price?"),
            ReplyCategory::Greeting
        );
    }

    #[test]
    fn test_each_category() {
        assert_eq!(classify("Hello"), ReplyCategory::Greeting);
        assert_eq!(classify("How much is it?"), ReplyCategory::Price);
        assert_eq!(classify("when are you open"), ReplyCategory::Hours);
        assert_eq!(classify("what is your email"), ReplyCategory::Contact);
        assert_eq!(classify("what do you offer"), ReplyCategory::Service);
        assert_eq!(classify("thank you"), ReplyCategory::Thanks);
        assert_eq!(classify("bye"), ReplyCategory::Farewell);
        assert_eq!(classify("xyz123"), ReplyCategory::Fallback);
    }

    #[test]
    fn test_normalizes_case_and_whitespace() {
        assert_eq!(classify("   GOODBYE  "), ReplyCategory::Farewell);
        assert_eq!(classify("COST?"), ReplyCategory::Price);
    }

    #[test]
    fn test_substring_not_whole_word() {
        // "this" contains "hi"
        assert_eq!(classify("is this thing on"), ReplyCategory::Greeting);
        // "reopen" contains "open"
        assert_eq!(classify("did you reopen"), ReplyCategory::Hours);
    }

    #[test]
    fn test_empty_text_falls_back() {
        assert_eq!(classify(""), ReplyCategory::Fallback);
        assert_eq!(reply_for("  "), ReplyCategory::Fallback.reply_text());
    }

    #[test]
    fn test_deterministic() {
        let input = "Thanks, goodbye";
        assert_eq!(classify(input), classify(input));
        assert_eq!(classify(input), ReplyCategory::Thanks);
    }
}
