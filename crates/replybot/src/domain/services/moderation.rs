//! Moderation - Keyword blocklist
//!
//! Messages containing a blocked keyword get no reply at all.

/// Case-insensitive keyword blocklist
#[derive(Debug, Clone, Default)]
pub struct Moderation {
    blocked: Vec<String>,
}

impl Moderation {
    /// Create a blocklist; blank keywords are dropped
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let blocked = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        Self { blocked }
    }

    /// Whether the text contains any blocked keyword
    pub fn is_blocked(&self, text: &str) -> bool {
        if self.blocked.is_empty() {
            return false;
        }
        let lowered = text.to_lowercase();
        self.blocked.iter().any(|k| lowered.contains(k.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.blocked.is_empty()
    }

    pub fn len(&self) -> usize {
        self.blocked.len()
    }
}
