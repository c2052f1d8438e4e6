//! MessageKind - Type tag of an inbound platform message

use serde::{Deserialize, Serialize};

/// Inbound message type
///
/// Only `Text` and `Interactive` carry a body we can reply to.
/// Everything else (images, audio, locations, ...) is kept as `Other`
/// with the raw type name for logging.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    Text,
    Interactive,
    Other(String),
}

impl MessageKind {
    /// Whether a reply body can be extracted from this kind
    pub fn is_supported(&self) -> bool {
        !matches!(self, MessageKind::Other(_))
    }
}

impl std::fmt::Display for MessageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageKind::Text => write!(f, "text"),
            MessageKind::Interactive => write!(f, "interactive"),
            MessageKind::Other(kind) => write!(f, "{}", kind),
        }
    }
}

impl From<&str> for MessageKind {
    fn from(s: &str) -> Self {
        match s {
            "text" => MessageKind::Text,
            "interactive" => MessageKind::Interactive,
            other => MessageKind::Other(other.to_string()),
        }
    }
}
