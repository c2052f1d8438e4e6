//! Message Entities
//!
//! Messages received from and sent back to the messaging platform.
//! Both live for a single webhook delivery and are never stored.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::MessageKind;

/// A message extracted from an inbound platform notification
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InboundMessage {
    /// Platform-specific sender ID (a phone number for WhatsApp)
    pub sender_id: String,
    /// Message type
    pub kind: MessageKind,
    /// Text to classify; empty when the platform sent none
    pub body: String,
}

impl InboundMessage {
    /// Create a new inbound message
    pub fn new(sender_id: impl Into<String>, kind: MessageKind, body: impl Into<String>) -> Self {
        Self {
            sender_id: sender_id.into(),
            kind,
            body: body.into(),
        }
    }

    /// Whether there is any text worth replying to
    pub fn has_body(&self) -> bool {
        !self.body.trim().is_empty()
    }
}

/// A reply to send back through the platform
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutboundMessage {
    /// Who receives the reply
    pub recipient_id: String,
    /// Reply text
    pub body: String,
}

impl OutboundMessage {
    /// Create a new outbound message
    pub fn new(recipient_id: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            recipient_id: recipient_id.into(),
            body: body.into(),
        }
    }

    /// Build the reply to an inbound message
    pub fn reply_to(message: &InboundMessage, body: impl Into<String>) -> Self {
        Self::new(message.sender_id.clone(), body)
    }
}
