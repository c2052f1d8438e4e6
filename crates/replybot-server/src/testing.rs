//! Test fixtures shared by unit tests

use async_trait::async_trait;
use replybot::{DomainError, OutboundMessage, ReplySender};
use serde_json::Value;
use std::sync::Mutex;

/// ReplySender that records every message instead of sending it
#[derive(Default)]
pub struct RecordingSender {
    sent: Mutex<Vec<OutboundMessage>>,
    fail: bool,
}

impl RecordingSender {
    /// Records sends but reports each one as failed
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<OutboundMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReplySender for RecordingSender {
    async fn send(&self, message: &OutboundMessage) -> Result<(), DomainError> {
        self.sent.lock().unwrap().push(message.clone());
        if self.fail {
            return Err(DomainError::ExternalService("send failed".to_string()));
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "recording"
    }
}

/// Wrap a single message in a WhatsApp notification envelope
pub fn notification(message: Value) -> Value {
    serde_json::json!({
        "object": "whatsapp_business_account",
        "entry": [{
            "id": "102290129340398",
            "changes": [{
                "field": "messages",
                "value": {
                    "messaging_product": "whatsapp",
                    "metadata": { "phone_number_id": "106540352242922" },
                    "contacts": [{ "profile": { "name": "Kerry Fisher" }, "wa_id": "16505551234" }],
                    "messages": [message]
                }
            }]
        }]
    })
}
