//! WhatsApp webhook handling

use hmac::{Hmac, Mac};
use replybot::{DomainError, InboundMessage, MessageKind};
use serde_json::Value;
use sha2::Sha256;
use tracing::{debug, warn};

type HmacSha256 = Hmac<Sha256>;

/// Header Meta puts the payload signature in
pub const SIGNATURE_HEADER: &str = "x-hub-signature-256";

/// WhatsApp webhook handler for incoming notifications
#[derive(Debug, Clone, Default)]
pub struct WhatsAppWebhookHandler {
    /// App secret for signature verification (optional)
    app_secret: Option<String>,
}

impl WhatsAppWebhookHandler {
    /// Create a new webhook handler
    pub fn new() -> Self {
        Self { app_secret: None }
    }

    /// Create a webhook handler with signature verification
    pub fn with_app_secret(app_secret: impl Into<String>) -> Self {
        Self {
            app_secret: Some(app_secret.into()),
        }
    }

    pub fn verifies_signatures(&self) -> bool {
        self.app_secret.is_some()
    }

    /// Parse a raw notification body into JSON
    pub fn parse_payload(&self, payload: &[u8]) -> Result<Value, DomainError> {
        serde_json::from_slice(payload)
            .map_err(|e| DomainError::Validation(format!("Invalid JSON in webhook: {}", e)))
    }

    /// Extract the first message from a notification
    ///
    /// Walks `entry[0].changes[0].value.messages[0]`. Any missing level
    /// means the notification carries no message (status updates,
    /// read receipts) and yields `None`.
    pub fn extract_message(&self, notification: &Value) -> Option<InboundMessage> {
        let value = notification
            .get("entry")?
            .get(0)?
            .get("changes")?
            .get(0)?
            .get("value")?;

        let Some(message) = value.get("messages").and_then(|m| m.get(0)) else {
            debug!(
                has_statuses = value.get("statuses").is_some(),
                "Notification carries no message"
            );
            return None;
        };

        let sender_id = message
            .get("from")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())?;

        let kind = MessageKind::from(
            message
                .get("type")
                .and_then(Value::as_str)
                .unwrap_or("unknown"),
        );

        let body = match kind {
            MessageKind::Text => text_body(message),
            MessageKind::Interactive => interactive_title(message),
            MessageKind::Other(_) => None,
        }
        .unwrap_or_default();

        Some(InboundMessage::new(sender_id, kind, body))
    }

    /// Verify the `X-Hub-Signature-256` header against the raw body
    ///
    /// Always passes when no app secret is configured.
    pub fn verify_signature(&self, signature: Option<&str>, body: &[u8]) -> bool {
        let Some(ref secret) = self.app_secret else {
            return true;
        };

        let Some(signature) = signature else {
            warn!("Signature verification enabled but request has no signature");
            return false;
        };

        let Some(expected) = signature
            .strip_prefix("sha256=")
            .and_then(|hex_sig| hex::decode(hex_sig).ok())
        else {
            warn!("Malformed webhook signature header");
            return false;
        };

        let Ok(mut mac) = HmacSha256::new_from_slice(secret.as_bytes()) else {
            return false;
        };
        mac.update(body);
        mac.verify_slice(&expected).is_ok()
    }
}

/// `text.body` of a text message
fn text_body(message: &Value) -> Option<String> {
    message
        .get("text")?
        .get("body")?
        .as_str()
        .map(str::to_string)
}

/// Title of the button (or list row) the user picked
fn interactive_title(message: &Value) -> Option<String> {
    let interactive = message.get("interactive")?;
    interactive
        .get("button_reply")
        .or_else(|| interactive.get("list_reply"))?
        .get("title")?
        .as_str()
        .map(str::to_string)
}

/// Compute the `sha256=<hex>` signature Meta would send for a payload
pub fn sign_payload(secret: &str, payload: &[u8]) -> Result<String, DomainError> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| DomainError::Configuration(format!("Invalid app secret: {}", e)))?;
    mac.update(payload);
    Ok(format!("sha256={}", hex::encode(mac.finalize().into_bytes())))
}
