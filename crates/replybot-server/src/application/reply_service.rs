//! Reply Application Service (Use Case)
//!
//! Turns one raw webhook notification into at most one reply:
//! signature check, message extraction, moderation, classification, send.

use std::sync::Arc;
use tracing::{debug, info, warn};

use replybot::{classify, MessageKind, Moderation, OutboundMessage, ReplyCategory, ReplySender};
use replybot_integration_whatsapp::WhatsAppWebhookHandler;

/// What happened to a notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// No message in the notification (status update, malformed body)
    Ignored,
    /// Signature check failed
    Rejected,
    /// Message type we don't reply to
    Unsupported(MessageKind),
    /// Message had no text
    EmptyBody,
    /// Text hit the moderation blocklist
    Moderated,
    Replied(ReplyCategory),
    SendFailed(ReplyCategory),
}

impl DispatchOutcome {
    pub fn attempted_send(&self) -> bool {
        matches!(
            self,
            DispatchOutcome::Replied(_) | DispatchOutcome::SendFailed(_)
        )
    }
}

impl std::fmt::Display for DispatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DispatchOutcome::Ignored => write!(f, "ignored"),
            DispatchOutcome::Rejected => write!(f, "rejected"),
            DispatchOutcome::Unsupported(kind) => write!(f, "unsupported ({})", kind),
            DispatchOutcome::EmptyBody => write!(f, "empty body"),
            DispatchOutcome::Moderated => write!(f, "moderated"),
            DispatchOutcome::Replied(category) => write!(f, "replied ({})", category),
            DispatchOutcome::SendFailed(category) => write!(f, "send failed ({})", category),
        }
    }
}

/// Application service for inbound notifications
pub struct ReplyService {
    sender: Arc<dyn ReplySender>,
    webhook: WhatsAppWebhookHandler,
    moderation: Moderation,
}

impl ReplyService {
    pub fn new(
        sender: Arc<dyn ReplySender>,
        webhook: WhatsAppWebhookHandler,
        moderation: Moderation,
    ) -> Self {
        Self {
            sender,
            webhook,
            moderation,
        }
    }

    /// Handle a raw notification body
    ///
    /// Never fails: every problem ends up as an outcome plus a log line.
    pub async fn handle(&self, payload: &[u8], signature: Option<&str>) -> DispatchOutcome {
        if !self.webhook.verify_signature(signature, payload) {
            warn!("Webhook signature mismatch, dropping notification");
            return DispatchOutcome::Rejected;
        }

        let notification = match self.webhook.parse_payload(payload) {
            Ok(notification) => notification,
            Err(e) => {
                debug!(error = %e, body_len = payload.len(), "Ignoring unparsable notification");
                return DispatchOutcome::Ignored;
            }
        };

        let Some(message) = self.webhook.extract_message(&notification) else {
            return DispatchOutcome::Ignored;
        };

        if !message.kind.is_supported() {
            info!(
                sender_id = %message.sender_id,
                kind = %message.kind,
                "Dropping unsupported message type"
            );
            return DispatchOutcome::Unsupported(message.kind);
        }

        if !message.has_body() {
            debug!(sender_id = %message.sender_id, kind = %message.kind, "Message has no text");
            return DispatchOutcome::EmptyBody;
        }

        if self.moderation.is_blocked(&message.body) {
            info!(sender_id = %message.sender_id, "Message blocked by moderation");
            return DispatchOutcome::Moderated;
        }

        let category = classify(&message.body);
        info!(
            sender_id = %message.sender_id,
            category = %category,
            "Replying to {} message",
            message.kind
        );

        let reply = OutboundMessage::reply_to(&message, category.reply_text());
        match self.sender.send(&reply).await {
            Ok(()) => DispatchOutcome::Replied(category),
            Err(e) => {
                debug!(
                    sender = self.sender.name(),
                    error = %e,
                    "Reply not delivered"
                );
                DispatchOutcome::SendFailed(category)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{notification, RecordingSender};
    use replybot_integration_whatsapp::sign_payload;
    use serde_json::json;

    fn service(sender: Arc<RecordingSender>) -> ReplyService {
        ReplyService::new(sender, WhatsAppWebhookHandler::new(), Moderation::default())
    }

    fn body(value: serde_json::Value) -> Vec<u8> {
        serde_json::to_vec(&value).unwrap()
    }

    #[tokio::test]
    async fn test_text_message_gets_reply() {
        let sender = Arc::new(RecordingSender::default());
        let payload = body(notification(json!({
            "from": "16505551234",
            "type": "text",
            "text": { "body": "Hi there, what's your price?" }
        })));

        let outcome = service(sender.clone()).handle(&payload, None).await;

        assert_eq!(outcome, DispatchOutcome::Replied(ReplyCategory::Greeting));
        let sent = sender.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].recipient_id, "16505551234");
        assert_eq!(sent[0].body, ReplyCategory::Greeting.reply_text());
    }

    #[tokio::test]
    async fn test_interactive_title_is_classified() {
        let sender = Arc::new(RecordingSender::default());
        let payload = body(notification(json!({
            "from": "16505551234",
            "type": "interactive",
            "interactive": {
                "type": "button_reply",
                "button_reply": { "id": "b1", "title": "Opening hours" }
            }
        })));

        let outcome = service(sender.clone()).handle(&payload, None).await;

        assert_eq!(outcome, DispatchOutcome::Replied(ReplyCategory::Hours));
        assert_eq!(sender.sent().len(), 1);
    }

    #[tokio::test]
    async fn test_no_messages_no_send() {
        let sender = Arc::new(RecordingSender::default());
        let payload = body(json!({
            "entry": [{ "changes": [{ "value": { "statuses": [{ "status": "read" }] } }] }]
        }));

        let outcome = service(sender.clone()).handle(&payload, None).await;

        assert_eq!(outcome, DispatchOutcome::Ignored);
        assert!(sender.sent().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_body_is_ignored() {
        let sender = Arc::new(RecordingSender::default());
        let svc = service(sender.clone());

        assert_eq!(svc.handle(b"", None).await, DispatchOutcome::Ignored);
        assert_eq!(svc.handle(b"{oops", None).await, DispatchOutcome::Ignored);
        assert!(sender.sent().is_empty());
    }

    #[tokio::test]
    async fn test_text_without_body_no_send() {
        let sender = Arc::new(RecordingSender::default());
        let payload = body(notification(json!({ "from": "16505551234", "type": "text" })));

        let outcome = service(sender.clone()).handle(&payload, None).await;

        assert_eq!(outcome, DispatchOutcome::EmptyBody);
        assert!(!outcome.attempted_send());
        assert!(sender.sent().is_empty());
    }

    #[tokio::test]
    async fn test_unsupported_type_dropped() {
        let sender = Arc::new(RecordingSender::default());
        let payload = body(notification(json!({
            "from": "16505551234",
            "type": "audio",
            "audio": { "id": "media-1" }
        })));

        let outcome = service(sender.clone()).handle(&payload, None).await;

        assert_eq!(
            outcome,
            DispatchOutcome::Unsupported(MessageKind::Other("audio".to_string()))
        );
        assert!(sender.sent().is_empty());
    }

    #[tokio::test]
    async fn test_moderated_message_no_send() {
        let sender = Arc::new(RecordingSender::default());
        let svc = ReplyService::new(
            sender.clone(),
            WhatsAppWebhookHandler::new(),
            Moderation::new(["casino"]),
        );
        let payload = body(notification(json!({
            "from": "16505551234",
            "type": "text",
            "text": { "body": "Hello, free CASINO chips" }
        })));

        assert_eq!(svc.handle(&payload, None).await, DispatchOutcome::Moderated);
        assert!(sender.sent().is_empty());
    }

    #[tokio::test]
    async fn test_signature_required_when_secret_set() {
        let sender = Arc::new(RecordingSender::default());
        let svc = ReplyService::new(
            sender.clone(),
            WhatsAppWebhookHandler::with_app_secret("app-secret"),
            Moderation::default(),
        );
        let payload = body(notification(json!({
            "from": "16505551234",
            "type": "text",
            "text": { "body": "bye" }
        })));

        assert_eq!(svc.handle(&payload, None).await, DispatchOutcome::Rejected);
        assert_eq!(
            svc.handle(&payload, Some("sha256=deadbeef")).await,
            DispatchOutcome::Rejected
        );
        assert!(sender.sent().is_empty());

        let signature = sign_payload("app-secret", &payload).unwrap();
        assert_eq!(
            svc.handle(&payload, Some(&signature)).await,
            DispatchOutcome::Replied(ReplyCategory::Farewell)
        );
        assert_eq!(sender.sent().len(), 1);
    }

    #[tokio::test]
    async fn test_send_failure_is_reported_not_raised() {
        let sender = Arc::new(RecordingSender::failing());
        let payload = body(notification(json!({
            "from": "16505551234",
            "type": "text",
            "text": { "body": "xyz123" }
        })));

        let outcome = service(sender.clone()).handle(&payload, None).await;

        assert_eq!(outcome, DispatchOutcome::SendFailed(ReplyCategory::Fallback));
        assert!(outcome.attempted_send());
        assert_eq!(sender.sent().len(), 1);
    }
}
