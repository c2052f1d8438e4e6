//! ReplySender implementation for WhatsApp

use async_trait::async_trait;
use replybot::{DomainError, OutboundMessage, ReplySender};
use tracing::{error, info};

use crate::client::WhatsAppClient;
use crate::config::WhatsAppConfig;
use crate::error::WhatsAppError;
use crate::webhook::WhatsAppWebhookHandler;

/// WhatsApp integration implementing ReplySender trait
pub struct WhatsAppIntegration {
    client: WhatsAppClient,
    webhook: WhatsAppWebhookHandler,
}

impl WhatsAppIntegration {
    /// Create a new WhatsApp integration
    pub fn new(config: WhatsAppConfig) -> Result<Self, WhatsAppError> {
        let webhook = match config.app_secret.as_deref().filter(|s| !s.is_empty()) {
            Some(secret) => WhatsAppWebhookHandler::with_app_secret(secret),
            None => WhatsAppWebhookHandler::new(),
        };
        let client = WhatsAppClient::new(config)?;
        Ok(Self { client, webhook })
    }

    /// Webhook handler sharing this integration's app secret
    pub fn webhook(&self) -> &WhatsAppWebhookHandler {
        &self.webhook
    }

    pub fn client(&self) -> &WhatsAppClient {
        &self.client
    }
}

/// Log a failed send with the detail its category carries
fn log_send_error(recipient_id: &str, err: &WhatsAppError) {
    match err {
        WhatsAppError::MissingCredentials(missing) => {
            error!(
                recipient_id = %recipient_id,
                missing = ?missing,
                "Cannot send WhatsApp reply: credentials not configured"
            );
        }
        WhatsAppError::Api {
            status,
            message,
            body,
        } => {
            error!(
                recipient_id = %recipient_id,
                status = %status,
                api_message = message.as_deref().unwrap_or("-"),
                body = %body,
                "WhatsApp API rejected the reply"
            );
        }
        WhatsAppError::NoResponse(e) => {
            error!(
                recipient_id = %recipient_id,
                timeout = e.is_timeout(),
                connect = e.is_connect(),
                error = %e,
                "No response from WhatsApp API"
            );
        }
        WhatsAppError::Request(e) => {
            error!(
                recipient_id = %recipient_id,
                error = %e,
                "Failed to build WhatsApp API request"
            );
        }
    }
}

#[async_trait]
impl ReplySender for WhatsAppIntegration {
    async fn send(&self, message: &OutboundMessage) -> Result<(), DomainError> {
        match self
            .client
            .send_text(&message.recipient_id, &message.body)
            .await
        {
            Ok(receipt) => {
                info!(
                    recipient_id = %message.recipient_id,
                    message_id = receipt.message_id.as_deref().unwrap_or("-"),
                    "WhatsApp reply sent"
                );
                Ok(())
            }
            Err(e) => {
                log_send_error(&message.recipient_id, &e);
                Err(e.into())
            }
        }
    }

    fn name(&self) -> &str {
        "whatsapp"
    }

    fn is_configured(&self) -> bool {
        self.client.config().has_credentials()
    }
}
