//! WhatsApp Cloud API client

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::config::WhatsAppConfig;
use crate::error::WhatsAppError;

const USER_AGENT: &str = "Replybot/0.1";

/// WhatsApp Cloud API client
pub struct WhatsAppClient {
    http: Client,
    config: WhatsAppConfig,
}

/// What the Graph API told us about an accepted message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendReceipt {
    /// WhatsApp message ID (`wamid.…`)
    pub message_id: Option<String>,
}

impl WhatsAppClient {
    /// Create a new WhatsApp client
    pub fn new(config: WhatsAppConfig) -> Result<Self, WhatsAppError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(WhatsAppError::Request)?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &WhatsAppConfig {
        &self.config
    }

    /// Send a text message
    ///
    /// Fails with `MissingCredentials` before touching the network when
    /// the access token or phone number ID is not configured.
    pub async fn send_text(&self, to: &str, body: &str) -> Result<SendReceipt, WhatsAppError> {
        let token = self
            .config
            .access_token
            .as_deref()
            .filter(|t| !t.trim().is_empty());
        let (Some(url), Some(token)) = (self.config.messages_url(), token) else {
            return Err(WhatsAppError::MissingCredentials(
                self.config.missing_credentials(),
            ));
        };

        debug!(to = %to, body_len = %body.len(), "Sending WhatsApp text message");

        let response = self
            .http
            .post(&url)
            .bearer_auth(token)
            .json(&TextMessageRequest::new(to, body))
            .send()
            .await
            .map_err(WhatsAppError::from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(WhatsAppError::Api {
                status: status.as_u16(),
                message: graph_error_message(&body),
                body,
            });
        }

        // A 2xx without a parsable body still means the message was accepted
        let receipt = response
            .json::<SendResponse>()
            .await
            .map(|r| SendReceipt {
                message_id: r.messages.into_iter().next().map(|m| m.id),
            })
            .unwrap_or_default();

        Ok(receipt)
    }
}

/// Extract `error.message` from a Graph API error body
fn graph_error_message(body: &str) -> Option<String> {
    let json: serde_json::Value = serde_json::from_str(body).ok()?;
    json.get("error")?
        .get("message")?
        .as_str()
        .map(str::to_string)
}

// ============================================
// Request/Response Types
// ============================================

#[derive(Debug, Serialize)]
struct TextMessageRequest<'a> {
    messaging_product: &'static str,
    to: &'a str,
    #[serde(rename = "type")]
    kind: &'static str,
    text: TextBody<'a>,
}

impl<'a> TextMessageRequest<'a> {
    fn new(to: &'a str, body: &'a str) -> Self {
        Self {
            messaging_product: "whatsapp",
            to,
            kind: "text",
            text: TextBody { body },
        }
    }
}

#[derive(Debug, Serialize)]
struct TextBody<'a> {
    body: &'a str,
}

#[derive(Debug, Deserialize)]
struct SendResponse {
    #[serde(default)]
    messages: Vec<SentMessage>,
}

#[derive(Debug, Deserialize)]
struct SentMessage {
    id: String,
}
