//! WhatsApp configuration

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE: &str = "https://graph.facebook.com";
pub const DEFAULT_API_VERSION: &str = "v19.0";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for WhatsApp Cloud API integration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhatsAppConfig {
    /// Bearer token for the Graph API
    pub access_token: Option<String>,
    /// Business phone number ID replies are sent from
    pub phone_number_id: Option<String>,
    /// App secret for `X-Hub-Signature-256` checks
    pub app_secret: Option<String>,
    /// Graph API base URL
    pub api_base: String,
    /// Graph API version segment
    pub api_version: String,
    /// Outbound request timeout
    pub timeout_secs: u64,
}

impl WhatsAppConfig {
    /// Create a new WhatsApp configuration with the sending credentials
    pub fn new(access_token: impl Into<String>, phone_number_id: impl Into<String>) -> Self {
        Self {
            access_token: Some(access_token.into()),
            phone_number_id: Some(phone_number_id.into()),
            ..Self::default()
        }
    }

    /// Set the app secret
    pub fn with_app_secret(mut self, app_secret: impl Into<String>) -> Self {
        self.app_secret = Some(app_secret.into());
        self
    }

    /// Set the Graph API base URL
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Set the Graph API version
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Names of the sending credentials that are missing or blank
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if is_blank(&self.access_token) {
            missing.push("WHATSAPP_ACCESS_TOKEN");
        }
        if is_blank(&self.phone_number_id) {
            missing.push("PHONE_NUMBER_ID");
        }
        missing
    }

    pub fn has_credentials(&self) -> bool {
        self.missing_credentials().is_empty()
    }

    /// Messages endpoint for the configured phone number ID
    pub fn messages_url(&self) -> Option<String> {
        let phone_number_id = self.phone_number_id.as_deref().filter(|s| !s.is_empty())?;
        Some(format!(
            "{}/{}/{}/messages",
            self.api_base.trim_end_matches('/'),
            self.api_version,
            phone_number_id
        ))
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

impl Default for WhatsAppConfig {
    fn default() -> Self {
        Self {
            access_token: None,
            phone_number_id: None,
            app_secret: None,
            api_base: DEFAULT_API_BASE.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
