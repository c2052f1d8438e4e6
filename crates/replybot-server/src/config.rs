//! Server configuration
//!
//! Loaded once at startup from the environment (after `.env`) and
//! shared with handlers through `AppState`.

use replybot_integration_whatsapp::WhatsAppConfig;

pub const DEFAULT_PORT: u16 = 3000;

/// Process-wide configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen port
    pub port: u16,
    /// Secret for the `hub.verify_token` handshake
    pub verify_token: Option<String>,
    /// Outbound sending and signature settings
    pub whatsapp: WhatsAppConfig,
    /// Keywords that suppress any reply
    pub blocked_keywords: Vec<String>,
}

impl ServerConfig {
    /// Load configuration from process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(port = %raw, "⚠️  Invalid PORT, using {}", DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let mut whatsapp = WhatsAppConfig {
            access_token: get("WHATSAPP_ACCESS_TOKEN"),
            phone_number_id: get("PHONE_NUMBER_ID"),
            app_secret: get("APP_SECRET"),
            ..WhatsAppConfig::default()
        };
        if let Some(version) = get("GRAPH_API_VERSION") {
            whatsapp = whatsapp.with_api_version(version);
        }
        if let Some(base) = get("GRAPH_API_BASE") {
            whatsapp = whatsapp.with_api_base(base);
        }

        let blocked_keywords = get("BLOCKED_KEYWORDS")
            .map(|raw| parse_keywords(&raw))
            .unwrap_or_default();

        Self {
            port,
            verify_token: get("VERIFY_TOKEN"),
            whatsapp,
            blocked_keywords,
        }
    }

    /// Warn about missing secrets; the server keeps running either way
    pub fn log_missing(&self) {
        if self.verify_token.is_none() {
            tracing::warn!("⚠️  No VERIFY_TOKEN set - webhook verification will be refused");
        }
        for name in self.whatsapp.missing_credentials() {
            tracing::warn!("⚠️  No {} set - replies will not be sent", name);
        }
        if self.whatsapp.app_secret.is_none() {
            tracing::warn!("⚠️  No APP_SECRET set - webhook signatures not checked");
        } else {
            tracing::info!("🔐 Webhook signature verification enabled");
        }
    }
}

fn parse_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]);
        assert_eq!(config.port, 3000);
        assert!(config.verify_token.is_none());
        assert!(config.blocked_keywords.is_empty());
        assert!(!config.whatsapp.has_credentials());
        assert_eq!(config.whatsapp.timeout_secs, 10);
        assert_eq!(config.whatsapp.api_version, "v19.0");
    }

    #[test]
    fn test_full_config() {
        let config = load(&[
            ("PORT", "8080"),
            ("VERIFY_TOKEN", "verify-me"),
            ("PHONE_NUMBER_ID", "106540352242922"),
            ("WHATSAPP_ACCESS_TOKEN", "EAAG-token"),
            ("APP_SECRET", "app-secret"),
            ("GRAPH_API_VERSION", "v20.0"),
            ("BLOCKED_KEYWORDS", "spam, scam ,,"),
        ]);

        assert_eq!(config.port, 8080);
        assert_eq!(config.verify_token.as_deref(), Some("verify-me"));
        assert!(config.whatsapp.has_credentials());
        assert_eq!(config.whatsapp.app_secret.as_deref(), Some("app-secret"));
        assert_eq!(
            config.whatsapp.messages_url().as_deref(),
            Some("https://graph.facebook.com/v20.0/106540352242922/messages")
        );
        assert_eq!(config.blocked_keywords, vec!["spam", "scam"]);
    }

    #[test]
    fn test_invalid_port_falls_back() {
        assert_eq!(load(&[("PORT", "not-a-port")]).port, 3000);
        assert_eq!(load(&[("PORT", "70000")]).port, 3000);
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = load(&[("VERIFY_TOKEN", "   "), ("WHATSAPP_ACCESS_TOKEN", "")]);
        assert!(config.verify_token.is_none());
        assert!(config.whatsapp.access_token.is_none());
    }
}
