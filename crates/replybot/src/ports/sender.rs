//! Reply Sender Port
//!
//! Abstract interface for delivering a reply back through the
//! messaging platform.

use async_trait::async_trait;

use crate::domain::entities::OutboundMessage;
use crate::domain::errors::DomainError;

/// Outbound reply delivery
///
/// Implementations perform a single best-effort send: no retry,
/// no queueing. Callers on the webhook path log the error and move on.
///
/// # Example
///
/// ```rust,ignore
/// use replybot::ports::ReplySender;
///
/// struct WhatsAppIntegration { /* reqwest client */ }
///
/// #[async_trait]
/// impl ReplySender for WhatsAppIntegration {
///     async fn send(&self, message: &OutboundMessage) -> Result<(), DomainError> {
///         // POST to the Graph API messages endpoint
///     }
///
///     fn name(&self) -> &str {
///         "whatsapp"
///     }
/// }
/// ```
#[async_trait]
pub trait ReplySender: Send + Sync {
    /// Send a reply to its recipient
    async fn send(&self, message: &OutboundMessage) -> Result<(), DomainError>;

    /// Get the platform name (e.g., "whatsapp")
    fn name(&self) -> &str;

    /// Whether the sender has the credentials it needs
    fn is_configured(&self) -> bool {
        true
    }
}
