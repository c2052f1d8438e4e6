//! ReplyCategory - The canned reply a message was classified into

use serde::{Deserialize, Serialize};

/// Reply category, one per canned reply text
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ReplyCategory {
    Greeting,
    Price,
    Hours,
    Contact,
    Service,
    Thanks,
    Farewell,
    /// Nothing matched
    Fallback,
}

impl ReplyCategory {
    /// Canned reply text sent back to the customer
    pub fn reply_text(&self) -> &'static str {
        match self {
            ReplyCategory::Greeting => {
                "Hello! 👋 Welcome! How can we help you today? You can ask about our prices, opening hours, services or how to contact us."
            }
            ReplyCategory::Price => {
                "💰 Our prices depend on the service you need. Tell us what you're looking for and we'll send you a detailed quote."
            }
            ReplyCategory::Hours => {
                "🕘 We're open Monday to Friday 9:00 - 18:00 and Saturday 10:00 - 14:00. We're closed on Sundays and public holidays."
            }
            ReplyCategory::Contact => {
                "📞 You can reach us right here on WhatsApp, or by email at contact@example.com. We usually reply within one business day."
            }
            ReplyCategory::Service => {
                "🛠️ We offer consulting, installation, maintenance and support. Let us know which one you're interested in!"
            }
            ReplyCategory::Thanks => "😊 You're welcome! Is there anything else we can help you with?",
            ReplyCategory::Farewell => "👋 Goodbye! Thanks for reaching out, have a great day.",
            ReplyCategory::Fallback => {
                "Sorry, I didn't quite get that. 🤔 You can ask about our prices, opening hours, services or contact details."
            }
        }
    }
}

impl std::fmt::Display for ReplyCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReplyCategory::Greeting => write!(f, "greeting"),
            ReplyCategory::Price => write!(f, "price"),
            ReplyCategory::Hours => write!(f, "hours"),
            ReplyCategory::Contact => write!(f, "contact"),
            ReplyCategory::Service => write!(f, "service"),
            ReplyCategory::Thanks => write!(f, "thanks"),
            ReplyCategory::Farewell => write!(f, "farewell"),
            ReplyCategory::Fallback => write!(f, "fallback"),
        }
    }
}
