//! Domain Services
//!
//! Stateless rules applied to inbound messages.

pub mod classifier;
mod moderation;

pub use classifier::{classify, reply_for, ReplyRule, REPLY_RULES};
pub use moderation::*;
