//! Domain Entities
//!
//! - InboundMessage: Message extracted from a platform notification
//! - OutboundMessage: Canned reply on its way back to the sender

mod message;

pub use message::*;
