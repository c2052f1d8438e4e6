//! Application Layer
//!
//! Use cases wiring the domain rules to the WhatsApp integration.

mod dispatcher;
mod reply_service;

pub use dispatcher::Dispatcher;
pub use reply_service::{DispatchOutcome, ReplyService};
