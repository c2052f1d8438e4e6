//! Replybot Domain Library
//!
//! Core domain types and interfaces for the replybot keyword responder.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Inbound and outbound messages
//!   - `value_objects/`: Immutable value types (MessageKind, ReplyCategory)
//!   - `services/`: Reply classifier and moderation blocklist
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `ReplySender`: Outbound reply delivery
//!
//! # Usage
//!
//! ```rust
//! use replybot::{classify, ReplyCategory};
//!
//! assert_eq!(classify("Hi there, what's your price?"), ReplyCategory::Greeting);
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    classify, reply_for, DomainError, InboundMessage, MessageKind, Moderation, OutboundMessage,
    ReplyCategory, ReplyRule, REPLY_RULES,
};
pub use ports::ReplySender;
