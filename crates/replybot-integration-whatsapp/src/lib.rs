//! WhatsApp Integration for Replybot
//!
//! This crate provides WhatsApp Cloud API integration for the replybot
//! keyword responder: parsing inbound webhook notifications, checking
//! their signatures, and sending text replies through the Graph API.
//!
//! # Usage
//!
//! ```rust,ignore
//! use replybot_integration_whatsapp::{WhatsAppConfig, WhatsAppIntegration};
//!
//! let config = WhatsAppConfig::new("access-token", "123456789");
//! let integration = WhatsAppIntegration::new(config)?;
//! ```

mod client;
mod config;
mod error;
mod integration;
mod webhook;

pub use client::{SendReceipt, WhatsAppClient};
pub use config::WhatsAppConfig;
pub use error::WhatsAppError;
pub use integration::WhatsAppIntegration;
pub use webhook::{sign_payload, WhatsAppWebhookHandler, SIGNATURE_HEADER};
