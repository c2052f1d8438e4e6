//! Replybot API Routes
//!
//! - / - Health check
//! - /webhook - WhatsApp verification handshake and notifications
//! - /swagger-ui - OpenAPI documentation

pub mod health;
pub mod swagger;
pub mod webhook;
