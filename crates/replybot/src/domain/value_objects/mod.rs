//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod message_kind;
mod reply_category;

pub use message_kind::*;
pub use reply_category::*;
