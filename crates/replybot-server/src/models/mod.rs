//! API DTOs

mod health;
mod webhook;

pub use health::*;
pub use webhook::*;
