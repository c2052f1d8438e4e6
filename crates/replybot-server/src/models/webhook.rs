//! Webhook DTOs

use serde::Deserialize;
use utoipa::IntoParams;

/// Body returned for every accepted notification
pub const EVENT_RECEIVED: &str = "EVENT_RECEIVED";

/// Query parameters of the verification handshake
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct VerifyQuery {
    /// Should be "subscribe"
    #[serde(rename = "hub.mode")]
    pub mode: Option<String>,
    /// Token configured in the Meta app dashboard
    #[serde(rename = "hub.verify_token")]
    pub verify_token: Option<String>,
    /// Echoed back on success
    #[serde(rename = "hub.challenge")]
    pub challenge: Option<String>,
}
