//! Webhook Routes - WhatsApp Cloud API endpoint
//!
//! - GET  /webhook - Verification handshake
//! - POST /webhook - Inbound notifications, acknowledged before processing

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, Query, State},
    http::{HeaderMap, StatusCode},
    routing::get,
    Router,
};
use tracing::{info, warn};

use replybot_integration_whatsapp::SIGNATURE_HEADER;

use crate::models::{VerifyQuery, EVENT_RECEIVED};
use crate::AppState;

/// Check a verification handshake against the configured token
///
/// Returns the challenge to echo on success, otherwise the status to
/// answer with: 400 when `hub.mode` or `hub.verify_token` is missing,
/// 403 when they don't match.
pub fn verify_subscription(
    query: &VerifyQuery,
    expected_token: Option<&str>,
) -> Result<String, StatusCode> {
    let (Some(mode), Some(token)) = (query.mode.as_deref(), query.verify_token.as_deref()) else {
        return Err(StatusCode::BAD_REQUEST);
    };

    match expected_token {
        Some(expected) if mode == "subscribe" && token == expected => {
            Ok(query.challenge.clone().unwrap_or_default())
        }
        _ => Err(StatusCode::FORBIDDEN),
    }
}

/// Webhook verification handshake
#[utoipa::path(
    get,
    path = "/webhook",
    params(VerifyQuery),
    responses(
        (status = 200, description = "Verified, body is the challenge", body = String),
        (status = 400, description = "hub.mode or hub.verify_token missing"),
        (status = 403, description = "Mode or token mismatch")
    ),
    tag = "Webhook"
)]
pub async fn verify_webhook(
    State(state): State<AppState>,
    Query(query): Query<VerifyQuery>,
) -> Result<String, StatusCode> {
    let result = verify_subscription(&query, state.config.verify_token.as_deref());

    match &result {
        Ok(_) => info!("✅ Webhook verified"),
        Err(status) if *status == StatusCode::BAD_REQUEST => {
            warn!("Webhook verification missing hub.mode or hub.verify_token")
        }
        Err(_) if state.config.verify_token.is_none() => {
            warn!("Webhook verification refused: VERIFY_TOKEN not configured")
        }
        Err(_) => warn!(mode = ?query.mode, "Webhook verification failed"),
    }

    result
}

/// Receive an inbound notification
///
/// Always answers 200 `EVENT_RECEIVED`; processing happens afterwards.
#[utoipa::path(
    post,
    path = "/webhook",
    request_body(
        content = String,
        content_type = "application/json",
        description = "WhatsApp Cloud API notification"
    ),
    responses(
        (status = 200, description = "Notification acknowledged", body = String)
    ),
    tag = "Webhook"
)]
pub async fn receive_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> (StatusCode, &'static str) {
    match body {
        Ok(payload) => {
            let signature = headers
                .get(SIGNATURE_HEADER)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);
            state.dispatcher.dispatch(payload, signature);
        }
        Err(e) => warn!(error = %e, "Could not read webhook body"),
    }

    (StatusCode::OK, EVENT_RECEIVED)
}

pub fn router() -> Router<AppState> {
    Router::new().route("/webhook", get(verify_webhook).post(receive_webhook))
}
