//! Health Route

use axum::{routing::get, Json, Router};
use chrono::Utc;

use crate::models::HealthCheck;
use crate::AppState;

/// Service status
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is running", body = HealthCheck)
    ),
    tag = "Health"
)]
pub async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Replybot is running - listening for WhatsApp messages".to_string(),
        timestamp: Utc::now(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_check() {
        let Json(health) = health_check().await;
        assert_eq!(health.status, "ok");

        let json = serde_json::to_value(&health).unwrap();
        assert!(json["timestamp"].is_string());
        assert!(json["message"].is_string());
    }
}
