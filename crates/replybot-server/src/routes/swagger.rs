//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::HealthCheck;

#[derive(OpenApi)]
#[openapi(
    paths(
        super::health::health_check,
        super::webhook::verify_webhook,
        super::webhook::receive_webhook,
    ),
    info(
        title = "Replybot API",
        version = "0.1.0",
        description = "Keyword auto-responder for the WhatsApp Cloud API.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Webhook", description = "WhatsApp webhook verification and notifications"),
    ),
    components(schemas(HealthCheck)),
)]
pub struct ApiDoc;
