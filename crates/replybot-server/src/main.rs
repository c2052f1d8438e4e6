use anyhow::Context;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod application;
mod config;
mod models;
mod routes;
#[cfg(test)]
mod testing;

use application::{Dispatcher, ReplyService};
use config::ServerConfig;
use replybot::{Moderation, ReplySender};
use replybot_integration_whatsapp::{WhatsAppIntegration, WhatsAppWebhookHandler};

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub dispatcher: Dispatcher,
}

impl AppState {
    pub fn new(config: ServerConfig, sender: Arc<dyn ReplySender>) -> Self {
        let webhook = match config.whatsapp.app_secret.as_deref() {
            Some(secret) => WhatsAppWebhookHandler::with_app_secret(secret),
            None => WhatsAppWebhookHandler::new(),
        };
        let moderation = Moderation::new(&config.blocked_keywords);
        let service = Arc::new(ReplyService::new(sender, webhook, moderation));

        Self {
            config: Arc::new(config),
            dispatcher: Dispatcher::new(service),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .merge(routes::health::router())
        .merge(routes::webhook::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("💬 Replybot initializing...");

    let config = ServerConfig::from_env();
    config.log_missing();

    let integration = WhatsAppIntegration::new(config.whatsapp.clone())
        .context("Failed to build WhatsApp client")?;
    if integration.is_configured() {
        tracing::info!(
            "📱 WhatsApp sender ready (Graph API {})",
            config.whatsapp.api_version
        );
    }
    if !config.blocked_keywords.is_empty() {
        tracing::info!(
            "🚫 Moderation enabled ({} keywords)",
            config.blocked_keywords.len()
        );
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = AppState::new(config, Arc::new(integration));
    let dispatcher = state.dispatcher.clone();
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Replybot listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    dispatcher.shutdown().await;
    tracing::info!("👋 Replybot stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("🛑 Shutdown signal received");
}
