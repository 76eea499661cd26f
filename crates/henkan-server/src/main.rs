use anyhow::Context;
use axum::{middleware, routing::get, Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

mod application;
mod auth;
mod config;
mod models;
mod routes;

use application::{ChatService, ConversionService};
use config::ServerConfig;
use henkan::KeywordResponder;

/// Chat service with the built-in keyword rules
pub type AppChatService = ChatService<KeywordResponder>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub conversion_service: Arc<ConversionService>,
    pub chat_service: Arc<AppChatService>,
    pub api_key: Option<Arc<str>>,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            conversion_service: Arc::new(ConversionService::new(config.precision)),
            chat_service: Arc::new(ChatService::new(Arc::new(KeywordResponder::default()))),
            api_key: config.api_key.as_deref().map(Arc::from),
        }
    }
}

#[derive(Serialize, ToSchema)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
    timestamp: DateTime<Utc>,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is running", body = HealthCheck)
    ),
    tag = "Health"
)]
async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Henkan API is running - every unit finds its way home".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
    })
}

/// Build the full router
fn build_router(state: AppState) -> Router {
    // Protected routes (require authentication when an API key is set)
    let protected_routes = Router::new()
        .merge(routes::convert::router())
        .merge(routes::units::router())
        .merge(routes::chat::router())
        .layer(middleware::from_fn_with_state(state.clone(), auth::auth_middleware));

    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(protected_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("henkan_server=info,tower_http=info")),
        )
        .init();

    tracing::info!("📐 Henkan API initializing...");

    let config = ServerConfig::from_env()?;

    if config.api_key.is_some() {
        tracing::info!("🔐 API key authentication enabled");
    } else {
        tracing::warn!("⚠️  No HENKAN_API_KEY set - authentication disabled");
    }

    let state = AppState::new(&config);
    tracing::info!(
        "💬 Assistant: {} responder, results shown with {} decimals",
        state.chat_service.responder_name(),
        config.precision
    );

    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Henkan API ready on {}", config.bind_addr);

    axum::serve(listener, router).await.context("Server error")?;

    Ok(())
}
