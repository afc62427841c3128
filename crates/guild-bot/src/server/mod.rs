//! Server setup and initialization
//!
//! Builds the axum application, wires dependencies, and runs the HTTP
//! server plus the background reminder task.

mod handlers;
mod state;

pub use state::AppState;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::http::{header, StatusCode};
use axum::{
    routing::{get, post},
    Router,
};
use guild_common::{AppConfig, AppError};
use guild_store::{RedisMemberRepository, RedisPool};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Header name for request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

use crate::commands::BotContext;
use crate::scheduled::run_reminder_loop;
use crate::verify::SignatureVerifier;
use crate::webhook::WebhookClient;

/// Build the complete axum application with routes and middleware
pub fn create_app(state: AppState) -> Router {
    // Any non-POST method on the interactions path answers with the
    // liveness text rather than a bare 405.
    Router::new()
        .route(
            "/",
            post(handlers::handle_interaction)
                .get(handlers::liveness)
                .fallback(handlers::liveness),
        )
        .route("/health", get(handlers::health_check))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(
                    header::HeaderName::from_static(REQUEST_ID_HEADER),
                    MakeRequestUuid,
                ))
                .layer(PropagateRequestIdLayer::new(header::HeaderName::from_static(
                    REQUEST_ID_HEADER,
                )))
                .layer(TraceLayer::new_for_http())
                // Timeout (returns 503 Service Unavailable on timeout)
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::SERVICE_UNAVAILABLE,
                    Duration::from_secs(10),
                )),
        )
        .with_state(state)
}

/// Initialize all dependencies and create the application state
pub fn create_app_state(config: &AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to Redis...");
    let pool = RedisPool::from_config(&config.redis)
        .map_err(|e| AppError::config(format!("Redis pool: {e}")))?;

    let verifier = SignatureVerifier::from_hex(&config.discord.public_key)?;

    let webhooks = WebhookClient::new(Duration::from_secs(config.webhooks.timeout_secs))
        .map_err(|e| AppError::config(format!("Webhook client: {e}")))?;

    let members = Arc::new(RedisMemberRepository::new(pool.clone()));
    let ctx = BotContext::new(
        members,
        webhooks,
        config.webhooks.carry_channel.clone(),
        config.discord.officer_role_id.clone(),
    );

    Ok(AppState::new(ctx, verifier).with_redis(pool))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete bot: HTTP endpoint plus the weekly reminder task
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .server
        .address()
        .parse()
        .map_err(|e| AppError::config(format!("Invalid server address: {e}")))?;

    let state = create_app_state(&config)?;

    // The reminder runs independently of request handling; without a
    // configured webhook there is nothing to schedule.
    if let Some(url) = config.webhooks.boss_reminder.clone() {
        let client = WebhookClient::new(Duration::from_secs(config.webhooks.timeout_secs))
            .map_err(|e| AppError::config(format!("Webhook client: {e}")))?;
        tokio::spawn(run_reminder_loop(client, url, config.reminder.cron.clone()));
    } else {
        info!("BOSS_REMINDER_WEBHOOK not set, weekly reminder disabled");
    }

    let app = create_app(state);
    run_server(app, addr).await
}
