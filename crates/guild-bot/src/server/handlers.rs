//! Request gateway handlers
//!
//! The interactions endpoint verifies the request signature before touching
//! the payload, short-circuits liveness pings, and hands commands to the
//! dispatcher. Everything else is rejected at the door.

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{debug, warn};

use crate::commands;
use crate::interactions::{Interaction, InteractionResponse, InteractionType};

use super::state::AppState;

/// Header carrying the ed25519 signature
const SIGNATURE_HEADER: &str = "x-signature-ed25519";

/// Header carrying the signed timestamp
const TIMESTAMP_HEADER: &str = "x-signature-timestamp";

/// POST / - the Discord interactions endpoint
pub async fn handle_interaction(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let signature = headers.get(SIGNATURE_HEADER).and_then(|v| v.to_str().ok());
    let timestamp = headers.get(TIMESTAMP_HEADER).and_then(|v| v.to_str().ok());

    let verified = match (signature, timestamp) {
        (Some(signature), Some(timestamp)) => state.verifier().verify(timestamp, &body, signature),
        _ => false,
    };
    if !verified {
        warn!("Rejected interaction with bad request signature");
        return (StatusCode::UNAUTHORIZED, "Bad request signature").into_response();
    }

    let interaction: Interaction = match serde_json::from_slice(&body) {
        Ok(interaction) => interaction,
        Err(error) => {
            warn!(%error, "Rejected malformed interaction payload");
            return (StatusCode::BAD_REQUEST, "Malformed interaction payload").into_response();
        }
    };

    match interaction.interaction_type() {
        InteractionType::Ping => {
            debug!("Acknowledged liveness ping");
            Json(InteractionResponse::pong()).into_response()
        }
        InteractionType::ApplicationCommand => {
            let response = commands::dispatch(state.ctx(), &interaction).await;
            Json(response).into_response()
        }
        InteractionType::Unknown => {
            (StatusCode::BAD_REQUEST, "Unknown interaction type").into_response()
        }
    }
}

/// GET / - simple liveness text
pub async fn liveness() -> &'static str {
    "MapleStory Guild Bot is running!"
}

/// GET /health - readiness probe including Redis connectivity
pub async fn health_check(State(state): State<AppState>) -> Response {
    let redis_healthy = match state.redis() {
        Some(pool) => pool.health_check().await.is_ok(),
        None => true,
    };

    let status = if redis_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(json!({ "redis": redis_healthy }))).into_response()
}
