// crates/server/src/routes/plugin.rs
//! The plugin-facing polling protocol: poll, heartbeat, status.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::error::ApiResult;
use crate::routes::require_token;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct TokenQuery {
    pub token: Option<String>,
}

#[derive(Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct PollResponse {
    pub commands: Vec<Value>,
}

#[derive(Serialize)]
pub struct HeartbeatResponse {
    pub ok: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct StatusResponse {
    pub connected: bool,
    pub last_seen: u64,
}

/// GET /api/plugin/poll - Drain all pending commands for the caller.
///
/// Touch comes before drain: a poll is recorded as proof of life even
/// when the queue turns out to be empty. Delivery is at-most-once — if
/// the response is lost in transit after the drain, the commands are
/// gone. Callers must not re-queue on error; the plugin may already
/// have applied them.
pub async fn poll(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TokenQuery>,
) -> ApiResult<Json<PollResponse>> {
    let user = require_token(&state.relay, query.token.as_deref())?;

    state.relay.liveness.touch(&user);
    let commands = state.relay.queues.drain_all(&user);
    if commands.is_empty() {
        debug!(user = %user, "poll: queue empty");
    } else {
        info!(user = %user, count = commands.len(), "delivered queued commands");
    }
    Ok(Json(PollResponse { commands }))
}

/// POST /api/plugin/heartbeat - Refresh liveness without draining.
///
/// Used when the plugin has nothing to poll for but wants to keep its
/// connected status fresh.
pub async fn heartbeat(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TokenQuery>,
) -> ApiResult<Json<HeartbeatResponse>> {
    let user = require_token(&state.relay, query.token.as_deref())?;

    state.relay.liveness.touch(&user);
    debug!(user = %user, "heartbeat");
    Ok(Json(HeartbeatResponse { ok: true }))
}

/// GET /api/plugin/status - Report plugin connectivity. No side effect.
pub async fn status(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TokenQuery>,
) -> ApiResult<Json<StatusResponse>> {
    let user = require_token(&state.relay, query.token.as_deref())?;

    let liveness = state.relay.liveness.status(&user);
    Ok(Json(StatusResponse {
        connected: liveness.connected,
        last_seen: liveness.last_seen,
    }))
}

/// Create the plugin protocol routes router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/plugin/poll", get(poll))
        .route("/plugin/heartbeat", post(heartbeat))
        .route("/plugin/status", get(status))
}
