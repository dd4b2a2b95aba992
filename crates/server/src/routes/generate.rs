// crates/server/src/routes/generate.rs
//! Prompt fulfillment: resolve a prompt through the asset generator
//! and queue the resulting command for the user's plugin.

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use studiobridge_core::AssetRequest;
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub user_identity: Option<String>,
    pub prompt: Option<String>,
}

#[derive(Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct GenerateResponse {
    pub command: Value,
}

/// POST /api/generate - Turn a prompt into a queued plugin command.
///
/// The identity is trusted from the web session layer. The user's last
/// scene snapshot (if the plugin has synced one) rides along as context
/// for the generator. On generator failure the queue is untouched and
/// the error surfaces to the caller; the returned document is also
/// echoed back so the chat UI can render it.
pub async fn generate(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateRequest>,
) -> ApiResult<Json<GenerateResponse>> {
    let user = req
        .user_identity
        .ok_or(ApiError::MissingField("userIdentity"))?;
    let prompt = req.prompt.ok_or(ApiError::MissingField("prompt"))?;

    let scene_context = state.relay.scenes.fetch(&user);
    let document = state
        .generator
        .generate(AssetRequest {
            prompt,
            scene_context,
        })
        .await?;

    state.relay.queues.enqueue(&user, document.clone());
    info!(
        user = %user,
        generator = state.generator.name(),
        queued = state.relay.queues.pending(&user),
        "queued asset command"
    );
    Ok(Json(GenerateResponse { command: document }))
}

/// Create the generate routes router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/generate", post(generate))
}
