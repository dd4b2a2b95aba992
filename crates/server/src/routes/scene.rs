// crates/server/src/routes/scene.rs
//! Scene mirror sync: the plugin pushes its object tree, the web UI
//! pulls it to give the prompt flow context.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::routes::require_token;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct PushSceneRequest {
    pub token: Option<String>,
    pub tree: Option<Value>,
}

#[derive(Serialize)]
pub struct PushSceneResponse {
    pub success: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PullSceneQuery {
    pub user_identity: Option<String>,
}

#[derive(Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct PullSceneResponse {
    pub tree: Option<Value>,
}

/// POST /api/plugin/scene - Plugin pushes its current object tree.
///
/// The stored snapshot is replaced wholesale; no shape validation is
/// done here (that belongs to the plugin/UI contract).
pub async fn push_scene(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PushSceneRequest>,
) -> ApiResult<Json<PushSceneResponse>> {
    let user = require_token(&state.relay, req.token.as_deref())?;
    let tree = req.tree.ok_or(ApiError::MissingField("tree"))?;

    state.relay.scenes.replace(&user, tree);
    debug!(user = %user, "scene snapshot replaced");
    Ok(Json(PushSceneResponse { success: true }))
}

/// GET /api/plugin/scene?userIdentity= - Web UI reads the mirror.
///
/// Keyed by raw user identity rather than a validated token, unlike
/// every other plugin route. Preserved from the original wire contract
/// the plugin and web UI already speak; the web session layer is
/// expected to gate access to this route.
pub async fn pull_scene(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PullSceneQuery>,
) -> ApiResult<Json<PullSceneResponse>> {
    let user = query
        .user_identity
        .ok_or(ApiError::MissingField("userIdentity"))?;

    Ok(Json(PullSceneResponse {
        tree: state.relay.scenes.fetch(&user),
    }))
}

/// Create the scene sync routes router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/plugin/scene", get(pull_scene).post(push_scene))
}
