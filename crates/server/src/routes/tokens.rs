// crates/server/src/routes/tokens.rs
//! Plugin token issuance.

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueTokenRequest {
    pub user_identity: Option<String>,
}

#[derive(Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct IssueTokenResponse {
    pub token: String,
}

/// POST /api/plugin/token - Issue a fresh plugin token.
///
/// The identity is trusted as-is: it comes from the already
/// authenticated web session, not from a token. Issuing does not
/// revoke previously issued tokens for the same identity.
pub async fn issue_token(
    State(state): State<Arc<AppState>>,
    Json(req): Json<IssueTokenRequest>,
) -> ApiResult<Json<IssueTokenResponse>> {
    let user = req
        .user_identity
        .ok_or(ApiError::MissingField("userIdentity"))?;

    let token = state.relay.tokens.issue(&user);
    info!(user = %user, "issued plugin token");
    Ok(Json(IssueTokenResponse { token }))
}

/// Create the token routes router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/plugin/token", post(issue_token))
}
