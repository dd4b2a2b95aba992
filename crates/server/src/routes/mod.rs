//! API route handlers for the studiobridge server.

pub mod generate;
pub mod health;
pub mod plugin;
pub mod scene;
pub mod tokens;

use std::sync::Arc;

use axum::Router;
use studiobridge_relay::RelayState;

use crate::error::ApiError;
use crate::state::AppState;

/// Resolve a bearer token to a user identity, or fail the request.
///
/// An absent token and an unresolvable token are distinct outcomes
/// (400 vs 401); both short-circuit the handler before any store is
/// mutated. `resolve` is a pure lookup, so an auth failure leaves the
/// relay state exactly as it was.
pub(crate) fn require_token(relay: &RelayState, token: Option<&str>) -> Result<String, ApiError> {
    let token = token.ok_or(ApiError::MissingField("token"))?;
    relay.tokens.resolve(token).ok_or(ApiError::InvalidToken)
}

/// Create the combined API router with all routes under /api prefix.
///
/// Routes:
/// - GET  /api/health - Health check
/// - POST /api/plugin/token - Issue a plugin token for a web session
/// - GET  /api/plugin/poll - Drain pending commands (counts as liveness)
/// - POST /api/plugin/heartbeat - Refresh liveness only
/// - GET  /api/plugin/status - Plugin connectivity for the web UI
/// - POST /api/plugin/scene - Plugin pushes its object-tree snapshot
/// - GET  /api/plugin/scene - Web UI pulls the mirrored snapshot
/// - POST /api/generate - Prompt fulfillment, enqueues the result
pub fn api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api", health::router())
        .nest("/api", tokens::router())
        .nest("/api", plugin::router())
        .nest("/api", scene::router())
        .nest("/api", generate::router())
        .with_state(state)
}
