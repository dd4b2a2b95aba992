// crates/core/src/llm/types.rs
//! Request and error types for asset generation.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// A request for one asset document.
#[derive(Debug, Clone, Serialize)]
pub struct AssetRequest {
    /// The user's natural-language description of the asset.
    pub prompt: String,
    /// The plugin's last synced object tree, when one exists. Lets the
    /// generator place new assets relative to what is already there.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene_context: Option<Value>,
}

/// Errors from the asset-generation collaborator.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("no generator configured")]
    NotConfigured,

    #[error("generator unavailable: {0}")]
    NotAvailable(String),

    #[error("upstream error: {0}")]
    Upstream(String),

    #[error("malformed asset document: {0}")]
    MalformedOutput(String),

    #[error("generation timed out after {0} seconds")]
    Timeout(u64),
}
