// crates/core/src/llm/provider.rs
//! AssetGenerator trait defining the interface to the LLM layer.

use async_trait::async_trait;
use serde_json::Value;

use super::types::{AssetRequest, GeneratorError};

/// A collaborator that turns a prompt into a structured asset document.
///
/// Implementations:
/// - `RemoteGenerator` — HTTP call to a configured generation service
/// - `DisabledGenerator` — placeholder when no upstream is configured
#[async_trait]
pub trait AssetGenerator: Send + Sync {
    /// Produce one asset document for the request, or fail. The
    /// returned value is opaque to the relay: it is queued and handed
    /// to the Studio plugin as-is.
    async fn generate(&self, request: AssetRequest) -> Result<Value, GeneratorError>;

    /// Generator name for logging (e.g. "remote", "disabled").
    fn name(&self) -> &str;
}
