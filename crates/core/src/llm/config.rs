// crates/core/src/llm/config.rs
//! Asset generator configuration.

/// Budget for one generation round-trip. The relay itself never waits
/// on the generator; this only bounds the prompt-fulfillment request.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Configuration for the asset-generation upstream.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Full URL of the generation endpoint. `None` disables generation
    /// (the relay protocol keeps working; only /api/generate fails).
    pub endpoint: Option<String>,
    pub timeout_secs: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl GeneratorConfig {
    /// Read configuration from the environment.
    ///
    /// - `STUDIOBRIDGE_LLM_URL` — generation endpoint
    /// - `STUDIOBRIDGE_LLM_TIMEOUT_SECS` — round-trip budget
    pub fn from_env() -> Self {
        Self {
            endpoint: std::env::var("STUDIOBRIDGE_LLM_URL").ok(),
            timeout_secs: std::env::var("STUDIOBRIDGE_LLM_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        }
    }
}
