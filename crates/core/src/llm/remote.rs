// crates/core/src/llm/remote.rs
//! HTTP binding to a remote asset-generation service.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use super::config::GeneratorConfig;
use super::provider::AssetGenerator;
use super::types::{AssetRequest, GeneratorError};

/// Calls a remote generation endpoint that accepts the prompt (plus
/// optional scene context) and answers with one JSON asset document.
pub struct RemoteGenerator {
    client: reqwest::Client,
    endpoint: String,
    timeout_secs: u64,
}

impl RemoteGenerator {
    pub fn new(endpoint: String, timeout_secs: u64) -> Result<Self, GeneratorError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| GeneratorError::NotAvailable(e.to_string()))?;
        Ok(Self {
            client,
            endpoint,
            timeout_secs,
        })
    }

    /// Build a generator from config. `None` when no endpoint is set.
    pub fn from_config(config: &GeneratorConfig) -> Result<Option<Self>, GeneratorError> {
        match &config.endpoint {
            Some(endpoint) => Ok(Some(Self::new(endpoint.clone(), config.timeout_secs)?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl AssetGenerator for RemoteGenerator {
    async fn generate(&self, request: AssetRequest) -> Result<Value, GeneratorError> {
        debug!(endpoint = %self.endpoint, "requesting asset generation");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeneratorError::Timeout(self.timeout_secs)
                } else {
                    GeneratorError::Upstream(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeneratorError::Upstream(format!(
                "upstream returned {status}"
            )));
        }

        let document: Value = response
            .json()
            .await
            .map_err(|e| GeneratorError::MalformedOutput(e.to_string()))?;

        // The relay treats the document as opaque, but a non-object can
        // never be a valid asset description for the plugin.
        if !document.is_object() {
            return Err(GeneratorError::MalformedOutput(
                "asset document is not a JSON object".to_string(),
            ));
        }

        Ok(document)
    }

    fn name(&self) -> &str {
        "remote"
    }
}

/// Stand-in used when no generation endpoint is configured. The relay
/// protocol stays fully functional; only prompt fulfillment fails.
pub struct DisabledGenerator;

#[async_trait]
impl AssetGenerator for DisabledGenerator {
    async fn generate(&self, _request: AssetRequest) -> Result<Value, GeneratorError> {
        Err(GeneratorError::NotConfigured)
    }

    fn name(&self) -> &str {
        "disabled"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn generate_returns_upstream_document() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/assets")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"type":"part","name":"Wall","size":[4,8,1]}"#)
            .create_async()
            .await;

        let generator = RemoteGenerator::new(format!("{}/v1/assets", server.url()), 5).unwrap();
        let document = generator
            .generate(AssetRequest {
                prompt: "a brick wall".to_string(),
                scene_context: None,
            })
            .await
            .unwrap();

        assert_eq!(document["type"], "part");
        assert_eq!(document["name"], "Wall");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn upstream_failure_maps_to_upstream_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/v1/assets")
            .with_status(500)
            .create_async()
            .await;

        let generator = RemoteGenerator::new(format!("{}/v1/assets", server.url()), 5).unwrap();
        let err = generator
            .generate(AssetRequest {
                prompt: "a brick wall".to_string(),
                scene_context: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, GeneratorError::Upstream(_)));
    }

    #[tokio::test]
    async fn non_object_document_is_rejected() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/v1/assets")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("[1,2,3]")
            .create_async()
            .await;

        let generator = RemoteGenerator::new(format!("{}/v1/assets", server.url()), 5).unwrap();
        let err = generator
            .generate(AssetRequest {
                prompt: "a brick wall".to_string(),
                scene_context: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, GeneratorError::MalformedOutput(_)));
    }

    #[tokio::test]
    async fn disabled_generator_always_fails() {
        let err = DisabledGenerator
            .generate(AssetRequest {
                prompt: "anything".to_string(),
                scene_context: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, GeneratorError::NotConfigured));
        assert_eq!(DisabledGenerator.name(), "disabled");
    }

    #[test]
    fn from_config_without_endpoint_is_none() {
        let config = GeneratorConfig::default();
        assert!(RemoteGenerator::from_config(&config).unwrap().is_none());
    }
}
