use super::types::{GenerationRequest, GenerationResponse};
use crate::{Error, Result, config::InferenceConfig};
use async_trait::async_trait;
use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE};
use tracing::debug;

#[async_trait]
pub trait InferenceClient: Send + Sync {
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse>;
}

/// Client for the remote text-generation endpoint. Built once at cold start
/// and shared across invocations; no timeout is set here, deadlines are the
/// hosting platform's responsibility.
pub struct HttpInferenceClient {
    client: reqwest::Client,
    endpoint_url: String,
}

impl HttpInferenceClient {
    pub fn new(config: InferenceConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint_url: config.endpoint_url,
        }
    }
}

#[async_trait]
impl InferenceClient for HttpInferenceClient {
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse> {
        let payload = serde_json::to_vec(&request)?;

        debug!(
            "Calling inference endpoint with payload of {} bytes",
            payload.len()
        );

        let response = self
            .client
            .post(&self.endpoint_url)
            .header(CONTENT_TYPE, "application/json")
            .header(CONTENT_LENGTH, payload.len())
            .body(payload)
            .send()
            .await
            .map_err(Error::Unreachable)?;

        let status = response.status();
        let body = response.text().await.map_err(Error::Unreachable)?;

        if !status.is_success() {
            return Err(Error::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let generated: GenerationResponse =
            serde_json::from_str(&body).map_err(|e| Error::malformed_response(e.to_string()))?;

        debug!("Response time: {} seconds", generated.response_time);

        Ok(generated)
    }
}
