/// Placeholder tunnel URL used when INFERENCE_API_URL is not set.
pub const DEFAULT_ENDPOINT_URL: &str = "https://3307-35-199-44-38.ngrok-free.app/";

#[derive(Debug, Clone)]
pub struct Config {
    pub inference: InferenceConfig,
}

#[derive(Debug, Clone)]
pub struct InferenceConfig {
    pub endpoint_url: String,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_ENDPOINT_URL.to_string(),
        }
    }
}
