use serde::{Deserialize, Serialize};

/// Generation payload sent upstream. Sampling parameters are fixed; only the
/// prompt varies per call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
    pub max_new_tokens: u32,
    pub do_sample: bool,
    pub temperature: f32,
    pub top_p: f32,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            max_new_tokens: 512,
            do_sample: true,
            temperature: 0.7,
            top_p: 0.9,
        }
    }
}

/// Upstream reply. Both fields are required; a reply missing either is
/// treated as malformed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub generated_text: String,
    pub response_time: f64,
}
