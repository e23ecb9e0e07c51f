mod types;

pub use types::*;

use std::env;
use tracing::debug;

/// Reads configuration from the environment. Called once at cold start; the
/// resulting value is never re-read or mutated afterwards.
pub fn load() -> Config {
    let endpoint_url =
        env::var("INFERENCE_API_URL").unwrap_or_else(|_| DEFAULT_ENDPOINT_URL.to_string());

    debug!("Using inference endpoint: {}", endpoint_url);

    Config {
        inference: InferenceConfig { endpoint_url },
    }
}
