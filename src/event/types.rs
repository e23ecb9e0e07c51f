use crate::Error;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Proxy-integration request as delivered by the hosting platform.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundEvent {
    #[serde(default)]
    pub request_context: Option<RequestContext>,
    #[serde(default)]
    pub body: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestContext {
    #[serde(default)]
    pub authorizer: Option<Authorizer>,
}

/// Identity context populated by the authentication layer before the handler
/// runs. Claims are consumed for logging only.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Authorizer {
    #[serde(default)]
    pub claims: HashMap<String, Value>,
}

impl InboundEvent {
    /// Authenticated caller identity, preferring the email claim over the
    /// username claim. None when no identity context is attached.
    pub fn authenticated_user(&self) -> Option<&str> {
        let claims = &self.request_context.as_ref()?.authorizer.as_ref()?.claims;
        claims
            .get("email")
            .or_else(|| claims.get("cognito:username"))
            .and_then(Value::as_str)
    }
}

/// Decoded request body: the single user-supplied message.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Proxy-integration response handed back to the hosting platform. The body
/// is a JSON document serialized to a string, per the proxy contract.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundEvent {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl OutboundEvent {
    /// 200 envelope wrapping the generated text.
    pub fn success(response: impl Into<String>, response_time: f64) -> Self {
        let body = serde_json::json!({
            "success": true,
            "response": response.into(),
            "response_time": response_time,
        });

        Self {
            status_code: 200,
            headers: cors_headers(),
            body: body.to_string(),
        }
    }

    /// 500 envelope embedding the error's description.
    pub fn failure(error: &Error) -> Self {
        let body = serde_json::json!({
            "success": false,
            "error": error.to_string(),
        });

        Self {
            status_code: 500,
            headers: cors_headers(),
            body: body.to_string(),
        }
    }
}

/// Headers attached to every outbound event, success or failure.
pub fn cors_headers() -> HashMap<String, String> {
    HashMap::from([
        ("Content-Type".to_string(), "application/json".to_string()),
        ("Access-Control-Allow-Origin".to_string(), "*".to_string()),
        (
            "Access-Control-Allow-Headers".to_string(),
            "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token".to_string(),
        ),
        (
            "Access-Control-Allow-Methods".to_string(),
            "OPTIONS,POST".to_string(),
        ),
    ])
}
