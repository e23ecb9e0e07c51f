use inference_relay::event::{Authorizer, InboundEvent, OutboundEvent, RequestContext};
use serde_json::{Value, json};
use std::collections::HashMap;

/// Inbound event whose body wraps the given message, no identity context.
pub fn event_with_message(message: &str) -> InboundEvent {
    InboundEvent {
        request_context: None,
        body: Some(json!({ "message": message }).to_string()),
    }
}

/// Inbound event with a raw (possibly absent or malformed) body string.
pub fn event_with_raw_body(body: Option<&str>) -> InboundEvent {
    InboundEvent {
        request_context: None,
        body: body.map(str::to_string),
    }
}

/// Inbound event carrying identity claims alongside a valid message body.
pub fn event_with_claims(message: &str, claims: HashMap<String, Value>) -> InboundEvent {
    InboundEvent {
        request_context: Some(RequestContext {
            authorizer: Some(Authorizer { claims }),
        }),
        body: Some(json!({ "message": message }).to_string()),
    }
}

/// Decodes an outbound event's body string back into JSON.
pub fn parse_body(outbound: &OutboundEvent) -> Value {
    serde_json::from_str(&outbound.body).expect("outbound body is a JSON document")
}

pub fn assert_cors_headers(outbound: &OutboundEvent) {
    let get = |name: &str| outbound.headers.get(name).map(String::as_str);

    assert_eq!(get("Content-Type"), Some("application/json"));
    assert_eq!(get("Access-Control-Allow-Origin"), Some("*"));
    assert_eq!(
        get("Access-Control-Allow-Headers"),
        Some("Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token")
    );
    assert_eq!(get("Access-Control-Allow-Methods"), Some("OPTIONS,POST"));
}
