use crate::{
    Error, Result,
    event::{ChatRequest, InboundEvent, OutboundEvent},
    inference::{GenerationRequest, InferenceClient},
};
use tracing::{error, info};

/// Translates one inbound event into exactly one outbound event. Every error
/// raised along the pipeline is caught here and surfaced as the 500 envelope;
/// this function itself never fails.
pub async fn handle(event: InboundEvent, client: &dyn InferenceClient) -> OutboundEvent {
    match relay(event, client).await {
        Ok(outbound) => outbound,
        Err(e) => {
            error!("Error: {}", e);
            OutboundEvent::failure(&e)
        }
    }
}

async fn relay(event: InboundEvent, client: &dyn InferenceClient) -> Result<OutboundEvent> {
    // Identity is logged for observability only and never forwarded upstream.
    if let Some(user) = event.authenticated_user() {
        info!("Authenticated user: {}", user);
    }

    let body = event
        .body
        .as_deref()
        .ok_or_else(|| Error::bad_request("missing request body"))?;
    let chat: ChatRequest =
        serde_json::from_str(body).map_err(|e| Error::bad_request(e.to_string()))?;

    info!("Processing message: {}", chat.message);

    let generated = client.generate(GenerationRequest::new(chat.message)).await?;

    Ok(OutboundEvent::success(
        generated.generated_text,
        generated.response_time,
    ))
}
