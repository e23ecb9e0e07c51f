use inference_relay::event::{InboundEvent, OutboundEvent};
use inference_relay::{config, handler, inference::HttpInferenceClient};
use lambda_runtime::{LambdaEvent, run, service_fn};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = config::load();
    info!(
        "Relaying chat messages to {}",
        config.inference.endpoint_url
    );

    let client = HttpInferenceClient::new(config.inference);
    let client = &client;

    run(service_fn(move |event: LambdaEvent<InboundEvent>| async move {
        Ok::<OutboundEvent, lambda_runtime::Error>(handler::handle(event.payload, client).await)
    }))
    .await
}
