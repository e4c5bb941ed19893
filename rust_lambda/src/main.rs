use aws_config::BehaviorVersion;
use aws_sdk_sns::Client as SnsClient;
use lambda_runtime::{run, service_fn, tracing, Error};
mod config;
mod error;
mod event_handler;
mod notification;
use config::Config;
use event_handler::function_handler;
use notification::SnsPublisher;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::subscriber::fmt()
        .json()
        .with_ansi(false)
        .without_time()
        .init();
    let config = Config::from_env();
    tracing::info!(topic_arn = %config.topic_arn, "Initialised config");
    let shared_config = aws_config::load_defaults(BehaviorVersion::v2025_01_17()).await;
    let publisher = SnsPublisher::new(SnsClient::new(&shared_config));
    run(service_fn(|event| function_handler(event, &publisher, &config))).await
}
