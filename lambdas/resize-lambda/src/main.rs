use aws_lambda_events::event::s3::S3Event;
use aws_sdk_s3::Client as S3Client;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use photoflow_shared::config::Config;
use photoflow_shared::AppState;
use std::sync::Arc;

mod handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .without_time()
        .init();

    // Initialize the AWS client and configuration once at startup
    let aws_config = aws_config::load_from_env().await;
    let state = AppState::new(S3Client::new(&aws_config), Config::from_env());

    run(service_fn(move |event: LambdaEvent<S3Event>| {
        let state = Arc::clone(&state);
        async move {
            Ok::<_, Error>(handler::handle_event(event, &state.s3_client, &state.config).await)
        }
    }))
    .await
}
