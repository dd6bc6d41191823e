use aws_lambda_events::event::s3::S3Event;
use lambda_runtime::LambdaEvent;
use serde::Serialize;

use photoflow_shared::config::Config;
use photoflow_shared::derivatives::{derived_key, DerivativeKind};
use photoflow_shared::error::ProcessingError;
use photoflow_shared::events::SourceObject;
use photoflow_shared::image_processing::resize_to_fit;
use photoflow_shared::storage::ObjectStore;

/// Invocation result: an integer status plus a human-readable message.
#[derive(Debug, Serialize)]
pub struct ResizeResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl ResizeResponse {
    fn ok(key: &str) -> Self {
        Self {
            status_code: 200,
            body: format!("Successfully processed {}", key),
        }
    }

    fn failed(key: &str) -> Self {
        Self {
            status_code: 500,
            body: format!("Error processing {}. See logs.", key),
        }
    }
}

/// Generate both derivatives for the first record of an S3 notification.
///
/// The pipeline is a single path: decode, fetch, then resize and upload each
/// rendition in turn. The first failure aborts the rest; a derivative that
/// was already uploaded stays where it is.
pub async fn handle_event(
    event: LambdaEvent<S3Event>,
    store: &impl ObjectStore,
    config: &Config,
) -> ResizeResponse {
    tracing::info!(
        "Received event with {} record(s)",
        event.payload.records.len()
    );

    let source = match SourceObject::from_event(&event.payload) {
        Ok(source) => source,
        Err(e) => {
            // Failed before the key was known
            tracing::error!("Error processing event: {}", e);
            return ResizeResponse::failed("unknown key");
        }
    };

    match process_object(&source, store, config).await {
        Ok(()) => ResizeResponse::ok(&source.key),
        Err(e) => {
            tracing::error!("Error processing event: {}", e);
            ResizeResponse::failed(&source.key)
        }
    }
}

async fn process_object(
    source: &SourceObject,
    store: &impl ObjectStore,
    config: &Config,
) -> Result<(), ProcessingError> {
    tracing::info!(
        "Downloading object: {} from bucket: {}",
        source.key,
        source.bucket
    );
    let image_bytes = store.get_object(&source.bucket, &source.key).await?;

    for kind in DerivativeKind::ALL {
        tracing::info!("Generating {} for {}", kind.label(), source.key);
        let resized = resize_to_fit(&image_bytes, kind.size_limit(config))?;

        let key = derived_key(kind, &source.key);
        let bucket = config
            .destination_bucket
            .as_deref()
            .ok_or_else(|| ProcessingError::Write {
                key: key.clone(),
                detail: "DESTINATION_BUCKET is not set".to_string(),
            })?;

        store.put_object(bucket, &key, resized).await?;
        tracing::info!("Uploaded {} to {}/{}", kind.label(), bucket, key);
    }

    Ok(())
}
