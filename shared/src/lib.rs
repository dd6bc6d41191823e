pub mod config;
pub mod derivatives;
pub mod error;
pub mod events;
pub mod image_processing;
pub mod storage;

use aws_sdk_s3::Client as S3Client;
use std::sync::Arc;

use crate::config::Config;

/// Shared application state
///
/// Built once at startup and shared across invocations; read-only after
/// construction.
pub struct AppState {
    pub s3_client: S3Client,
    pub config: Config,
}

impl AppState {
    pub fn new(s3_client: S3Client, config: Config) -> Arc<Self> {
        Arc::new(Self { s3_client, config })
    }
}
