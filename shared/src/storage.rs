use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as S3Client;

use crate::error::ProcessingError;

/// Read/write access to object storage.
///
/// The production implementation is the AWS SDK client; tests substitute an
/// in-memory store.
#[async_trait]
pub trait ObjectStore {
    /// Fetch the full content of `bucket`/`key`.
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, ProcessingError>;

    /// Store `bytes` at `bucket`/`key`, overwriting any existing object.
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        bytes: Vec<u8>,
    ) -> Result<(), ProcessingError>;
}

#[async_trait]
impl ObjectStore for S3Client {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, ProcessingError> {
        let fetch_error = |detail: String| ProcessingError::Fetch {
            bucket: bucket.to_string(),
            key: key.to_string(),
            detail,
        };

        let output = self
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| fetch_error(e.to_string()))?;

        let body = output
            .body
            .collect()
            .await
            .map_err(|e| fetch_error(e.to_string()))?;

        Ok(body.into_bytes().to_vec())
    }

    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        bytes: Vec<u8>,
    ) -> Result<(), ProcessingError> {
        self.put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| ProcessingError::Write {
                key: key.to_string(),
                detail: e.to_string(),
            })?;

        Ok(())
    }
}
