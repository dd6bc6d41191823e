use aws_lambda_events::event::s3::S3Event;

use crate::error::ProcessingError;

/// Bucket and decoded key of the object that triggered the invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceObject {
    pub bucket: String,
    pub key: String,
}

impl SourceObject {
    /// Extract the source bucket and object key from the first record.
    ///
    /// S3 delivers the key percent-encoded with `+` standing in for space;
    /// lookups need the decoded form.
    pub fn from_event(event: &S3Event) -> Result<Self, ProcessingError> {
        let record = event
            .records
            .first()
            .ok_or_else(|| ProcessingError::MalformedEvent("event has no records".to_string()))?;

        let bucket = record.s3.bucket.name.clone().ok_or_else(|| {
            ProcessingError::MalformedEvent("record is missing the bucket name".to_string())
        })?;

        let raw_key = record.s3.object.key.as_deref().ok_or_else(|| {
            ProcessingError::MalformedEvent("record is missing the object key".to_string())
        })?;

        Ok(Self {
            bucket,
            key: unquote_plus(raw_key)?,
        })
    }
}

fn unquote_plus(raw: &str) -> Result<String, ProcessingError> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|decoded| decoded.into_owned())
        .map_err(|e| {
            ProcessingError::MalformedEvent(format!("object key is not valid percent-encoding: {e}"))
        })
}
