use thiserror::Error;

/// Failure kinds for a single derivative-generation invocation.
///
/// Every kind maps to the same external status (500); the distinction exists
/// so callers and tests can tell why a record failed.
#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("malformed event: {0}")]
    MalformedEvent(String),

    #[error("failed to fetch {bucket}/{key}: {detail}")]
    Fetch {
        bucket: String,
        key: String,
        detail: String,
    },

    #[error("failed to process image: {0}")]
    Decode(String),

    #[error("failed to write {key}: {detail}")]
    Write { key: String, detail: String },
}
