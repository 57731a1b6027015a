//! Error types for prompt assembly and sentence streaming.

use derive_builder::UninitializedFieldError;

/// Errors surfaced by the crate.
///
/// End of a sentence stream is not an error: `SentenceStream::recv` reports it
/// as `Ok(None)`.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// The streaming request could not be opened. Never retried internally.
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// The transport failed in the middle of a stream. Text buffered for the
    /// sentence being assembled is dropped.
    #[error("stream read failed: {0}")]
    StreamRead(String),

    /// A required builder field was not set.
    #[error("missing field: {0}")]
    MissingField(String),

    /// Error reported by the OpenAI client.
    #[cfg(feature = "openai")]
    #[error("OpenAI error: {0}")]
    OpenAI(String),
}

impl From<UninitializedFieldError> for Error {
    fn from(value: UninitializedFieldError) -> Self {
        Error::MissingField(value.field_name().to_string())
    }
}

#[cfg(feature = "openai")]
impl From<async_openai::error::OpenAIError> for Error {
    fn from(value: async_openai::error::OpenAIError) -> Self {
        Error::OpenAI(value.to_string())
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
