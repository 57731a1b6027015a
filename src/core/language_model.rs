//! Defines the `LanguageModel` trait, the seam between prompt assembly and a
//! streaming chat backend.
//!
//! A backend only has to open a stream of text fragments for a list of
//! messages. Everything above it (sentence segmentation, termination,
//! release) works on the [`FragmentStream`] alone, so it can be driven by a
//! synthetic source in tests.

use std::pin::Pin;

use async_trait::async_trait;
use futures::Stream;

use crate::core::messages::Message;
use crate::error::Result;

/// Incremental text fragments from a streaming chat backend.
///
/// `None` from the stream is the end-of-source signal. Dropping the stream
/// releases the underlying connection.
pub type FragmentStream = Pin<Box<dyn Stream<Item = Result<String>> + Send>>;

/// The core trait abstracting a streaming chat model.
#[async_trait]
pub trait LanguageModel: Send + Sync + std::fmt::Debug {
    /// Opens a streaming chat request for the given messages.
    ///
    /// This performs exactly one outbound call and never retries.
    ///
    /// # Errors
    ///
    /// Returns an `Error` if the stream could not be opened.
    async fn stream_chat(&self, messages: Vec<Message>) -> Result<FragmentStream>;
}
