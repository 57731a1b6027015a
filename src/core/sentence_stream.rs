//! Turns a stream of text fragments into whole sentences.
//!
//! A sentence ends when the accumulated text, ignoring trailing whitespace,
//! ends with a period. Abbreviations, decimals and ellipses are therefore
//! split early; `?` and `!` do not end a sentence.
//!
//! ```text
//! "Hello"   -> (buffered)
//! " world." -> "Hello world."
//! " Bye"    -> (buffered)
//! <end>     -> "Bye"
//! <end>     -> None
//! ```
//!
//! A [`CancellationToken`] held by another task can abort a pending pull:
//! the pull fails with [`Error::StreamRead`] and the stream terminates.

use std::fmt;

use futures::{Stream, StreamExt, stream};
use tokio_util::sync::CancellationToken;

use crate::core::language_model::FragmentStream;
use crate::error::{Error, Result};

/// Lifecycle of a [`SentenceStream`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamState {
    /// More sentences may follow.
    Open,
    /// The source is exhausted and its trailing partial sentence was returned.
    Drained,
    /// No more output will ever be produced.
    Terminated,
}

/// Exclusive handle over one fragment source, yielding complete sentences.
///
/// The source is released on [`SentenceStream::close`], when the stream
/// terminates, or on drop, whichever comes first.
pub struct SentenceStream {
    source: Option<FragmentStream>,
    state: StreamState,
    cancel: CancellationToken,
}

impl SentenceStream {
    pub fn new(source: FragmentStream) -> Self {
        Self::with_cancellation(source, CancellationToken::new())
    }

    /// Creates a stream whose pulls fail once `cancel` is cancelled.
    pub fn with_cancellation(source: FragmentStream, cancel: CancellationToken) -> Self {
        Self {
            source: Some(source),
            state: StreamState::Open,
            cancel,
        }
    }

    pub fn state(&self) -> StreamState {
        self.state
    }

    /// Waits for the next complete sentence.
    ///
    /// Returns `Ok(None)` once the stream has ended. A sentence cut by the
    /// boundary is returned as accumulated, while a trailing partial
    /// sentence at the end of the source is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StreamRead`] if the source fails or the stream's
    /// cancellation token fires. Text buffered for the current sentence is
    /// dropped and the stream terminates.
    pub async fn recv(&mut self) -> Result<Option<String>> {
        if self.state != StreamState::Open {
            return Ok(None);
        }
        let Some(source) = self.source.as_mut() else {
            self.state = StreamState::Terminated;
            return Ok(None);
        };

        let mut buffer = String::new();
        let outcome = loop {
            let next = tokio::select! {
                biased;
                _ = self.cancel.cancelled() => {
                    break Err(Error::StreamRead("cancelled".to_string()));
                }
                next = source.next() => next,
            };
            match next {
                Some(Ok(fragment)) => {
                    buffer.push_str(&fragment);
                    if buffer.trim_end().ends_with('.') {
                        return Ok(Some(buffer));
                    }
                }
                Some(Err(e)) => break Err(e),
                None => break Ok(()),
            }
        };

        match outcome {
            Err(e) => {
                log::warn!(
                    "sentence stream read failed, dropping {} buffered bytes: {}",
                    buffer.len(),
                    e
                );
                self.terminate();
                Err(match e {
                    Error::StreamRead(msg) => Error::StreamRead(msg),
                    other => Error::StreamRead(other.to_string()),
                })
            }
            Ok(()) => {
                let trimmed = buffer.trim();
                if trimmed.is_empty() {
                    self.terminate();
                    return Ok(None);
                }

                let sentence = trimmed.to_string();
                self.close();
                self.state = StreamState::Drained;
                Ok(Some(sentence))
            }
        }
    }

    /// Releases the underlying source. Safe to call any number of times.
    pub fn close(&mut self) {
        if self.source.take().is_some() {
            log::debug!("sentence stream source released");
        }
        if self.state == StreamState::Open {
            self.state = StreamState::Terminated;
        }
    }

    /// Adapts this handle into a `Stream` of sentences.
    pub fn into_stream(self) -> impl Stream<Item = Result<String>> + Send {
        stream::unfold(self, |mut sentences| async move {
            match sentences.recv().await {
                Ok(Some(sentence)) => Some((Ok(sentence), sentences)),
                Ok(None) => None,
                Err(e) => Some((Err(e), sentences)),
            }
        })
    }

    fn terminate(&mut self) {
        self.close();
        self.state = StreamState::Terminated;
    }
}

impl Drop for SentenceStream {
    fn drop(&mut self) {
        self.close();
    }
}

impl fmt::Debug for SentenceStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SentenceStream")
            .field("state", &self.state)
            .field("released", &self.source.is_none())
            .field("cancelled", &self.cancel.is_cancelled())
            .finish()
    }
}
