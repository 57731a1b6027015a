//! Provides the user-facing entry point: one conversational turn in, a
//! stream of sentences out.

use tokio_util::sync::CancellationToken;

use crate::core::language_model::LanguageModel;
use crate::core::prompt::PromptAssembler;
use crate::core::sentence_stream::SentenceStream;
use crate::core::types::{Language, Utterance};
use crate::error::{Error, Result};

/// Pairs a streaming model with the prompt layout used to talk to it.
#[derive(Debug, Clone)]
pub struct ChatCompletion<M: LanguageModel> {
    model: M,
    assembler: PromptAssembler,
}

impl<M: LanguageModel> ChatCompletion<M> {
    pub fn new(model: M, assembler: PromptAssembler) -> Self {
        Self { model, assembler }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn assembler(&self) -> &PromptAssembler {
        &self.assembler
    }

    /// Opens a streaming reply to `prompt` given the conversation so far.
    ///
    /// The returned [`SentenceStream`] owns the connection. Cancelling
    /// `cancel` aborts the request: while opening it yields
    /// [`Error::UpstreamUnavailable`], afterwards the next pull fails with
    /// [`Error::StreamRead`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::UpstreamUnavailable`] if the stream could not be
    /// opened. The call is not retried.
    pub async fn complete(
        &self,
        history: &[Utterance],
        prompt: &Utterance,
        language: &Language,
        cancel: CancellationToken,
    ) -> Result<SentenceStream> {
        let messages = self.assembler.assemble(history, prompt, language);

        let opened = tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(Error::UpstreamUnavailable("cancelled".to_string())),
            opened = self.model.stream_chat(messages) => opened,
        };

        let fragments = opened.map_err(|e| {
            log::error!("error creating chat completion stream: {e}");
            match e {
                Error::UpstreamUnavailable(msg) => Error::UpstreamUnavailable(msg),
                other => Error::UpstreamUnavailable(other.to_string()),
            }
        })?;

        Ok(SentenceStream::with_cancellation(fragments, cancel))
    }
}
