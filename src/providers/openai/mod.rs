//! This module provides the OpenAI provider, which implements the
//! `LanguageModel` trait on top of the streaming chat completions API.

pub mod conversions;
pub mod settings;

use async_openai::{Client, config::OpenAIConfig};
use async_trait::async_trait;
use futures::{StreamExt, stream::once};
use serde::Serialize;

use crate::core::language_model::{FragmentStream, LanguageModel};
use crate::core::messages::Message;
use crate::error::{Error, Result};
use crate::providers::openai::conversions::{delta_text, to_stream_request};
use crate::providers::openai::settings::{OpenAIProviderSettings, OpenAIProviderSettingsBuilder};

/// The OpenAI provider.
#[derive(Debug, Clone, Serialize)]
pub struct OpenAI {
    #[serde(skip)]
    client: Client<OpenAIConfig>,
    settings: OpenAIProviderSettings,
}

impl OpenAI {
    /// Creates a new `OpenAI` provider for the given model, keyed from the
    /// environment.
    pub fn new(model_name: impl Into<String>) -> Self {
        Self::with_settings(OpenAIProviderSettings {
            model_name: model_name.into(),
            ..Default::default()
        })
    }

    /// OpenAI provider setting builder.
    pub fn builder() -> OpenAIProviderSettingsBuilder {
        OpenAIProviderSettings::builder()
    }

    pub fn with_settings(settings: OpenAIProviderSettings) -> Self {
        Self {
            client: settings.client(),
            settings,
        }
    }

    pub fn settings(&self) -> &OpenAIProviderSettings {
        &self.settings
    }
}

impl Default for OpenAI {
    fn default() -> Self {
        Self::with_settings(OpenAIProviderSettings::default())
    }
}

#[async_trait]
impl LanguageModel for OpenAI {
    async fn stream_chat(&self, messages: Vec<Message>) -> Result<FragmentStream> {
        let request = to_stream_request(&self.settings.model_name, messages);
        log::debug!(
            "opening chat completion stream with {} messages on {}",
            request.messages.len(),
            request.model
        );

        let openai_stream = self.client.chat().create_stream(request).await?;

        // the HTTP response only arrives with the first event, so wait for it
        // to report a refused request as a failure to open
        let (first, rest) = openai_stream.into_future().await;
        let openai_stream = match first {
            Some(Err(e)) => return Err(e.into()),
            Some(Ok(first)) => once(async move { Ok(first) }).chain(rest).boxed(),
            None => rest,
        };

        let fragments = openai_stream.map(|event| match event {
            Ok(event) => Ok(delta_text(event)),
            Err(e) => Err(Error::StreamRead(e.to_string())),
        });

        Ok(Box::pin(fragments))
    }
}
