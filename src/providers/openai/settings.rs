//! Settings for the OpenAI provider.

use async_openai::{Client, config::OpenAIConfig};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::providers::openai::OpenAI;

/// Chat model used when none is configured.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Connection and model settings for [`OpenAI`].
#[derive(Debug, Clone, Serialize, Deserialize, Builder)]
#[builder(
    pattern = "owned",
    setter(into),
    build_fn(private, name = "build_settings", error = "Error")
)]
pub struct OpenAIProviderSettings {
    /// Chat model id.
    #[builder(default = "DEFAULT_MODEL.to_string()")]
    pub model_name: String,

    /// API key. Falls back to the `OPENAI_API_KEY` environment variable.
    #[serde(skip_serializing)]
    #[builder(default, setter(strip_option, into))]
    pub api_key: Option<String>,

    /// API base url, for proxies and compatible servers.
    #[builder(default, setter(strip_option, into))]
    pub base_url: Option<String>,
}

impl OpenAIProviderSettings {
    pub fn builder() -> OpenAIProviderSettingsBuilder {
        OpenAIProviderSettingsBuilder::default()
    }

    pub(crate) fn client(&self) -> Client<OpenAIConfig> {
        let mut config = OpenAIConfig::new();
        if let Some(key) = &self.api_key {
            config = config.with_api_key(key);
        }
        if let Some(base_url) = &self.base_url {
            config = config.with_api_base(base_url);
        }
        Client::with_config(config)
    }
}

impl Default for OpenAIProviderSettings {
    fn default() -> Self {
        Self {
            model_name: DEFAULT_MODEL.to_string(),
            api_key: None,
            base_url: None,
        }
    }
}

impl OpenAIProviderSettingsBuilder {
    /// Builds the provider from the collected settings.
    pub fn build(self) -> Result<OpenAI> {
        let settings = self.build_settings()?;
        Ok(OpenAI::with_settings(settings))
    }
}
